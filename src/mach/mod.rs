/*!
## Rust Machine Module

This Rust module is the interpreter for the RPN language: the operand
stack, the word dictionary, register and vector memory, and the
runtime that steps through tokens.

*/

mod dictionary;
mod opcode;
mod operation;
mod runtime;
mod stack;
mod val;
pub mod var;

pub use dictionary::Dictionary;
pub use dictionary::Word;
pub use opcode::Opcode;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::MAX_PRECISION;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
