/*!
# Rust Language Module

This Rust module provides lexical analysis of the RPN language and the
error type shared by the whole interpreter.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Literal;
pub use token::Token;
