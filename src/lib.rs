//! # RPN
//!
//! A stack based calculator for real and complex numbers in the spirit of
//! FORTH and dc.
//!
//! Run the executable and type words separated by spaces. Numbers go on
//! the stack and everything else operates on it.
//! ```text
//! > 10 6 4 - / p
//! 5
//! ```
//!
//! The [`mach::Runtime`] can also be driven directly.
//! ```
//! use rpn::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("3 4j abs p");
//! assert_eq!(runtime.execute(100), Event::Print("5\n".to_string()));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
