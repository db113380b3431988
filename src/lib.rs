//! # hello_greeter
//!
//! Library part of the interactive greeter: the greeting formatter and
//! the read-greet loop it is driven by.

pub mod error;
pub mod greeting;
pub mod session;

pub use error::GreeterError;
pub use greeting::build_greeting;
pub use session::{run, Outcome, Session};
