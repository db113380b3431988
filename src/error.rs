use std::io;
use thiserror::Error;

/// Errors of a greeter session.
#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Reading input failed!")]
    Read(#[source] io::Error),
    #[error("Writing output failed!")]
    Write(#[source] io::Error),
}
