//! Front-end errors
//!
//! Wraps the core's error kinds together with the failures that only exist
//! at the terminal boundary (bad operand text, I/O, usage).

use entities_big_integer::ParseIntegerError;
use thiserror::Error;
use usecases_calculator::CalcError;

/// bigcalc error
#[derive(Debug, Error)]
pub enum CliError {
    /// Operand text is not an integer literal
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] ParseIntegerError),
    /// The calculator rejected the operation
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// Reading or writing the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Command line did not describe a valid invocation
    #[error("{0}")]
    Usage(String),
}
