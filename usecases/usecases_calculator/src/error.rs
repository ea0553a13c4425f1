//! Calculator Errors
//!
//! The closed set of ways a calculation can fail. The core never recovers
//! from any of them and never substitutes a default value; callers branch
//! on the variant.

use thiserror::Error;

/// Calculation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divisor is zero on divide
    #[error("Cannot divide by zero!")]
    DivideByZero,
    /// Divisor is zero on modulo
    #[error("Cannot modulo by zero!")]
    ModuloByZero,
    /// Exponent is negative on power
    #[error("Power does not support negative exponents!")]
    NegativeExponent,
    /// Result of a power would exceed `MAX_POWER_BITS` bits
    #[error("Exponent is too large!")]
    ExponentTooLarge,
    /// Operation token is not one of the recognized operations
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
