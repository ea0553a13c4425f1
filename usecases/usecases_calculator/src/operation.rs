//! Operation Tags
//!
//! The closed set of arithmetic operations the calculator understands.
//!
//! Each operation has one canonical symbol (`+ - * / % **`). Front ends may
//! also accept the operation's name (`add`, `power`, ...) through
//! [`Operation::from_token`]; the strict symbol set is what
//! [`Operation::from_symbol`] and the validators recognize.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Power,    // **
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
    ];

    /// Canonical symbol for this operation
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::Power => "**",
        }
    }

    /// Lowercase word alias for this operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Power => "power",
        }
    }

    /// Look up an operation by its exact symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Resolve a user-supplied token to an operation
    ///
    /// Accepts the canonical symbols and, case-insensitively, the word
    /// aliases. Anything else is [`CalcError::InvalidOperation`] carrying
    /// the token as given.
    ///
    /// # Examples
    /// ```
    /// use usecases_calculator::{CalcError, Operation};
    ///
    /// assert_eq!(Operation::from_token("**"), Ok(Operation::Power));
    /// assert_eq!(Operation::from_token("Divide"), Ok(Operation::Divide));
    /// assert_eq!(
    ///     Operation::from_token("^"),
    ///     Err(CalcError::InvalidOperation("^".to_string()))
    /// );
    /// ```
    pub fn from_token(token: &str) -> Result<Self, CalcError> {
        if let Some(op) = Self::from_symbol(token) {
            return Ok(op);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| CalcError::InvalidOperation(token.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}
