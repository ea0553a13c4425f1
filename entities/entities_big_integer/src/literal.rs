//! Decimal Literals
//!
//! Recognizes the textual form of an integer operand: an optional leading
//! `-` followed by one or more ASCII decimal digits. Anything else (a `+`
//! sign, a decimal point, exponent notation, surrounding whitespace, radix
//! prefixes) is rejected.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Compiled integer literal grammar
static INTEGER_LITERAL: OnceLock<Regex> = OnceLock::new();

fn integer_literal_pattern() -> &'static Regex {
    INTEGER_LITERAL.get_or_init(|| {
        // \A and \z anchor to the whole input, a trailing newline included
        Regex::new(r"\A-?[0-9]+\z").expect("integer literal pattern compiles")
    })
}

/// Errors produced while reading an integer from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntegerError {
    /// Input was empty
    #[error("empty input is not a number")]
    Empty,
    /// Input does not match the integer literal grammar
    #[error("not a valid integer: {0:?}")]
    InvalidLiteral(String),
}

/// Check whether `text` is a valid integer literal
///
/// Never panics, whatever the input.
///
/// # Examples
/// ```
/// use entities_big_integer::is_integer_literal;
///
/// assert!(is_integer_literal("-456"));
/// assert!(!is_integer_literal("12.5"));
/// ```
pub fn is_integer_literal(text: &str) -> bool {
    integer_literal_pattern().is_match(text)
}

/// Validate `text` against the literal grammar, reporting why it failed
pub(crate) fn check_literal(text: &str) -> Result<(), ParseIntegerError> {
    if text.is_empty() {
        return Err(ParseIntegerError::Empty);
    }
    if !is_integer_literal(text) {
        return Err(ParseIntegerError::InvalidLiteral(text.to_string()));
    }
    Ok(())
}
