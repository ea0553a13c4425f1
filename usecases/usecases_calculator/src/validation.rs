//! Input Validation
//!
//! Lexical checks a front end runs on raw text before handing it to the
//! calculator. Both validators return a plain `bool` and never panic.

use entities_big_integer::is_integer_literal;

use crate::operation::Operation;

/// Check whether `text` is a valid integer literal
///
/// True iff `text` is an optional leading `-` followed by one or more
/// decimal digits, with no decimal point, exponent or other characters.
pub fn is_valid_integer_literal(text: &str) -> bool {
    is_integer_literal(text)
}

/// Check whether `text` is one of the six operation symbols
///
/// Word aliases such as `add` are not accepted here; see
/// [`Operation::from_token`] for the lenient lookup.
pub fn is_valid_operation_token(text: &str) -> bool {
    Operation::from_symbol(text).is_some()
}
