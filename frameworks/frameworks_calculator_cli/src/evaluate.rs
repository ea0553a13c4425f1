//! One-shot evaluation
//!
//! Turns three words of user text into a result: validate and parse each
//! operand, resolve the operation token, dispatch.

use entities_big_integer::BigInteger;
use tracing::{debug, trace};
use usecases_calculator::{BigIntegerCalculator, Operation};

use crate::error::CliError;

/// Parse one operand typed by the user
///
/// Surrounding whitespace is ignored; the rest must be an integer literal.
pub fn parse_operand(text: &str) -> Result<BigInteger, CliError> {
    let text = text.trim();
    BigInteger::parse(text)
        .inspect_err(|_| debug!(input = text, "rejected operand"))
        .map_err(CliError::from)
}

/// Evaluate `left op right`
///
/// Operands are checked left to right and the operation token in between,
/// so the first bad piece of input is the one reported.
///
/// # Examples
/// ```
/// use frameworks_calculator_cli::evaluate;
///
/// let result = evaluate("2", "**", "64").unwrap();
/// assert_eq!(result.to_string(), "18446744073709551616");
/// ```
pub fn evaluate(left: &str, op: &str, right: &str) -> Result<BigInteger, CliError> {
    let a = parse_operand(left)?;
    let operation = Operation::from_token(op.trim())?;
    let b = parse_operand(right)?;

    trace!(%a, %operation, %b, "dispatching");
    let result = BigIntegerCalculator::calculate(&a, &b, operation)?;
    debug!(%operation, digits = result.to_string().len(), "evaluated");
    Ok(result)
}
