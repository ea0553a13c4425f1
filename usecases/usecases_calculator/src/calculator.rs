//! Calculator Operations
//!
//! The six arithmetic operations over [`BigInteger`] and the dispatch entry
//! points that route an [`Operation`] (or a textual token) to them.
//!
//! Division truncates toward zero and modulo takes the sign of the
//! dividend, so for every `b != 0`:
//!
//! ```text
//! divide(a, b) * b + modulo(a, b) == a
//! ```

use entities_big_integer::BigInteger;

use crate::error::CalcError;
use crate::operation::Operation;

/// Upper bound on the size of a power's result, in bits
///
/// `significant_bits(a) * b` over-estimates the size of `a ** b` by less
/// than `b` bits, so results up to about 2^30 bits (128 MiB) are computed.
pub const MAX_POWER_BITS: u64 = 1 << 30;

/// Arbitrary-precision integer calculator
///
/// Stateless; all operations are associated functions.
pub struct BigIntegerCalculator;

impl BigIntegerCalculator {
    /// a + b
    pub fn add(a: &BigInteger, b: &BigInteger) -> BigInteger {
        a.plus(b)
    }

    /// a - b
    pub fn subtract(a: &BigInteger, b: &BigInteger) -> BigInteger {
        a.minus(b)
    }

    /// a * b
    pub fn multiply(a: &BigInteger, b: &BigInteger) -> BigInteger {
        a.times(b)
    }

    /// Truncating division: a / b rounded toward zero
    ///
    /// # Returns
    /// * `Ok(BigInteger)` - The quotient (`7 / 2 = 3`, `-7 / 2 = -3`)
    /// * `Err(CalcError::DivideByZero)` - If `b` is zero
    pub fn divide(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, CalcError> {
        a.div_trunc(b).ok_or(CalcError::DivideByZero)
    }

    /// Remainder of truncating division
    ///
    /// The result has the sign of `a` or is zero: `modulo(-7, 2) = -1`.
    ///
    /// # Returns
    /// * `Ok(BigInteger)` - `a - b * trunc(a / b)`
    /// * `Err(CalcError::ModuloByZero)` - If `b` is zero
    pub fn modulo(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, CalcError> {
        a.rem_trunc(b).ok_or(CalcError::ModuloByZero)
    }

    /// a raised to the integer power b
    ///
    /// `power(a, 0)` is 1 for every `a`, including 0. Bases 0, 1 and -1 give
    /// an exact result for any exponent; every other base is refused once
    /// the result could need more than [`MAX_POWER_BITS`] bits.
    ///
    /// # Returns
    /// * `Ok(BigInteger)` - The exact power
    /// * `Err(CalcError::NegativeExponent)` - If `b < 0`
    /// * `Err(CalcError::ExponentTooLarge)` - If `|a| >= 2` and
    ///   `significant_bits(a) * b` exceeds [`MAX_POWER_BITS`]
    pub fn power(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, CalcError> {
        if b.is_negative() {
            return Err(CalcError::NegativeExponent);
        }
        if a.is_zero() {
            return Ok(if b.is_zero() { BigInteger::one() } else { BigInteger::zero() });
        }
        if *a == BigInteger::one() {
            return Ok(BigInteger::one());
        }
        if *a == BigInteger::from_i64(-1) {
            return Ok(if b.is_even() { BigInteger::one() } else { a.clone() });
        }

        // |a| >= 2 from here, so the result has at least as many bits as b
        let exp = b.to_u64().ok_or(CalcError::ExponentTooLarge)?;
        match a.significant_bits().checked_mul(exp) {
            Some(bits) if bits <= MAX_POWER_BITS => Ok(a.pow(exp)),
            _ => Err(CalcError::ExponentTooLarge),
        }
    }

    /// Route two operands to the function for `operation`
    ///
    /// # Examples
    /// ```
    /// use usecases_calculator::{BigIntegerCalculator, BigInteger, Operation};
    ///
    /// let five = BigInteger::from_i64(5);
    /// let three = BigInteger::from_i64(3);
    /// let sum = BigIntegerCalculator::calculate(&five, &three, Operation::Add).unwrap();
    /// assert_eq!(sum, BigInteger::from_i64(8));
    /// ```
    pub fn calculate(
        a: &BigInteger,
        b: &BigInteger,
        operation: Operation,
    ) -> Result<BigInteger, CalcError> {
        match operation {
            Operation::Add => Ok(Self::add(a, b)),
            Operation::Subtract => Ok(Self::subtract(a, b)),
            Operation::Multiply => Ok(Self::multiply(a, b)),
            Operation::Divide => Self::divide(a, b),
            Operation::Modulo => Self::modulo(a, b),
            Operation::Power => Self::power(a, b),
        }
    }

    /// Resolve `token` with [`Operation::from_token`] and dispatch
    ///
    /// An unrecognized token fails with [`CalcError::InvalidOperation`]
    /// before any arithmetic is attempted.
    pub fn calculate_token(
        a: &BigInteger,
        b: &BigInteger,
        token: &str,
    ) -> Result<BigInteger, CalcError> {
        let operation = Operation::from_token(token)?;
        Self::calculate(a, b, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: i64) -> BigInteger {
        BigInteger::from_i64(value)
    }

    fn big(text: &str) -> BigInteger {
        text.parse().unwrap()
    }

    // add

    #[test]
    fn test_add() {
        assert_eq!(BigIntegerCalculator::add(&n(2), &n(3)), n(5));
        assert_eq!(BigIntegerCalculator::add(&n(10), &n(-3)), n(7));
        assert_eq!(BigIntegerCalculator::add(&n(-5), &n(-5)), n(-10));
        assert_eq!(BigIntegerCalculator::add(&n(100), &n(0)), n(100));
    }

    #[test]
    fn test_add_very_large_numbers() {
        assert_eq!(
            BigIntegerCalculator::add(&big("999999999999999999"), &n(1)),
            big("1000000000000000000")
        );
    }

    // subtract

    #[test]
    fn test_subtract() {
        assert_eq!(BigIntegerCalculator::subtract(&n(10), &n(3)), n(7));
        assert_eq!(BigIntegerCalculator::subtract(&n(3), &n(10)), n(-7));
        assert_eq!(BigIntegerCalculator::subtract(&n(50), &n(0)), n(50));
        assert_eq!(BigIntegerCalculator::subtract(&n(25), &n(25)), n(0));
    }

    // multiply

    #[test]
    fn test_multiply() {
        assert_eq!(BigIntegerCalculator::multiply(&n(4), &n(5)), n(20));
        assert_eq!(BigIntegerCalculator::multiply(&n(100), &n(0)), n(0));
        assert_eq!(BigIntegerCalculator::multiply(&n(77), &n(1)), n(77));
        assert_eq!(BigIntegerCalculator::multiply(&n(-4), &n(-5)), n(20));
        assert_eq!(BigIntegerCalculator::multiply(&n(4), &n(-5)), n(-20));
        assert_eq!(
            BigIntegerCalculator::multiply(&n(1_000_000), &n(1_000_000)),
            n(1_000_000_000_000)
        );
    }

    // divide

    #[test]
    fn test_divide() {
        assert_eq!(BigIntegerCalculator::divide(&n(10), &n(2)), Ok(n(5)));
        assert_eq!(BigIntegerCalculator::divide(&n(-10), &n(2)), Ok(n(-5)));
        assert_eq!(BigIntegerCalculator::divide(&n(99), &n(1)), Ok(n(99)));
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(BigIntegerCalculator::divide(&n(7), &n(2)), Ok(n(3)));
        assert_eq!(BigIntegerCalculator::divide(&n(-7), &n(2)), Ok(n(-3)));
        assert_eq!(BigIntegerCalculator::divide(&n(-7), &n(-2)), Ok(n(3)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            BigIntegerCalculator::divide(&n(10), &n(0)),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            BigIntegerCalculator::divide(&n(0), &n(0)),
            Err(CalcError::DivideByZero)
        );
    }

    // modulo

    #[test]
    fn test_modulo() {
        assert_eq!(BigIntegerCalculator::modulo(&n(10), &n(3)), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::modulo(&n(10), &n(2)), Ok(n(0)));
        assert_eq!(BigIntegerCalculator::modulo(&n(3), &n(10)), Ok(n(3)));
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(BigIntegerCalculator::modulo(&n(-7), &n(2)), Ok(n(-1)));
        assert_eq!(BigIntegerCalculator::modulo(&n(7), &n(-2)), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::modulo(&n(-7), &n(-2)), Ok(n(-1)));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(
            BigIntegerCalculator::modulo(&n(10), &n(0)),
            Err(CalcError::ModuloByZero)
        );
    }

    // power

    #[test]
    fn test_power() {
        assert_eq!(BigIntegerCalculator::power(&n(2), &n(10)), Ok(n(1024)));
        assert_eq!(BigIntegerCalculator::power(&n(5), &n(0)), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::power(&n(7), &n(1)), Ok(n(7)));
        assert_eq!(BigIntegerCalculator::power(&n(-2), &n(3)), Ok(n(-8)));
    }

    #[test]
    fn test_power_zero_exponent_on_zero_base() {
        assert_eq!(BigIntegerCalculator::power(&n(0), &n(0)), Ok(n(1)));
    }

    #[test]
    fn test_power_very_large() {
        assert_eq!(
            BigIntegerCalculator::power(&n(2), &n(64)),
            Ok(big("18446744073709551616"))
        );
    }

    #[test]
    fn test_power_negative_exponent() {
        assert_eq!(
            BigIntegerCalculator::power(&n(2), &n(-1)),
            Err(CalcError::NegativeExponent)
        );
        assert_eq!(
            BigIntegerCalculator::power(&n(0), &n(-5)),
            Err(CalcError::NegativeExponent)
        );
    }

    #[test]
    fn test_power_exponent_beyond_u64() {
        let huge = big("18446744073709551617"); // u64::MAX + 2, odd
        let huge_even = big("18446744073709551616");

        assert_eq!(BigIntegerCalculator::power(&n(0), &huge), Ok(n(0)));
        assert_eq!(BigIntegerCalculator::power(&n(1), &huge), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::power(&n(-1), &huge), Ok(n(-1)));
        assert_eq!(BigIntegerCalculator::power(&n(-1), &huge_even), Ok(n(1)));
        assert_eq!(
            BigIntegerCalculator::power(&n(2), &huge),
            Err(CalcError::ExponentTooLarge)
        );
    }

    #[test]
    fn test_power_result_too_large() {
        let max = BigInteger::from_u64(u64::MAX);
        let two_pow_40 = BigInteger::from_u64(1 << 40);

        assert_eq!(
            BigIntegerCalculator::power(&n(2), &max),
            Err(CalcError::ExponentTooLarge)
        );
        assert_eq!(
            BigIntegerCalculator::power(&n(2), &two_pow_40),
            Err(CalcError::ExponentTooLarge)
        );
        assert_eq!(
            BigIntegerCalculator::power(&n(-3), &two_pow_40),
            Err(CalcError::ExponentTooLarge)
        );
        // 2 has two significant bits, so 2^29 is the largest exponent it accepts
        assert_eq!(
            BigIntegerCalculator::power(&n(2), &BigInteger::from_u64((1 << 29) + 1)),
            Err(CalcError::ExponentTooLarge)
        );
        let wide = big("340282366920938463463374607431768211456"); // 2^128
        assert_eq!(
            BigIntegerCalculator::power(&wide, &BigInteger::from_u64(1 << 23)),
            Err(CalcError::ExponentTooLarge)
        );
    }

    #[test]
    fn test_power_bounded_bases_with_large_exponents() {
        let max = BigInteger::from_u64(u64::MAX);
        let two_pow_40 = BigInteger::from_u64(1 << 40);

        assert_eq!(BigIntegerCalculator::power(&n(0), &max), Ok(n(0)));
        assert_eq!(BigIntegerCalculator::power(&n(1), &max), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::power(&n(-1), &max), Ok(n(-1)));
        assert_eq!(BigIntegerCalculator::power(&n(-1), &two_pow_40), Ok(n(1)));
    }

    #[test]
    fn test_power_below_the_size_cap() {
        let result = BigIntegerCalculator::power(&n(2), &n(100_000)).unwrap();
        assert_eq!(result.significant_bits(), 100_001);
    }

    // dispatch

    #[test]
    fn test_calculate_routes_every_operation() {
        let five = n(5);
        let three = n(3);
        let expected = [n(8), n(2), n(15), n(1), n(2), n(125)];

        for (op, want) in Operation::ALL.into_iter().zip(expected) {
            assert_eq!(BigIntegerCalculator::calculate(&five, &three, op), Ok(want), "{}", op);
        }
    }

    #[test]
    fn test_calculate_propagates_errors() {
        assert_eq!(
            BigIntegerCalculator::calculate(&n(1), &n(0), Operation::Divide),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            BigIntegerCalculator::calculate(&n(1), &n(0), Operation::Modulo),
            Err(CalcError::ModuloByZero)
        );
        assert_eq!(
            BigIntegerCalculator::calculate(&n(1), &n(-1), Operation::Power),
            Err(CalcError::NegativeExponent)
        );
    }

    #[test]
    fn test_calculate_token() {
        assert_eq!(BigIntegerCalculator::calculate_token(&n(5), &n(3), "+"), Ok(n(8)));
        assert_eq!(BigIntegerCalculator::calculate_token(&n(6), &n(3), "/"), Ok(n(2)));
        assert_eq!(BigIntegerCalculator::calculate_token(&n(7), &n(3), "%"), Ok(n(1)));
        assert_eq!(BigIntegerCalculator::calculate_token(&n(2), &n(8), "**"), Ok(n(256)));
        assert_eq!(BigIntegerCalculator::calculate_token(&n(2), &n(8), "power"), Ok(n(256)));
    }

    #[test]
    fn test_calculate_token_invalid() {
        assert_eq!(
            BigIntegerCalculator::calculate_token(&n(5), &n(3), "?"),
            Err(CalcError::InvalidOperation("?".to_string()))
        );
    }

    #[test]
    fn test_invalid_token_wins_over_arithmetic_error() {
        assert_eq!(
            BigIntegerCalculator::calculate_token(&n(5), &n(0), "÷"),
            Err(CalcError::InvalidOperation("÷".to_string()))
        );
    }
}
