//! Big Integer Operations
//!
//! Provides arbitrary precision integer operations.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. Every operation is exact: there is no fixed-width overflow,
//! and results grow as large as memory allows.
//!
//! Division and remainder follow the truncating convention. The quotient
//! is rounded toward zero and the remainder takes the sign of the dividend,
//! so that `a == b * (a / b) + (a % b)` always holds.

use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{Parity, Pow};
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Integer;

use crate::literal::{check_literal, ParseIntegerError};

/// Arbitrary-precision signed integer
///
/// Immutable once constructed: every operation returns a new value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInteger {
    value: Integer,
}

impl BigInteger {
    /// The value 0
    pub fn zero() -> Self {
        Self { value: Integer::ZERO }
    }

    /// The value 1
    pub fn one() -> Self {
        Self { value: Integer::ONE }
    }

    /// Create a new big integer from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big integer from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Parse a decimal literal
    ///
    /// Accepts an optional leading `-` followed by ASCII digits and nothing
    /// else. See [`crate::literal`] for the exact grammar.
    ///
    /// # Examples
    /// ```
    /// use entities_big_integer::BigInteger;
    ///
    /// let n = BigInteger::parse("-18446744073709551616").unwrap();
    /// assert!(n.is_negative());
    /// assert!(BigInteger::parse("1.5").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseIntegerError> {
        check_literal(text)?;
        Integer::from_str(text)
            .map(Self::from_integer)
            .map_err(|_| ParseIntegerError::InvalidLiteral(text.to_string()))
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == Integer::ZERO
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < Integer::ZERO
    }

    /// Check if the number is divisible by two
    pub fn is_even(&self) -> bool {
        self.value.even()
    }

    /// Number of bits in the binary form of the absolute value
    ///
    /// Zero has no significant bits.
    pub fn significant_bits(&self) -> u64 {
        self.value.significant_bits()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Add two big integers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big integers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big integers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big integers, rounding toward zero
    ///
    /// Returns None if dividing by zero
    pub fn div_trunc(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        // malachite's `/` on Integer truncates
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Remainder of truncating division; same sign as `self` or zero
    ///
    /// Returns None if dividing by zero
    pub fn rem_trunc(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Raise to a non-negative power: x ^ exp
    ///
    /// `x.pow(0)` is 1 for every x, zero included.
    pub fn pow(&self, exp: u64) -> Self {
        Self {
            value: self.value.clone().pow(exp),
        }
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for BigInteger {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<Integer> for BigInteger {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
