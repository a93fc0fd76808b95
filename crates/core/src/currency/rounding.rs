//! Decimal rounding policy and numeric input handling.
//!
//! Every operation in the engine computes in `Decimal` and converts to an
//! integer smallest unit exactly once, through [`round_to_unit`].
//!
//! CRITICAL: Rounding strategy is half-up, i.e. midpoints move away from zero:
//! - 2.5 → 3, -2.5 → -3
//! - 0.125 at 2 places → 0.13

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

use super::error::{MoneyError, MoneyResult};

/// Rounding applied by every money operation.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Largest exponent `Decimal` can scale by.
pub const MAX_EXPONENT: u32 = 28;

/// A caller-supplied number.
///
/// User-entered text stays text until it is parsed as a decimal, so it never
/// passes through a lossy `f64` step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecimalInput<'a> {
    /// Native float, read through its shortest round-trip representation.
    Float(f64),
    /// Whole number.
    Integer(i64),
    /// Already-exact decimal.
    Exact(Decimal),
    /// Decimal literal such as `"19.99"` or `"1.5e2"`.
    Text(&'a str),
}

impl DecimalInput<'_> {
    /// Converts the input to an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-finite floats and unparsable text.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        match *self {
            Self::Float(value) => {
                if !value.is_finite() {
                    return Err(MoneyError::InvalidAmount(value.to_string()));
                }
                // Display for f64 never uses exponent notation.
                let text = value.to_string();
                Decimal::from_str(&text).map_err(|_| MoneyError::InvalidAmount(text))
            }
            Self::Integer(value) => Ok(Decimal::from(value)),
            Self::Exact(value) => Ok(value),
            Self::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(MoneyError::InvalidAmount(raw.to_string()));
                }
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map_err(|_| MoneyError::InvalidAmount(raw.to_string()))
            }
        }
    }
}

impl From<f64> for DecimalInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for DecimalInput<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for DecimalInput<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for DecimalInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Decimal> for DecimalInput<'_> {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

impl<'a> From<&'a str> for DecimalInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DecimalInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

/// Returns `10^exponent` as a decimal.
pub fn power_of_ten(exponent: u32) -> MoneyResult<Decimal> {
    if exponent > MAX_EXPONENT {
        return Err(MoneyError::Overflow);
    }
    (0..exponent).try_fold(Decimal::ONE, |acc, _| {
        acc.checked_mul(Decimal::TEN).ok_or(MoneyError::Overflow)
    })
}

/// Reads an integer smallest-unit amount as a display-scale decimal.
///
/// Exact: `1999` at exponent 2 is `19.99` with scale 2.
pub fn from_smallest_unit(amount: i64, exponent: u32) -> MoneyResult<Decimal> {
    Decimal::try_from_i128_with_scale(i128::from(amount), exponent)
        .map_err(|_| MoneyError::Overflow)
}

/// Rounds half-up to a whole number and converts to `i64`.
pub fn round_to_unit(value: Decimal) -> MoneyResult<i64> {
    value
        .round_dp_with_strategy(0, ROUNDING)
        .to_i64()
        .ok_or(MoneyError::Overflow)
}

/// Rounds half-up to `decimal_places`.
#[must_use]
pub fn round_dp(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, ROUNDING)
}
