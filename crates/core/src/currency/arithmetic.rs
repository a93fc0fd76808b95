//! Arithmetic over integer smallest-unit amounts.
//!
//! Intermediate values are `Decimal`; results are rounded half-up to `i64`
//! once. Anything that would leave the `i64` range is `Overflow`, never a
//! wrap or a panic.

use rust_decimal::Decimal;

use super::error::{MoneyError, MoneyResult};
use super::rounding::{DecimalInput, round_to_unit};

/// Sums amounts exactly. Empty input is 0.
pub fn sum(amounts: &[i64]) -> MoneyResult<i64> {
    round_to_unit(decimal_sum(amounts)?)
}

/// Mean of `amounts`, rounded half-up. Empty input is 0.
pub fn average(amounts: &[i64]) -> MoneyResult<i64> {
    if amounts.is_empty() {
        return Ok(0);
    }
    let total = decimal_sum(amounts)?;
    let count = Decimal::from(amounts.len());
    round_to_unit(total.checked_div(count).ok_or(MoneyError::Overflow)?)
}

/// Largest amount, or 0 for empty input.
///
/// 0 is also a valid amount; use [`try_max`] to tell "no data" apart.
#[must_use]
pub fn max(amounts: &[i64]) -> i64 {
    try_max(amounts).unwrap_or(0)
}

/// Smallest amount, or 0 for empty input.
///
/// 0 is also a valid amount; use [`try_min`] to tell "no data" apart.
#[must_use]
pub fn min(amounts: &[i64]) -> i64 {
    try_min(amounts).unwrap_or(0)
}

/// Largest amount, `None` for empty input.
#[must_use]
pub fn try_max(amounts: &[i64]) -> Option<i64> {
    amounts.iter().copied().max_by(|a, b| Decimal::from(*a).cmp(&Decimal::from(*b)))
}

/// Smallest amount, `None` for empty input.
#[must_use]
pub fn try_min(amounts: &[i64]) -> Option<i64> {
    amounts.iter().copied().min_by(|a, b| Decimal::from(*a).cmp(&Decimal::from(*b)))
}

/// `amount × factor`, rounded half-up.
pub fn multiply<'a>(amount: i64, factor: impl Into<DecimalInput<'a>>) -> MoneyResult<i64> {
    let factor = factor.into().to_decimal()?;
    round_to_unit(
        Decimal::from(amount)
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?,
    )
}

/// `amount ÷ divisor`, rounded half-up.
///
/// # Errors
///
/// Returns `DivisionByZero` if `divisor` is zero.
pub fn divide<'a>(amount: i64, divisor: impl Into<DecimalInput<'a>>) -> MoneyResult<i64> {
    let divisor = divisor.into().to_decimal()?;
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    round_to_unit(
        Decimal::from(amount)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?,
    )
}

/// `minuend` minus the sum of all `subtrahends`.
pub fn subtract(minuend: i64, subtrahends: &[i64]) -> MoneyResult<i64> {
    let deducted = decimal_sum(subtrahends)?;
    round_to_unit(
        Decimal::from(minuend)
            .checked_sub(deducted)
            .ok_or(MoneyError::Overflow)?,
    )
}

fn decimal_sum(amounts: &[i64]) -> MoneyResult<Decimal> {
    amounts.iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(Decimal::from(*amount))
            .ok_or(MoneyError::Overflow)
    })
}
