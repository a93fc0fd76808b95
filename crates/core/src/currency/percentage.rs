//! Percentage calculations.

use rust_decimal::Decimal;

use super::error::{MoneyError, MoneyResult};
use super::rounding::{DecimalInput, round_dp, round_to_unit};

/// Decimal places used when a caller has no preference.
pub const DEFAULT_PERCENTAGE_PLACES: u32 = 2;

/// Share of `total` that `amount` represents, in percent.
///
/// If `total` is 0 the result is 0, never an error.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use spendlog_core::currency::percentage;
///
/// assert_eq!(percentage(1, 3, 2), dec!(33.33));
/// assert_eq!(percentage(500, 0, 2), dec!(0));
/// ```
#[must_use]
pub fn percentage(amount: i64, total: i64, decimal_places: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    // |amount| ≤ 2^63 and |total| ≥ 1, so the quotient times 100 fits.
    let ratio = Decimal::from(amount) / Decimal::from(total);
    round_dp(ratio * Decimal::ONE_HUNDRED, decimal_places)
}

/// Share of `total` that `amount` represents, in whole percent.
pub fn percentage_int(amount: i64, total: i64) -> MoneyResult<i64> {
    if total == 0 {
        return Ok(0);
    }
    let ratio = Decimal::from(amount) / Decimal::from(total);
    round_to_unit(ratio * Decimal::ONE_HUNDRED)
}

/// `percent` percent of `amount`, rounded half-up.
///
/// # Example
///
/// ```
/// use spendlog_core::currency::percentage_of;
///
/// assert_eq!(percentage_of(1999, 15).unwrap(), 300);
/// ```
pub fn percentage_of<'a>(amount: i64, percent: impl Into<DecimalInput<'a>>) -> MoneyResult<i64> {
    let percent = percent.into().to_decimal()?;
    let part = Decimal::from(amount)
        .checked_mul(percent)
        .ok_or(MoneyError::Overflow)?
        / Decimal::ONE_HUNDRED;
    round_to_unit(part)
}
