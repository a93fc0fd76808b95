//! Display amount ↔ smallest unit conversion, and cross-currency conversion.
//!
//! CRITICAL: All power-of-ten scaling happens in `Decimal`:
//! - Scale with the currency's own exponent (JPY 0, USD 2, KWD 3)
//! - Round half-up once, at the very end
//! - Exchange rates apply to display amounts, not smallest units

use spendlog_shared::{CurrencyCode, Money};
use tracing::trace;

use super::error::{MoneyError, MoneyResult};
use super::metadata::{get_exponent, get_exponent_safe};
use super::rounding::{DecimalInput, from_smallest_unit, power_of_ten, round_to_unit};

/// Converts a display amount (`19.99`) to smallest units (`1999`).
///
/// Accepts floats, integers, decimals and decimal strings. Prefer strings for
/// user-entered text.
///
/// # Example
///
/// ```
/// use spendlog_core::currency::to_smallest_unit;
///
/// assert_eq!(to_smallest_unit(19.99, "USD").unwrap(), 1999);
/// assert_eq!(to_smallest_unit("300", "SAR").unwrap(), 30000);
/// assert_eq!(to_smallest_unit("19.99", "KWD").unwrap(), 19990);
/// ```
pub fn to_smallest_unit<'a>(display: impl Into<DecimalInput<'a>>, code: &str) -> MoneyResult<i64> {
    let exponent = get_exponent(code)?;
    let value = display.into().to_decimal()?;
    let scaled = value
        .checked_mul(power_of_ten(exponent)?)
        .ok_or(MoneyError::Overflow)?;
    round_to_unit(scaled)
}

/// Converts smallest units to a display amount for further computation.
///
/// Use [`to_display_string`] for rendering; this returns an `f64`.
pub fn to_display_amount(smallest: i64, code: &str) -> MoneyResult<f64> {
    let exponent = get_exponent(code)?;
    // Parsing the exact decimal text gives the nearest f64.
    from_smallest_unit(smallest, exponent)?
        .to_string()
        .parse::<f64>()
        .map_err(|_| MoneyError::Overflow)
}

/// Renders smallest units with exactly the currency's number of decimals.
///
/// # Example
///
/// ```
/// use spendlog_core::currency::to_display_string;
///
/// assert_eq!(to_display_string(1999, "USD").unwrap(), "19.99");
/// assert_eq!(to_display_string(1000, "JPY").unwrap(), "1000");
/// assert_eq!(to_display_string(19990, "KWD").unwrap(), "19.990");
/// ```
pub fn to_display_string(smallest: i64, code: &str) -> MoneyResult<String> {
    let exponent = get_exponent(code)?;
    Ok(from_smallest_unit(smallest, exponent)?.to_string())
}

/// Like [`to_display_string`], but unknown codes use `default` decimals.
pub fn to_display_string_safe(smallest: i64, code: &str, default: u32) -> MoneyResult<String> {
    let exponent = get_exponent_safe(code, default);
    Ok(from_smallest_unit(smallest, exponent)?.to_string())
}

/// Converts an amount between currencies.
///
/// `rate` is units of `to` per one unit of `from`. Identical codes return
/// `amount` untouched and ignore the rate.
///
/// # Example
///
/// ```
/// use spendlog_core::currency::convert;
///
/// // ¥1000 at 0.0067 USD/JPY = $6.70
/// assert_eq!(convert(1000, "JPY", "USD", 0.0067).unwrap(), 670);
/// assert_eq!(convert(500, "USD", "USD", 1.3).unwrap(), 500);
/// ```
pub fn convert<'a>(
    amount: i64,
    from: &str,
    to: &str,
    rate: impl Into<DecimalInput<'a>>,
) -> MoneyResult<i64> {
    if same_code(from, to) {
        return Ok(amount);
    }

    let from_exponent = get_exponent(from)?;
    let to_exponent = get_exponent(to)?;
    let rate = rate.into().to_decimal()?;

    let display = from_smallest_unit(amount, from_exponent)?;
    let scale = power_of_ten(to_exponent)?;
    let converted = display
        .checked_mul(rate)
        .and_then(|value| value.checked_mul(scale))
        .ok_or(MoneyError::Overflow)?;

    trace!(amount, from, to, %rate, %converted, "Converted amount");
    round_to_unit(converted)
}

/// Converts a [`Money`] value into another currency.
pub fn convert_money<'a>(
    money: &Money,
    to: CurrencyCode,
    rate: impl Into<DecimalInput<'a>>,
) -> MoneyResult<Money> {
    let amount = convert(money.amount, money.currency.as_str(), to.as_str(), rate)?;
    Ok(Money::new(amount, to))
}

fn same_code(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
