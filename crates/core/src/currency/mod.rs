//! Money and currency arithmetic.
//!
//! Amounts are `i64` smallest units (cents, fils, yen). Intermediate values
//! are `Decimal`, rounded half-up back to integers exactly once.

pub mod allocation;
pub mod arithmetic;
pub mod compare;
pub mod conversion;
pub mod error;
pub mod exchange;
pub mod format;
pub mod metadata;
pub mod percentage;
pub mod rounding;
pub mod service;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use arithmetic::{average, divide, max, min, multiply, subtract, sum, try_max, try_min};
pub use compare::{equals, greater_than, is_negative, is_positive, is_zero, less_than};
pub use conversion::{
    convert, convert_money, to_display_amount, to_display_string, to_display_string_safe,
    to_smallest_unit,
};
pub use error::{MoneyError, MoneyResult};
pub use exchange::ExchangeRate;
pub use format::{DEFAULT_LOCALE, FormattedParts, format, format_parts};
pub use metadata::{
    CurrencyInfo, CurrencyOption, DEFAULT_EXPONENT, find_currency, get_currency_options,
    get_exponent, get_exponent_safe, is_valid_currency,
};
pub use percentage::{DEFAULT_PERCENTAGE_PLACES, percentage, percentage_int, percentage_of};
pub use rounding::{DecimalInput, ROUNDING};
pub use service::CurrencyService;
