//! Locale-aware currency formatting.
//!
//! Formatting is a display concern and never fails: an unknown currency or
//! locale degrades to `"<CODE> <amount>"`.

use serde::Serialize;
use tracing::debug;

use super::conversion::to_display_string_safe;
use super::metadata::{CurrencyInfo, DEFAULT_EXPONENT, find_currency};
use super::rounding::from_smallest_unit;

/// Locale used when a caller has no preference.
pub const DEFAULT_LOCALE: &str = "en-US";

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// A formatted amount split for custom layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedParts {
    /// Currency symbol or code, e.g. `"$"` or `"SAR"`.
    pub symbol: String,
    /// Signed, grouped number without the symbol, e.g. `"-1,234.50"`.
    pub value: String,
    /// The complete string, e.g. `"-$1,234.50"`.
    pub full: String,
}

/// Number and symbol conventions of one locale.
#[derive(Debug)]
struct LocaleFormat {
    tag: &'static str,
    decimal: &'static str,
    group: &'static str,
    symbol_first: bool,
    /// Placed between symbol and number when the symbol is a letter code.
    code_gap: &'static str,
    /// Placed between number and a trailing symbol.
    suffix_gap: &'static str,
    symbols: &'static [(&'static str, &'static str)],
}

static LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        decimal: ".",
        group: ",",
        symbol_first: true,
        code_gap: NBSP,
        suffix_gap: "",
        symbols: &[
            ("AUD", "A$"),
            ("BRL", "R$"),
            ("CAD", "CA$"),
            ("CNY", "CN¥"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("HKD", "HK$"),
            ("ILS", "₪"),
            ("INR", "₹"),
            ("JPY", "¥"),
            ("KRW", "₩"),
            ("MXN", "MX$"),
            ("NZD", "NZ$"),
            ("PHP", "₱"),
            ("TWD", "NT$"),
            ("USD", "$"),
            ("VND", "₫"),
        ],
    },
    LocaleFormat {
        tag: "en-GB",
        decimal: ".",
        group: ",",
        symbol_first: true,
        code_gap: NBSP,
        suffix_gap: "",
        symbols: &[
            ("AUD", "A$"),
            ("CAD", "CA$"),
            ("CNY", "CN¥"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("INR", "₹"),
            ("JPY", "JP¥"),
            ("USD", "US$"),
        ],
    },
    LocaleFormat {
        tag: "de-DE",
        decimal: ",",
        group: ".",
        symbol_first: false,
        code_gap: NBSP,
        suffix_gap: NBSP,
        symbols: &[
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "¥"),
            ("USD", "$"),
        ],
    },
    LocaleFormat {
        tag: "fr-FR",
        decimal: ",",
        group: NARROW_NBSP,
        symbol_first: false,
        code_gap: NBSP,
        suffix_gap: NBSP,
        symbols: &[
            ("CAD", "$CA"),
            ("EUR", "€"),
            ("GBP", "£GB"),
            ("USD", "$US"),
        ],
    },
    LocaleFormat {
        tag: "ja-JP",
        decimal: ".",
        group: ",",
        symbol_first: true,
        code_gap: NBSP,
        suffix_gap: "",
        symbols: &[
            ("CNY", "元"),
            ("EUR", "€"),
            ("GBP", "£"),
            ("JPY", "￥"),
            ("USD", "$"),
        ],
    },
];

/// Formats smallest units as a currency string for `locale`.
///
/// # Example
///
/// ```
/// use spendlog_core::currency::format;
///
/// assert_eq!(format(1999, "USD", "en-US"), "$19.99");
/// assert_eq!(format(123_456, "USD", "en-US"), "$1,234.56");
/// assert_eq!(format(1999, "XYZ", "en-US"), "XYZ 19.99");
/// ```
#[must_use]
pub fn format(smallest: i64, code: &str, locale: &str) -> String {
    format_parts(smallest, code, locale).full
}

/// Formats smallest units and returns symbol, number and full string.
#[must_use]
pub fn format_parts(smallest: i64, code: &str, locale: &str) -> FormattedParts {
    format_parts_with_fallback(smallest, code, locale, DEFAULT_EXPONENT)
}

/// Like [`format_parts`], with a custom exponent for the fallback path.
pub(crate) fn format_parts_with_fallback(
    smallest: i64,
    code: &str,
    locale: &str,
    fallback_exponent: u32,
) -> FormattedParts {
    match (find_currency(code), find_locale(locale)) {
        (Some(info), Some(locale)) => render(smallest, info, locale),
        (info, found_locale) => {
            debug!(
                currency = code,
                locale,
                known_currency = info.is_some(),
                known_locale = found_locale.is_some(),
                "Falling back to plain currency format"
            );
            fallback(smallest, code, fallback_exponent)
        }
    }
}

fn render(smallest: i64, info: &CurrencyInfo, locale: &LocaleFormat) -> FormattedParts {
    // Table exponents are at most 4, well inside Decimal's scale.
    let Ok(display) = from_smallest_unit(smallest, info.digits) else {
        return fallback(smallest, info.code, info.digits);
    };
    let text = display.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let mut number = group_digits(integer, locale.group);
    if !fraction.is_empty() {
        number.push_str(locale.decimal);
        number.push_str(fraction);
    }

    let sign = if negative { "-" } else { "" };
    let (symbol, is_code) = locale
        .symbols
        .iter()
        .find(|(code, _)| *code == info.code)
        .map_or((info.code, true), |(_, symbol)| (*symbol, false));

    let full = if locale.symbol_first {
        let gap = if is_code { locale.code_gap } else { "" };
        format!("{sign}{symbol}{gap}{number}")
    } else {
        format!("{sign}{number}{}{symbol}", locale.suffix_gap)
    };

    FormattedParts {
        symbol: symbol.to_string(),
        value: format!("{sign}{number}"),
        full,
    }
}

fn fallback(smallest: i64, code: &str, exponent: u32) -> FormattedParts {
    let symbol = code.trim().to_ascii_uppercase();
    let value =
        to_display_string_safe(smallest, code, exponent).unwrap_or_else(|_| smallest.to_string());
    FormattedParts {
        full: format!("{symbol} {value}"),
        symbol,
        value,
    }
}

fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Resolves `en-US`, `en_us` and bare `en` style tags.
fn find_locale(tag: &str) -> Option<&'static LocaleFormat> {
    let tag = tag.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|locale| locale.tag.eq_ignore_ascii_case(&tag))
        .or_else(|| {
            LOCALES.iter().find(|locale| {
                locale
                    .tag
                    .split_once('-')
                    .is_some_and(|(language, _)| language.eq_ignore_ascii_case(&tag))
            })
        })
}
