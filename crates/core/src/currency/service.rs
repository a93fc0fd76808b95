//! Configured entry point for display defaults.
//!
//! The free functions in this module's siblings take every parameter
//! explicitly. `CurrencyService` binds the configurable ones (default locale,
//! fallback exponent, percentage places) from a [`MoneyConfig`].

use rust_decimal::Decimal;
use spendlog_shared::MoneyConfig;

use super::conversion::to_display_string_safe;
use super::error::MoneyResult;
use super::format::{FormattedParts, format_parts_with_fallback};
use super::metadata::get_exponent_safe;
use super::percentage::percentage;

/// Currency service bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct CurrencyService {
    config: MoneyConfig,
}

impl CurrencyService {
    /// Creates a service from configuration.
    #[must_use]
    pub const fn new(config: MoneyConfig) -> Self {
        Self { config }
    }

    /// Returns the bound configuration.
    #[must_use]
    pub const fn config(&self) -> &MoneyConfig {
        &self.config
    }

    /// Exponent for `code`, or the configured fallback.
    #[must_use]
    pub fn exponent(&self, code: &str) -> u32 {
        get_exponent_safe(code, self.config.fallback_exponent)
    }

    /// Display string using the configured fallback exponent.
    pub fn display_string(&self, smallest: i64, code: &str) -> MoneyResult<String> {
        to_display_string_safe(smallest, code, self.config.fallback_exponent)
    }

    /// Formats with the configured default locale.
    #[must_use]
    pub fn format(&self, smallest: i64, code: &str) -> String {
        self.format_parts(smallest, code).full
    }

    /// Formats with an explicit locale.
    #[must_use]
    pub fn format_in(&self, smallest: i64, code: &str, locale: &str) -> String {
        format_parts_with_fallback(smallest, code, locale, self.config.fallback_exponent).full
    }

    /// Formatted parts with the configured default locale.
    #[must_use]
    pub fn format_parts(&self, smallest: i64, code: &str) -> FormattedParts {
        format_parts_with_fallback(
            smallest,
            code,
            &self.config.default_locale,
            self.config.fallback_exponent,
        )
    }

    /// Percentage with the configured number of decimal places.
    #[must_use]
    pub fn percentage(&self, amount: i64, total: i64) -> Decimal {
        percentage(amount, total, self.config.percentage_places)
    }
}
