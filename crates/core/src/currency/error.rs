//! Money engine error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money computations.
///
/// All of these are caller errors. Nothing here is transient, so nothing is
/// retried. Formatting never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not in the ISO 4217 table.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Divisor or total weight is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Even allocation requested with zero parts.
    #[error("Parts must be a positive integer, got {0}")]
    InvalidPartCount(usize),

    /// Numeric input could not be read as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Exchange rate is not a positive number.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    /// Result does not fit the decimal or `i64` range.
    #[error("Amount overflow")]
    Overflow,
}

impl MoneyError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidPartCount(_) => "INVALID_PART_COUNT",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::Overflow => "OVERFLOW",
        }
    }
}
