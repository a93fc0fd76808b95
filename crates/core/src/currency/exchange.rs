//! Exchange rate value type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendlog_shared::{CurrencyCode, Money};

use super::conversion::convert;
use super::error::{MoneyError, MoneyResult};
use super::rounding::DecimalInput;

/// Exchange rate between two currencies, as supplied by a rate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from: CurrencyCode,
    /// Target currency code.
    pub to: CurrencyCode,
    /// Exchange rate (1 from = rate to), at display-amount scale.
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` unless the rate is strictly positive.
    pub fn new<'a>(
        from: CurrencyCode,
        to: CurrencyCode,
        rate: impl Into<DecimalInput<'a>>,
    ) -> MoneyResult<Self> {
        let rate = rate
            .into()
            .to_decimal()
            .map_err(|err| MoneyError::InvalidRate(err.to_string()))?;
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidRate(rate.to_string()));
        }
        Ok(Self { from, to, rate })
    }

    /// Converts a `from` amount in smallest units to `to` smallest units.
    pub fn apply(&self, amount: i64) -> MoneyResult<i64> {
        convert(amount, self.from.as_str(), self.to.as_str(), self.rate)
    }

    /// Converts a [`Money`] value, which must be in the `from` currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` if `money` is in another currency.
    pub fn apply_money(&self, money: &Money) -> MoneyResult<Money> {
        if money.currency != self.from {
            return Err(MoneyError::InvalidCurrency(money.currency.to_string()));
        }
        Ok(Money::new(self.apply(money.amount)?, self.to))
    }

    /// Returns the inverse rate.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let rate = Decimal::ONE
            .checked_div(self.rate)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            from: self.to,
            to: self.from,
            rate,
        })
    }
}
