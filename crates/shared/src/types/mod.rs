//! Common value types used across the workspace.

pub mod currency;
pub mod money;

pub use currency::{CurrencyCode, CurrencyCodeError};
pub use money::Money;
