//! Shared types and configuration for Spendlog.
//!
//! This crate provides common types used across all other crates:
//! - Money in integer smallest units
//! - Validated ISO 4217 currency codes
//! - Configuration management

pub mod config;
pub mod types;

pub use config::MoneyConfig;
pub use types::{CurrencyCode, CurrencyCodeError, Money};
