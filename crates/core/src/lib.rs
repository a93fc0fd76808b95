//! Core money engine for Spendlog.
//!
//! This crate contains pure computation with ZERO I/O, web or database
//! dependencies. Expense ingestion, analytics aggregation and display code
//! all call into it with integer smallest-unit amounts and currency codes.
//!
//! # Modules
//!
//! - `currency` - Currency metadata, conversion, arithmetic, allocation,
//!   percentages, formatting and comparison

pub mod currency;

pub use currency::{MoneyError, MoneyResult};
