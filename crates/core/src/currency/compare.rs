//! Comparison and sign predicates for smallest-unit amounts.
//!
//! Comparisons go through `Decimal` like every other operation in the engine.

use std::cmp::Ordering;

use rust_decimal::Decimal;

fn compare(a: i64, b: i64) -> Ordering {
    Decimal::from(a).cmp(&Decimal::from(b))
}

/// Returns true if `a == b`.
#[must_use]
pub fn equals(a: i64, b: i64) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Returns true if `a > b`.
#[must_use]
pub fn greater_than(a: i64, b: i64) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Returns true if `a < b`.
#[must_use]
pub fn less_than(a: i64, b: i64) -> bool {
    compare(a, b) == Ordering::Less
}

/// Returns true if the amount is zero.
#[must_use]
pub fn is_zero(amount: i64) -> bool {
    Decimal::from(amount).is_zero()
}

/// Returns true if the amount is strictly positive. Zero is not positive.
#[must_use]
pub fn is_positive(amount: i64) -> bool {
    greater_than(amount, 0)
}

/// Returns true if the amount is strictly negative.
#[must_use]
pub fn is_negative(amount: i64) -> bool {
    less_than(amount, 0)
}
