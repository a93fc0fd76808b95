//! Property-based tests for currency operations.
//!
//! - Allocation sum invariant (even and weighted)
//! - Display round trip per currency exponent
//! - Identity conversion and zero-total percentage

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::AllocationUtil;
use super::conversion::{convert, to_display_string, to_smallest_unit};
use super::metadata::get_exponent;
use super::percentage::percentage;

/// Strategy to generate smallest-unit amounts, refunds included.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate allocation part counts (1 to 100).
fn part_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy to generate weights with a positive total.
fn weights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1000, 1..12)
        .prop_filter("total weight must be positive", |w| w.iter().any(|v| *v > 0))
}

/// Strategy to pick currencies covering exponents 0, 2, 3 and 4.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["JPY", "KRW", "USD", "EUR", "SAR", "KWD", "BHD", "CLF"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Allocation Sum Invariant
    // =========================================================================

    /// Even allocation sums to the amount and has `parts` entries.
    #[test]
    fn prop_allocate_evenly_sum_invariant(
        amount in amount(),
        parts in part_count(),
    ) {
        let result = AllocationUtil::allocate_evenly(amount, parts).unwrap();
        prop_assert_eq!(result.len(), parts);
        prop_assert_eq!(result.iter().sum::<i64>(), amount);
    }

    /// Even allocation entries differ by at most 1, larger ones first.
    #[test]
    fn prop_allocate_evenly_spread_at_most_one(
        amount in amount(),
        parts in part_count(),
    ) {
        let result = AllocationUtil::allocate_evenly(amount, parts).unwrap();
        let max = *result.iter().max().unwrap();
        let min = *result.iter().min().unwrap();
        prop_assert!(max - min <= 1, "spread too wide: {:?}", result);
        prop_assert!(result.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// Weighted allocation sums to the amount and has one entry per weight.
    #[test]
    fn prop_allocate_sum_invariant(
        amount in amount(),
        weights in weights(),
    ) {
        let result = AllocationUtil::allocate(amount, &weights).unwrap();
        prop_assert_eq!(result.len(), weights.len());
        prop_assert_eq!(result.iter().sum::<i64>(), amount);
    }

    /// Zero-weight entries before the last bucket get nothing.
    #[test]
    fn prop_allocate_zero_weight_gets_zero(
        amount in amount(),
        weights in weights(),
    ) {
        let result = AllocationUtil::allocate(amount, &weights).unwrap();
        if weights.len() > 1 {
            for (share, weight) in result.iter().zip(&weights[..weights.len() - 1]) {
                if *weight == 0 {
                    prop_assert_eq!(*share, 0);
                }
            }
        }
    }

    // =========================================================================
    // Round trip
    // =========================================================================

    /// Smallest units → display string → smallest units is lossless.
    #[test]
    fn prop_display_string_round_trip(
        smallest in amount(),
        code in currency(),
    ) {
        let text = to_display_string(smallest, code).unwrap();
        prop_assert_eq!(to_smallest_unit(text.as_str(), code).unwrap(), smallest);
    }

    /// Display strings carry exactly the currency's number of decimals.
    #[test]
    fn prop_display_string_has_exponent_digits(
        smallest in amount(),
        code in currency(),
    ) {
        let exponent = get_exponent(code).unwrap() as usize;
        let text = to_display_string(smallest, code).unwrap();
        let fraction_len = text.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction_len, exponent);
    }

    // =========================================================================
    // Conversion & percentage
    // =========================================================================

    /// Same-currency conversion returns the amount whatever the rate.
    #[test]
    fn prop_same_currency_conversion_is_identity(
        amount in amount(),
        code in currency(),
        rate in 1i64..100_000_000i64,
    ) {
        let rate = Decimal::new(rate, 4);
        prop_assert_eq!(convert(amount, code, code, rate).unwrap(), amount);
    }

    /// Conversion with rate 1 between equal-exponent currencies is lossless.
    #[test]
    fn prop_unit_rate_between_equal_exponents(amount in amount()) {
        prop_assert_eq!(convert(amount, "USD", "EUR", Decimal::ONE).unwrap(), amount);
    }

    /// `percentage(x, 0)` is 0 for any x.
    #[test]
    fn prop_percentage_zero_total(
        amount in any::<i64>(),
        places in 0u32..6,
    ) {
        prop_assert_eq!(percentage(amount, 0, places), Decimal::ZERO);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: 1000 / 3 = [334, 333, 333].
    #[test]
    fn test_allocate_evenly_1000_by_3() {
        assert_eq!(
            AllocationUtil::allocate_evenly(1000, 3).unwrap(),
            vec![334, 333, 333]
        );
    }

    /// Specific example: 1000 by [1, 1, 2] = [250, 250, 500].
    #[test]
    fn test_allocate_1000_by_1_1_2() {
        assert_eq!(
            AllocationUtil::allocate(1000, &[1, 1, 2]).unwrap(),
            vec![250, 250, 500]
        );
    }

    /// Specific example: 300 SAR = 30000 halalas.
    #[test]
    fn test_300_sar() {
        assert_eq!(to_smallest_unit(300, "SAR").unwrap(), 30000);
    }

    /// Specific example: ¥1000 at 0.0067 = 670 cents.
    #[test]
    fn test_convert_jpy_usd() {
        assert_eq!(convert(1000, "JPY", "USD", 0.0067).unwrap(), 670);
    }
}
