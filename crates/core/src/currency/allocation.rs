//! Lossless amount allocation.
//!
//! This module splits an integer amount into parts while ensuring the parts
//! sum exactly to the original total (no cents lost, none fabricated).
//!
//! Two strategies:
//! 1. Even split: floor share for everyone, the remainder goes one unit at a
//!    time to the first entries
//! 2. Weighted split: proportional shares rounded half-up for every weight but
//!    the last, which absorbs whatever is left

use rust_decimal::Decimal;
use tracing::debug;

use super::error::{MoneyError, MoneyResult};
use super::rounding::{DecimalInput, round_to_unit};

/// Allocation utility for distributing amounts.
///
/// Guarantees for every successful call:
/// - Sum of allocations EXACTLY equals the original amount
/// - Number of allocations equals the requested part count
pub struct AllocationUtil;

impl AllocationUtil {
    /// Split `amount` into `parts` near-equal integers.
    ///
    /// The first `amount mod parts` entries get one extra unit, so entries
    /// differ by at most 1 and the order is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartCount` if `parts` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use spendlog_core::currency::AllocationUtil;
    ///
    /// // 1000 / 3 = [334, 333, 333], sum = 1000
    /// let result = AllocationUtil::allocate_evenly(1000, 3).unwrap();
    /// assert_eq!(result, vec![334, 333, 333]);
    /// ```
    pub fn allocate_evenly(amount: i64, parts: usize) -> MoneyResult<Vec<i64>> {
        if parts == 0 {
            return Err(MoneyError::InvalidPartCount(parts));
        }
        if parts == 1 {
            return Ok(vec![amount]);
        }

        let divisor = i64::try_from(parts).map_err(|_| MoneyError::InvalidPartCount(parts))?;

        // Euclidean division floors for a positive divisor, so the remainder
        // is always in 0..parts.
        let base = amount.div_euclid(divisor);
        let remainder = amount.rem_euclid(divisor);
        let extra = usize::try_from(remainder).map_err(|_| MoneyError::Overflow)?;

        Ok((0..parts)
            .map(|i| if i < extra { base + 1 } else { base })
            .collect())
    }

    /// Split `amount` proportionally to `weights`.
    ///
    /// Each weight except the last receives `round(amount × w / total)`. The
    /// last receives the remainder, which keeps the total exact.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the weights sum to zero (with two or more
    /// weights), or `InvalidAmount` if a weight is not a number.
    ///
    /// # Example
    ///
    /// ```
    /// use spendlog_core::currency::AllocationUtil;
    ///
    /// let result = AllocationUtil::allocate(1000, &[1, 1, 2]).unwrap();
    /// assert_eq!(result, vec![250, 250, 500]);
    /// ```
    pub fn allocate<'a, W>(amount: i64, weights: &[W]) -> MoneyResult<Vec<i64>>
    where
        W: Copy + Into<DecimalInput<'a>>,
    {
        match weights {
            [] => return Ok(vec![]),
            [_] => return Ok(vec![amount]),
            _ => {}
        }

        let weights = weights
            .iter()
            .map(|w| (*w).into().to_decimal())
            .collect::<MoneyResult<Vec<Decimal>>>()?;

        let total_weight = weights.iter().try_fold(Decimal::ZERO, |acc, w| {
            acc.checked_add(*w).ok_or(MoneyError::Overflow)
        })?;
        if total_weight.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        let amount_dec = Decimal::from(amount);
        let mut remaining = amount;
        let mut shares = Vec::with_capacity(weights.len());

        for weight in &weights[..weights.len() - 1] {
            let exact = amount_dec
                .checked_mul(*weight)
                .and_then(|v| v.checked_div(total_weight))
                .ok_or(MoneyError::Overflow)?;
            let share = round_to_unit(exact)?;
            remaining = remaining.checked_sub(share).ok_or(MoneyError::Overflow)?;
            shares.push(share);
        }
        shares.push(remaining);

        debug!(amount, parts = shares.len(), %total_weight, "Allocated by weights");
        Ok(shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    // =========================================================================
    // allocate_evenly tests
    // =========================================================================

    #[test]
    fn test_allocate_evenly_zero_parts() {
        assert_eq!(
            AllocationUtil::allocate_evenly(100, 0),
            Err(MoneyError::InvalidPartCount(0))
        );
    }

    #[test]
    fn test_allocate_evenly_single() {
        assert_eq!(AllocationUtil::allocate_evenly(1000, 1).unwrap(), vec![1000]);
        assert_eq!(AllocationUtil::allocate_evenly(-7, 1).unwrap(), vec![-7]);
    }

    #[test]
    fn test_allocate_evenly_thirds() {
        // 1000 / 3 → [334, 333, 333], not [333, 333, 333]
        let result = AllocationUtil::allocate_evenly(1000, 3).unwrap();
        assert_eq!(result, vec![334, 333, 333]);
        assert_eq!(result.iter().sum::<i64>(), 1000);
    }

    #[test]
    fn test_allocate_evenly_front_loads_remainder() {
        let result = AllocationUtil::allocate_evenly(10, 4).unwrap();
        assert_eq!(result, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_allocate_evenly_more_parts_than_units() {
        let result = AllocationUtil::allocate_evenly(2, 5).unwrap();
        assert_eq!(result, vec![1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_allocate_evenly_negative() {
        let result = AllocationUtil::allocate_evenly(-1000, 3).unwrap();
        assert_eq!(result, vec![-333, -333, -334]);
        assert_eq!(result.iter().sum::<i64>(), -1000);
    }

    #[rstest]
    #[case(100, 3)]
    #[case(100, 7)]
    #[case(1, 3)]
    #[case(0, 4)]
    #[case(99_999, 7)]
    #[case(i64::MAX, 10)]
    #[case(i64::MIN, 10)]
    fn test_allocate_evenly_sum_invariant(#[case] amount: i64, #[case] parts: usize) {
        let result = AllocationUtil::allocate_evenly(amount, parts).unwrap();
        assert_eq!(result.len(), parts);
        assert_eq!(
            result.iter().map(|v| i128::from(*v)).sum::<i128>(),
            i128::from(amount),
            "Sum invariant failed for amount={amount}, parts={parts}"
        );
    }

    // =========================================================================
    // allocate tests
    // =========================================================================

    #[test]
    fn test_allocate_empty() {
        let result = AllocationUtil::allocate::<i64>(1000, &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_allocate_single_ignores_weight() {
        assert_eq!(AllocationUtil::allocate(1000, &[0]).unwrap(), vec![1000]);
        assert_eq!(AllocationUtil::allocate(1000, &[42]).unwrap(), vec![1000]);
    }

    #[test]
    fn test_allocate_zero_total_weight() {
        assert_eq!(
            AllocationUtil::allocate(1000, &[0, 0]),
            Err(MoneyError::DivisionByZero)
        );
        assert_eq!(
            AllocationUtil::allocate(1000, &[1, -1]),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_allocate_one_one_two() {
        let result = AllocationUtil::allocate(1000, &[1, 1, 2]).unwrap();
        assert_eq!(result, vec![250, 250, 500]);
    }

    #[test]
    fn test_allocate_last_bucket_absorbs_rounding() {
        // 100 * 1/3 = 33.33 → 33 twice, last gets 34
        let result = AllocationUtil::allocate(100, &[1, 1, 1]).unwrap();
        assert_eq!(result, vec![33, 33, 34]);

        // 5 * 1/2 = 2.5 → 3 (half-up), last gets 2
        let result = AllocationUtil::allocate(5, &[1, 1]).unwrap();
        assert_eq!(result, vec![3, 2]);
    }

    #[test]
    fn test_allocate_decimal_and_float_weights() {
        let result = AllocationUtil::allocate(10_000, &[dec!(50), dec!(30), dec!(20)]).unwrap();
        assert_eq!(result, vec![5000, 3000, 2000]);

        let result = AllocationUtil::allocate(999, &[0.5, 0.25, 0.25]).unwrap();
        assert_eq!(result, vec![500, 250, 249]);
        assert_eq!(result.iter().sum::<i64>(), 999);
    }

    #[test]
    fn test_allocate_zero_weight_member() {
        let result = AllocationUtil::allocate(1000, &[0, 3, 1]).unwrap();
        assert_eq!(result, vec![0, 750, 250]);
    }

    #[test]
    fn test_allocate_invalid_weight() {
        assert!(matches!(
            AllocationUtil::allocate(1000, &["1", "x"]),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[rstest]
    #[case(1000, vec![1, 2, 3, 4])]
    #[case(1, vec![1, 1, 1])]
    #[case(-1001, vec![3, 3, 3])]
    #[case(99_999, vec![7, 11, 13, 17, 19])]
    fn test_allocate_sum_invariant(#[case] amount: i64, #[case] weights: Vec<i64>) {
        let result = AllocationUtil::allocate(amount, &weights).unwrap();
        assert_eq!(result.len(), weights.len());
        assert_eq!(result.iter().sum::<i64>(), amount);
    }
}
