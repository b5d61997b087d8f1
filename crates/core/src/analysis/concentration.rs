//! Concentration and inequality metrics.
//!
//! Pure functions over counterparty totals. The Gini formula here is the
//! discrete approximation, not the continuous Lorenz-curve integral; its
//! exact shape is load-bearing for downstream consumers comparing periods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Size-based counterparty segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartySegment {
    /// Top decile of the ranked population.
    Major,
    /// Everything between the two deciles.
    Regular,
    /// Bottom decile of the ranked population.
    Small,
}

/// Discrete Gini coefficient over a set of totals.
///
/// Sorts ascending; with n items and total T,
/// `gini = Σ (2·rank − n − 1)·amount / (n·T)` over 1-based ranks, clamped
/// to [0, 1]. Zero when n = 0 or T = 0.
#[must_use]
pub fn gini_coefficient(amounts: &[Decimal]) -> Decimal {
    let n = amounts.len();
    if n == 0 {
        return Decimal::ZERO;
    }
    let total: Decimal = amounts.iter().copied().sum();
    if total.is_zero() {
        return Decimal::ZERO;
    }

    let mut ascending = amounts.to_vec();
    ascending.sort_unstable();

    let n_dec = Decimal::from(n);
    let mut weighted = Decimal::ZERO;
    for (index, amount) in ascending.iter().enumerate() {
        let rank = Decimal::from(index + 1);
        weighted += (Decimal::TWO * rank - n_dec - Decimal::ONE) * *amount;
    }

    (weighted / (n_dec * total)).clamp(Decimal::ZERO, Decimal::ONE)
}

/// Share of the total held by the first `top_n` amounts, as a percentage.
///
/// Expects totals already sorted descending. Zero-guarded and rounded to
/// 2 dp; `top_n` beyond the population simply covers everything.
#[must_use]
pub fn concentration_ratio(descending_totals: &[Decimal], top_n: usize) -> Decimal {
    let total: Decimal = descending_totals.iter().copied().sum();
    if total.is_zero() {
        return Decimal::ZERO;
    }
    let top: Decimal = descending_totals.iter().take(top_n).copied().sum();
    (top / total * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Major/small bucket size for a population of `n`: a tenth, at least one.
#[must_use]
pub fn decile_size(n: usize) -> usize {
    (n / 10).max(1)
}

/// Segment for a 1-based rank within a population of `n`.
///
/// The top bucket wins when the two overlap, which happens for tiny
/// populations.
#[must_use]
pub fn segment_for_rank(rank: usize, n: usize) -> CounterpartySegment {
    let bucket = decile_size(n);
    if rank <= bucket {
        CounterpartySegment::Major
    } else if rank > n.saturating_sub(bucket) {
        CounterpartySegment::Small
    } else {
        CounterpartySegment::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gini_degenerate_inputs() {
        assert_eq!(gini_coefficient(&[]), Decimal::ZERO);
        assert_eq!(gini_coefficient(&[Decimal::ZERO, Decimal::ZERO]), Decimal::ZERO);
        // A single counterparty carries weight 2·1 − 1 − 1 = 0.
        assert_eq!(gini_coefficient(&[dec!(1_000_000)]), Decimal::ZERO);
    }

    #[test]
    fn test_gini_equal_distribution_is_zero() {
        let amounts = vec![dec!(250); 8];
        assert_eq!(gini_coefficient(&amounts), Decimal::ZERO);
    }

    #[test]
    fn test_gini_single_dominant_counterparty() {
        // One holder of everything among n: gini = (n − 1) / n.
        let mut amounts = vec![Decimal::ZERO; 9];
        amounts.push(dec!(5_000_000));
        assert_eq!(gini_coefficient(&amounts), dec!(0.9));
    }

    #[test]
    fn test_gini_known_value() {
        // Sorted ascending [1, 2, 3, 4]: Σ weights·amounts = -3·1 - 1·2 + 1·3 + 3·4 = 10,
        // n·T = 4·10, so gini = 0.25.
        let amounts = vec![dec!(4), dec!(1), dec!(3), dec!(2)];
        assert_eq!(gini_coefficient(&amounts), dec!(0.25));
    }

    #[test]
    fn test_concentration_ratio() {
        let totals = vec![dec!(50), dec!(30), dec!(20)];
        assert_eq!(concentration_ratio(&totals, 1), dec!(50.00));
        assert_eq!(concentration_ratio(&totals, 2), dec!(80.00));
        assert_eq!(concentration_ratio(&totals, 10), dec!(100.00));
        assert_eq!(concentration_ratio(&[], 3), Decimal::ZERO);
    }

    #[rstest]
    #[case(1, 1, CounterpartySegment::Major)]
    #[case(1, 2, CounterpartySegment::Major)]
    #[case(2, 2, CounterpartySegment::Small)]
    #[case(2, 3, CounterpartySegment::Regular)]
    #[case(1, 10, CounterpartySegment::Major)]
    #[case(2, 10, CounterpartySegment::Regular)]
    #[case(10, 10, CounterpartySegment::Small)]
    #[case(2, 25, CounterpartySegment::Major)]
    #[case(3, 25, CounterpartySegment::Regular)]
    #[case(23, 25, CounterpartySegment::Regular)]
    #[case(24, 25, CounterpartySegment::Small)]
    fn test_segment_for_rank(
        #[case] rank: usize,
        #[case] n: usize,
        #[case] expected: CounterpartySegment,
    ) {
        assert_eq!(segment_for_rank(rank, n), expected);
    }

    #[test]
    fn test_decile_size_has_floor_of_one() {
        assert_eq!(decile_size(1), 1);
        assert_eq!(decile_size(9), 1);
        assert_eq!(decile_size(10), 1);
        assert_eq!(decile_size(20), 2);
        assert_eq!(decile_size(105), 10);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// **Property: the Gini coefficient stays within [0, 1].**
        #[test]
        fn prop_gini_bounds(amounts in prop::collection::vec(0i64..10_000_000i64, 0..50)) {
            let amounts: Vec<Decimal> = amounts.into_iter().map(Decimal::from).collect();
            let gini = gini_coefficient(&amounts);

            prop_assert!(gini >= Decimal::ZERO);
            prop_assert!(gini <= Decimal::ONE);
        }

        /// **Property: equal distributions score exactly zero.**
        #[test]
        fn prop_gini_equal_is_zero(amount in 1i64..10_000_000i64, n in 1usize..40) {
            let amounts = vec![Decimal::from(amount); n];
            prop_assert_eq!(gini_coefficient(&amounts), Decimal::ZERO);
        }

        /// **Property: order of input does not matter.**
        #[test]
        fn prop_gini_order_independent(amounts in prop::collection::vec(0i64..10_000_000i64, 1..30)) {
            let forward: Vec<Decimal> = amounts.iter().copied().map(Decimal::from).collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            prop_assert_eq!(gini_coefficient(&forward), gini_coefficient(&reversed));
        }

        /// **Property: every rank lands in exactly one segment and the
        /// extremes are covered.**
        #[test]
        fn prop_segments_cover_population(n in 1usize..200) {
            prop_assert_eq!(segment_for_rank(1, n), CounterpartySegment::Major);
            if n > 1 {
                prop_assert_eq!(segment_for_rank(n, n), CounterpartySegment::Small);
            }
        }
    }
}
