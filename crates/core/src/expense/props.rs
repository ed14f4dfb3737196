//! Property-based tests for the cost calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::compute;
use super::input::{EXCHANGE_RATE_MAX_DP, normalize_exchange_rate};
use super::types::{ExpenseInput, StipendRates};

/// Strategy to generate positive exchange rates with up to 10 decimal places.
fn exchange_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000_000i64, 0u32..=EXCHANGE_RATE_MAX_DP)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate any input the UI can produce, with non-negative numerics.
fn valid_input() -> impl Strategy<Value = ExpenseInput> {
    (
        exchange_rate(),
        0i64..=120,
        any::<bool>(),
        0u8..=5,
        (2u8..=20).prop_map(|step| step * 5),
    )
        .prop_map(
            |(exchange_rate, duration_months, spouse_present, child_count, margin_percent)| {
                ExpenseInput {
                    exchange_rate,
                    duration_months,
                    spouse_present,
                    child_count,
                    margin_percent,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Total row is the sum of the other rows, in every column.
    #[test]
    fn prop_total_is_sum_of_rows(input in valid_input()) {
        let b = compute(&input, &StipendRates::default());
        prop_assert_eq!(b.total.base, b.applicant.base + b.spouse.base + b.children.base);
        prop_assert_eq!(
            b.total.converted,
            b.applicant.converted + b.spouse.converted + b.children.converted
        );
        prop_assert_eq!(
            b.total.with_margin,
            b.applicant.with_margin + b.spouse.with_margin + b.children.with_margin
        );
    }

    /// Converted = base * rate; with margin = converted * (1 + m/100), for every row.
    #[test]
    fn prop_conversion_and_margin_formulas(input in valid_input()) {
        let b = compute(&input, &StipendRates::default());
        let multiplier = Decimal::ONE + Decimal::from(input.margin_percent) / Decimal::ONE_HUNDRED;
        for row in b.rows() {
            prop_assert_eq!(row.converted, row.base * input.exchange_rate);
            prop_assert_eq!(row.with_margin, row.converted * multiplier);
        }
    }

    /// Rounding to the kept decimal places never changes a rate that already fits.
    #[test]
    fn prop_normalize_keeps_short_rates(rate in exchange_rate()) {
        prop_assert_eq!(normalize_exchange_rate(rate), rate);
    }

    /// Same input, same breakdown.
    #[test]
    fn prop_compute_is_idempotent(input in valid_input()) {
        let rates = StipendRates::default();
        prop_assert_eq!(compute(&input, &rates), compute(&input, &rates));
    }

    /// No spouse means no spouse cost.
    #[test]
    fn prop_no_spouse_means_zero_spouse_cost(input in valid_input()) {
        let b = compute(&input.with_spouse(false), &StipendRates::default());
        prop_assert!(b.spouse.base.is_zero());
        prop_assert!(b.spouse.converted.is_zero());
        prop_assert!(b.spouse.with_margin.is_zero());
    }

    /// More months never lowers the totals.
    #[test]
    fn prop_monotonic_in_duration(input in valid_input(), extra in 1i64..=24) {
        let rates = StipendRates::default();
        let before = compute(&input, &rates);
        let after = compute(&input.with_duration_months(input.duration_months + extra), &rates);
        prop_assert!(after.total.base >= before.total.base);
        prop_assert!(after.total.converted >= before.total.converted);
    }

    /// More children never lowers the totals.
    #[test]
    fn prop_monotonic_in_children(input in valid_input()) {
        prop_assume!(input.child_count < 5);
        let rates = StipendRates::default();
        let before = compute(&input, &rates);
        let after = compute(&input.with_children(input.child_count + 1), &rates);
        prop_assert!(after.total.base >= before.total.base);
        prop_assert!(after.total.converted >= before.total.converted);
    }

    /// A higher exchange rate never lowers the converted total.
    #[test]
    fn prop_monotonic_in_exchange_rate(input in valid_input(), bump in exchange_rate()) {
        let rates = StipendRates::default();
        let before = compute(&input, &rates);
        let after = compute(&input.with_exchange_rate(input.exchange_rate + bump), &rates);
        prop_assert_eq!(after.total.base, before.total.base);
        prop_assert!(after.total.converted >= before.total.converted);
    }
}
