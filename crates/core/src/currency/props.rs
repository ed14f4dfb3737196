//! Property-based tests for conversion and margin helpers.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{apply_margin, convert_amount, margin_multiplier, round_for_display};

/// Strategy to generate amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate margins offered by the slider.
fn slider_margin() -> impl Strategy<Value = u8> {
    (2u8..=20).prop_map(|step| step * 5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion is plain multiplication, no rounding.
    #[test]
    fn prop_convert_is_exact_product(amount in amount(), rate in positive_rate()) {
        prop_assert_eq!(convert_amount(amount, rate), amount * rate);
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(amount in amount(), rate in positive_rate()) {
        prop_assert_eq!(convert_amount(amount, rate), convert_amount(amount, rate));
    }

    /// A margin never shrinks a non-negative amount.
    #[test]
    fn prop_margin_never_decreases(amount in amount(), margin in slider_margin()) {
        prop_assert!(apply_margin(amount, margin) >= amount);
    }

    /// Margin application equals multiplication by `1 + m/100`.
    #[test]
    fn prop_margin_matches_multiplier(amount in amount(), margin in slider_margin()) {
        let expected = amount * (Decimal::ONE + Decimal::from(margin) / Decimal::ONE_HUNDRED);
        prop_assert_eq!(apply_margin(amount, margin), expected);
        prop_assert!(margin_multiplier(margin) > Decimal::ONE);
    }

    /// Display rounding keeps at most two decimal places.
    #[test]
    fn prop_display_rounding_two_places(amount in amount(), rate in positive_rate()) {
        let rounded = round_for_display(convert_amount(amount, rate), 2);
        prop_assert!(rounded.scale() <= 2);
    }
}
