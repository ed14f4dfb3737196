//! Currency conversion logic.
//!
//! Amounts stay unrounded through the whole calculation. Rounding happens
//! only when a value is turned into display text, using banker's rounding
//! (round half to even).
//!
//! All arithmetic saturates instead of panicking, so absurd inputs produce
//! absurd (but finite) numbers rather than a crash.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Converts an amount using the given exchange rate. No rounding is applied.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate)
}

/// Returns `1 + percent / 100`.
#[must_use]
pub fn margin_multiplier(percent: u8) -> Decimal {
    Decimal::ONE + Decimal::from(percent) / Decimal::ONE_HUNDRED
}

/// Inflates an amount by a margin percentage.
#[must_use]
pub fn apply_margin(amount: Decimal, percent: u8) -> Decimal {
    amount.saturating_mul(margin_multiplier(percent))
}

/// Rounds a value for display using banker's rounding.
#[must_use]
pub fn round_for_display(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
