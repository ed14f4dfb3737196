//! Input collection rules.
//!
//! Child count and margin come from closed selections. Exchange rate and
//! duration are free numeric fields and are accepted as-is, including zero
//! and negative values. The exchange rate is held to a fixed number of
//! decimal places so every product in the breakdown stays exact.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::InputError;
use super::types::ExpenseInput;

/// Largest selectable child count.
pub const CHILD_COUNT_MAX: u8 = 5;
/// Smallest margin slider position, in percent.
pub const MARGIN_MIN: u8 = 10;
/// Largest margin slider position, in percent.
pub const MARGIN_MAX: u8 = 100;
/// Margin slider step, in percent.
pub const MARGIN_STEP: u8 = 5;

/// Decimal places kept from a submitted exchange rate.
pub const EXCHANGE_RATE_MAX_DP: u32 = 10;

/// Child counts offered by the selector.
pub fn child_count_options() -> impl Iterator<Item = u8> {
    0..=CHILD_COUNT_MAX
}

/// Margin positions offered by the slider.
pub fn margin_options() -> impl Iterator<Item = u8> {
    (MARGIN_MIN..=MARGIN_MAX).step_by(usize::from(MARGIN_STEP))
}

/// Parses the spouse selector value.
///
/// Accepts `yes`/`no` (the selector's own values) and `true`/`false`,
/// case-insensitively.
pub fn parse_spouse_selection(value: &str) -> Result<bool, InputError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(InputError::InvalidSpouseSelection(value.to_string())),
    }
}

/// Parses an optional numeric field. Blank text counts as not supplied.
pub fn parse_number<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, InputError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<T>()
            .map(Some)
            .map_err(|_| InputError::InvalidNumber {
                field,
                value: text.to_string(),
            }),
    }
}

/// Rounds an exchange rate to [`EXCHANGE_RATE_MAX_DP`] places, half to even.
#[must_use]
pub fn normalize_exchange_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(EXCHANGE_RATE_MAX_DP, RoundingStrategy::MidpointNearestEven)
}

/// Checks a margin against the slider positions.
pub fn validate_margin(value: u8) -> Result<u8, InputError> {
    if margin_options().any(|position| position == value) {
        Ok(value)
    } else {
        Err(InputError::InvalidMargin {
            value,
            min: MARGIN_MIN,
            max: MARGIN_MAX,
            step: MARGIN_STEP,
        })
    }
}

/// Checks a child count against the selector range.
pub fn validate_child_count(value: u8) -> Result<u8, InputError> {
    if value <= CHILD_COUNT_MAX {
        Ok(value)
    } else {
        Err(InputError::ChildCountOutOfRange {
            value,
            max: CHILD_COUNT_MAX,
        })
    }
}

impl ExpenseInput {
    /// Verifies the closed selections are in range.
    pub fn validate(&self) -> Result<(), InputError> {
        validate_child_count(self.child_count)?;
        validate_margin(self.margin_percent)?;
        Ok(())
    }

    /// Returns a copy with the exchange rate replaced.
    #[must_use]
    pub const fn with_exchange_rate(mut self, exchange_rate: Decimal) -> Self {
        self.exchange_rate = exchange_rate;
        self
    }

    /// Returns a copy with the duration replaced.
    #[must_use]
    pub const fn with_duration_months(mut self, duration_months: i64) -> Self {
        self.duration_months = duration_months;
        self
    }

    /// Returns a copy with the spouse flag replaced.
    #[must_use]
    pub const fn with_spouse(mut self, spouse_present: bool) -> Self {
        self.spouse_present = spouse_present;
        self
    }

    /// Returns a copy with the child count replaced.
    #[must_use]
    pub const fn with_children(mut self, child_count: u8) -> Self {
        self.child_count = child_count;
        self
    }

    /// Returns a copy with the margin replaced.
    #[must_use]
    pub const fn with_margin(mut self, margin_percent: u8) -> Self {
        self.margin_percent = margin_percent;
        self
    }
}
