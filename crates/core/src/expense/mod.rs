//! Living expense requirement calculation.
//!
//! `compute` maps an [`ExpenseInput`] and a set of [`StipendRates`] to a
//! [`CostBreakdown`]. It is pure: the same input always gives the same
//! breakdown, and nothing is cached between calls.

pub mod calculator;
pub mod error;
pub mod input;
pub mod types;

#[cfg(test)]
mod props;


pub use calculator::{benchmark_total, compute};
pub use error::InputError;
pub use input::{
    CHILD_COUNT_MAX, EXCHANGE_RATE_MAX_DP, MARGIN_MAX, MARGIN_MIN, MARGIN_STEP,
    child_count_options, margin_options, normalize_exchange_rate, parse_number,
    parse_spouse_selection,
};
pub use types::{BreakdownRow, Category, CostBreakdown, ExpenseInput, StipendRates};
