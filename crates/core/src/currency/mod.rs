//! Currency conversion and margin handling.

pub mod conversion;
pub mod pair;

#[cfg(test)]
mod props;

pub use conversion::{apply_margin, convert_amount, margin_multiplier, round_for_display};
pub use pair::CurrencyPair;
