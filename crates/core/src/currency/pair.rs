//! Base/converted currency pair.

use livingcost_shared::config::CurrencyConfig;
use livingcost_shared::types::Currency;
use serde::{Deserialize, Serialize};

/// The currency stipends are published in and the one totals are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency of the stipend rates.
    pub base: Currency,
    /// Currency the user wants the totals in.
    pub converted: Currency,
}

impl CurrencyPair {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(base: Currency, converted: Currency) -> Self {
        Self { base, converted }
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(Currency::Sek, Currency::Lkr)
    }
}

impl From<&CurrencyConfig> for CurrencyPair {
    fn from(config: &CurrencyConfig) -> Self {
        Self::new(config.base, config.converted)
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.converted)
    }
}
