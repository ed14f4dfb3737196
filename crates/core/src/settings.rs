//! Calculator settings assembled from configuration.

use livingcost_shared::AppConfig;

use crate::currency::CurrencyPair;
use crate::expense::input::validate_margin;
use crate::expense::{ExpenseInput, InputError, StipendRates};

/// Everything a request needs besides the user's own input.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorSettings {
    /// Monthly stipend rates.
    pub rates: StipendRates,
    /// Base and converted currencies.
    pub currencies: CurrencyPair,
    /// Values used for any input the user has not supplied.
    pub defaults: ExpenseInput,
    /// Fixed margin for the benchmark sentence.
    pub benchmark_margin_percent: u8,
    /// Page heading.
    pub title: String,
    /// Filename of the CSV download.
    pub export_filename: String,
}

impl CalculatorSettings {
    /// Builds settings from loaded configuration.
    ///
    /// Configured defaults must themselves be selectable values.
    pub fn from_config(config: &AppConfig) -> Result<Self, InputError> {
        let calculator = &config.calculator;
        let defaults = ExpenseInput {
            exchange_rate: calculator.default_exchange_rate,
            duration_months: calculator.default_duration_months,
            spouse_present: calculator.default_spouse_present,
            child_count: calculator.default_child_count,
            margin_percent: calculator.default_margin_percent,
        };
        defaults.validate()?;
        validate_margin(calculator.benchmark_margin_percent)?;

        Ok(Self {
            rates: StipendRates::from(&config.stipend),
            currencies: CurrencyPair::from(&config.currency),
            defaults,
            benchmark_margin_percent: calculator.benchmark_margin_percent,
            title: calculator.title.clone(),
            export_filename: calculator.export_filename.clone(),
        })
    }
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        let calculator = livingcost_shared::config::CalculatorConfig::default();
        Self {
            rates: StipendRates::default(),
            currencies: CurrencyPair::default(),
            defaults: ExpenseInput::default(),
            benchmark_margin_percent: calculator.benchmark_margin_percent,
            title: calculator.title,
            export_filename: calculator.export_filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_default_config_matches_default() {
        let settings = CalculatorSettings::from_config(&AppConfig::default()).unwrap();
        assert_eq!(settings, CalculatorSettings::default());
        assert_eq!(settings.rates.applicant_monthly, dec!(10584));
        assert_eq!(settings.export_filename, "living_expense_breakdown.csv");
    }

    #[test]
    fn test_rejects_unselectable_default_margin() {
        let mut config = AppConfig::default();
        config.calculator.default_margin_percent = 33;
        assert!(matches!(
            CalculatorSettings::from_config(&config),
            Err(InputError::InvalidMargin { value: 33, .. })
        ));
    }

    #[test]
    fn test_rejects_unselectable_default_children() {
        let mut config = AppConfig::default();
        config.calculator.default_child_count = 6;
        assert!(CalculatorSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_custom_rates_flow_through() {
        let mut config = AppConfig::default();
        config.stipend.applicant_monthly = dec!(11000);
        config.calculator.benchmark_margin_percent = 20;
        let settings = CalculatorSettings::from_config(&config).unwrap();
        assert_eq!(settings.rates.applicant_monthly, dec!(11000));
        assert_eq!(settings.benchmark_margin_percent, 20);
    }
}
