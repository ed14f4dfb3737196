//! Application configuration management.
//!
//! Stipend rates are regulatory figures that change yearly, so they live here
//! as named configuration rather than in the calculation code. Every key has
//! a compiled-in default; config files and `LIVINGCOST__*` environment
//! variables only override.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Monthly stipend rates in the base currency.
    #[serde(default)]
    pub stipend: StipendConfig,
    /// Currency pair used for conversion and labels.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Calculator defaults and presentation settings.
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Monthly stipend rates per applicant category, in the base currency.
#[derive(Debug, Clone, Deserialize)]
pub struct StipendConfig {
    /// Main applicant, per month.
    #[serde(default = "default_applicant_monthly")]
    pub applicant_monthly: Decimal,
    /// Accompanying spouse, per month.
    #[serde(default = "default_spouse_monthly")]
    pub spouse_monthly: Decimal,
    /// Each accompanying child, per month.
    #[serde(default = "default_child_monthly")]
    pub child_monthly: Decimal,
}

impl Default for StipendConfig {
    fn default() -> Self {
        Self {
            applicant_monthly: default_applicant_monthly(),
            spouse_monthly: default_spouse_monthly(),
            child_monthly: default_child_monthly(),
        }
    }
}

// Migration Agency figures for 2025, SEK per month.
fn default_applicant_monthly() -> Decimal {
    Decimal::from(10_584)
}

fn default_spouse_monthly() -> Decimal {
    Decimal::from(4_410)
}

fn default_child_monthly() -> Decimal {
    Decimal::from(2_646)
}

/// Currency pair configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency the stipend rates are denominated in.
    #[serde(default = "default_base_currency")]
    pub base: Currency,
    /// Currency the totals are converted into.
    #[serde(default = "default_converted_currency")]
    pub converted: Currency,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
            converted: default_converted_currency(),
        }
    }
}

fn default_base_currency() -> Currency {
    Currency::Sek
}

fn default_converted_currency() -> Currency {
    Currency::Lkr
}

/// Calculator defaults and presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Exchange rate shown when the user has not entered one.
    #[serde(default = "default_exchange_rate")]
    pub default_exchange_rate: Decimal,
    /// Duration shown when the user has not entered one.
    #[serde(default = "default_duration_months")]
    pub default_duration_months: i64,
    /// Whether the spouse selector starts on "Yes".
    #[serde(default = "default_spouse_present")]
    pub default_spouse_present: bool,
    /// Initial child count selection.
    #[serde(default)]
    pub default_child_count: u8,
    /// Initial margin slider position.
    #[serde(default = "default_margin_percent")]
    pub default_margin_percent: u8,
    /// Fixed margin used for the standalone benchmark sentence.
    #[serde(default = "default_margin_percent")]
    pub benchmark_margin_percent: u8,
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Filename offered for the CSV download.
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_exchange_rate: default_exchange_rate(),
            default_duration_months: default_duration_months(),
            default_spouse_present: default_spouse_present(),
            default_child_count: 0,
            default_margin_percent: default_margin_percent(),
            benchmark_margin_percent: default_margin_percent(),
            title: default_title(),
            export_filename: default_export_filename(),
        }
    }
}

fn default_exchange_rate() -> Decimal {
    Decimal::from(30)
}

fn default_duration_months() -> i64 {
    13
}

fn default_spouse_present() -> bool {
    true
}

fn default_margin_percent() -> u8 {
    30
}

fn default_title() -> String {
    "Calculate the Minimum Living Expense Requirement for Sweden - 2025".to_string()
}

fn default_export_filename() -> String {
    "living_expense_breakdown.csv".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LIVINGCOST").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Checks values the type system cannot rule out.
    ///
    /// Calculator defaults are checked by the core crate when it builds its
    /// settings; this only covers the stipend and currency sections.
    pub fn validate(&self) -> AppResult<()> {
        let rates = [
            ("stipend.applicant_monthly", self.stipend.applicant_monthly),
            ("stipend.spouse_monthly", self.stipend.spouse_monthly),
            ("stipend.child_monthly", self.stipend.child_monthly),
        ];
        for (key, rate) in rates {
            if rate <= Decimal::ZERO {
                return Err(AppError::Config(format!("{key} must be positive, got {rate}")));
            }
        }

        if self.currency.base == self.currency.converted {
            return Err(AppError::Config(format!(
                "currency.base and currency.converted must differ (both {})",
                self.currency.base
            )));
        }

        if self.calculator.export_filename.trim().is_empty() {
            return Err(AppError::Config(
                "calculator.export_filename must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_published_rates() {
        let config = AppConfig::default();
        assert_eq!(config.stipend.applicant_monthly, dec!(10584));
        assert_eq!(config.stipend.spouse_monthly, dec!(4410));
        assert_eq!(config.stipend.child_monthly, dec!(2646));
        assert_eq!(config.currency.base, Currency::Sek);
        assert_eq!(config.currency.converted, Currency::Lkr);
        assert_eq!(config.calculator.default_exchange_rate, dec!(30));
        assert_eq!(config.calculator.default_duration_months, 13);
        assert!(config.calculator.default_spouse_present);
        assert_eq!(config.calculator.default_child_count, 0);
        assert_eq!(config.calculator.default_margin_percent, 30);
        assert_eq!(config.calculator.benchmark_margin_percent, 30);
        assert_eq!(
            config.calculator.export_filename,
            "living_expense_breakdown.csv"
        );
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "LIVINGCOST__STIPEND__APPLICANT_MONTHLY",
                "LIVINGCOST__SERVER__PORT",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.stipend.applicant_monthly, dec!(10584));
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("LIVINGCOST__STIPEND__APPLICANT_MONTHLY", Some("11000")),
                ("LIVINGCOST__SERVER__PORT", Some("9090")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.stipend.applicant_monthly, dec!(11000));
                assert_eq!(config.stipend.spouse_monthly, dec!(4410));
                assert_eq!(config.server.port, 9090);
            },
        );
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        let mut config = AppConfig::default();
        config.stipend.child_monthly = Decimal::ZERO;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("stipend.child_monthly"));
    }

    #[test]
    fn test_validate_rejects_same_currency() {
        let mut config = AppConfig::default();
        config.currency.converted = Currency::Sek;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_filename() {
        let mut config = AppConfig::default();
        config.calculator.export_filename = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
