//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use livingcost_core::expense::{
    ExpenseInput, InputError, normalize_exchange_rate, parse_number, parse_spouse_selection,
};
use livingcost_shared::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::AppState;
use crate::error::ApiError;

/// Raw calculator query parameters.
///
/// Every field is optional; missing or blank fields fall back to the
/// configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorQuery {
    /// Exchange rate (converted per base unit).
    pub exchange_rate: Option<String>,
    /// Number of months.
    pub duration_months: Option<String>,
    /// `yes` or `no`.
    pub spouse: Option<String>,
    /// 0-5.
    pub child_count: Option<String>,
    /// 10-100 in steps of 5.
    pub margin_percent: Option<String>,
}

impl CalculatorQuery {
    /// Merges the submitted fields over `defaults` and validates the result.
    pub fn resolve(&self, defaults: &ExpenseInput) -> Result<ExpenseInput, InputError> {
        let exchange_rate =
            parse_number::<Decimal>("exchange_rate", self.exchange_rate.as_deref())?;
        let duration_months = parse_number::<i64>("duration_months", self.duration_months.as_deref())?;
        let child_count = parse_number::<u8>("child_count", self.child_count.as_deref())?;
        let margin_percent = parse_number::<u8>("margin_percent", self.margin_percent.as_deref())?;
        let spouse_present = match self.spouse.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_spouse_selection(raw)?),
        };

        let input = ExpenseInput {
            exchange_rate: exchange_rate.map_or(defaults.exchange_rate, normalize_exchange_rate),
            duration_months: duration_months.unwrap_or(defaults.duration_months),
            spouse_present: spouse_present.unwrap_or(defaults.spouse_present),
            child_count: child_count.unwrap_or(defaults.child_count),
            margin_percent: margin_percent.unwrap_or(defaults.margin_percent),
        };
        input.validate()?;
        Ok(input)
    }
}

/// Extractor yielding a validated [`ExpenseInput`] from the query string.
///
/// ```ignore
/// async fn handler(CalculatorInput(input): CalculatorInput) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalculatorInput(pub ExpenseInput);

impl FromRequestParts<AppState> for CalculatorInput {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<CalculatorQuery>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::Validation(e.body_text()))?;

        query
            .resolve(&state.settings.defaults)
            .map(CalculatorInput)
            .map_err(|e| {
                warn!(error = %e, query = ?query, "Rejected calculator input");
                ApiError::from(e)
            })
    }
}
