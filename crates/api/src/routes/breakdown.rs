//! Breakdown routes: JSON result and CSV download.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::AppState;
use crate::error::ApiError;
use crate::extractors::CalculatorInput;
use livingcost_core::report::{Summary, evaluate, format_amount};

/// Creates the breakdown routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/breakdown", get(get_breakdown))
        .route("/breakdown/export", get(export_breakdown))
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for a breakdown calculation.
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    /// Resolved input (defaults filled in).
    pub input: InputResponse,
    /// Base currency code.
    pub base_currency: String,
    /// Converted currency code.
    pub converted_currency: String,
    /// Rows in the order You, Spouse, Kids, Total.
    pub rows: Vec<RowResponse>,
    /// Fixed-margin benchmark.
    pub benchmark: BenchmarkResponse,
    /// Result sentences as emphasis segments.
    pub summary: Summary,
}

/// Resolved input echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct InputResponse {
    /// Exchange rate used.
    pub exchange_rate: String,
    /// Duration in months.
    pub duration_months: i64,
    /// Whether the spouse row is counted.
    pub spouse_present: bool,
    /// Number of children.
    pub child_count: u8,
    /// Margin percent.
    pub margin_percent: u8,
}

/// One breakdown row.
#[derive(Debug, Serialize)]
pub struct RowResponse {
    /// Row label.
    pub label: String,
    /// Base currency amount, unrounded.
    pub base: String,
    /// Converted amount, unrounded.
    pub converted: String,
    /// Converted amount with margin, unrounded.
    pub expected: String,
    /// Display strings for the three amounts.
    pub display: [String; 3],
}

/// Benchmark figure.
#[derive(Debug, Serialize)]
pub struct BenchmarkResponse {
    /// Fixed margin percent.
    pub margin_percent: u8,
    /// Converted total with that margin, unrounded.
    pub amount: String,
    /// Same amount formatted for display.
    pub display: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal without trailing zeros.
fn format_exact(amount: Decimal) -> String {
    amount.normalize().to_string()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/breakdown` - Calculate the breakdown for the query inputs.
async fn get_breakdown(
    State(state): State<AppState>,
    CalculatorInput(input): CalculatorInput,
) -> Result<impl IntoResponse, ApiError> {
    let settings = &state.settings;
    let evaluation = evaluate(settings, &input)?;

    debug!(
        total_base = %evaluation.breakdown.total.base,
        total_converted = %evaluation.breakdown.total.converted,
        "Computed breakdown"
    );

    let rows = evaluation
        .table
        .rows
        .iter()
        .map(|row| RowResponse {
            label: row.label.to_string(),
            base: format_exact(row.base),
            converted: format_exact(row.converted),
            expected: format_exact(row.expected),
            display: row.display_values(),
        })
        .collect();

    let response = BreakdownResponse {
        input: InputResponse {
            exchange_rate: format_exact(input.exchange_rate),
            duration_months: input.duration_months,
            spouse_present: input.spouse_present,
            child_count: input.child_count,
            margin_percent: input.margin_percent,
        },
        base_currency: settings.currencies.base.to_string(),
        converted_currency: settings.currencies.converted.to_string(),
        rows,
        benchmark: BenchmarkResponse {
            margin_percent: settings.benchmark_margin_percent,
            amount: format_exact(evaluation.benchmark),
            display: format_amount(evaluation.benchmark),
        },
        summary: evaluation.summary,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// GET `/breakdown/export` - Download the breakdown table as CSV.
async fn export_breakdown(
    State(state): State<AppState>,
    CalculatorInput(input): CalculatorInput,
) -> Result<impl IntoResponse, ApiError> {
    let settings = &state.settings;
    let evaluation = evaluate(settings, &input)?;
    let csv = evaluation.export(settings).map_err(|e| {
        error!(error = %e, "Failed to export breakdown");
        ApiError::from(e)
    })?;

    info!(filename = %csv.filename, bytes = csv.body.len(), "Exported breakdown");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", csv.content_type)),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", csv.filename),
            ),
        ],
        csv.body,
    ))
}
