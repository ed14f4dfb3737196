//! Calculator page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::error::ApiError;
use crate::extractors::CalculatorInput;
use crate::{AppState, html};
use livingcost_core::report::evaluate;

/// GET `/` - Render the calculator for the submitted inputs.
///
/// The form on the page submits on every change, so this handler is the
/// single place a new evaluation happens.
pub async fn show_calculator(
    State(state): State<AppState>,
    input: Result<CalculatorInput, ApiError>,
) -> Response {
    let settings = &state.settings;

    let input = match input {
        Ok(CalculatorInput(input)) => input,
        Err(err) => {
            return (err.status(), Html(html::render_error_page(settings, &err.0.to_string())))
                .into_response();
        }
    };

    match evaluate(settings, &input) {
        Ok(evaluation) => {
            debug!(
                duration_months = input.duration_months,
                child_count = input.child_count,
                margin_percent = input.margin_percent,
                total = %evaluation.breakdown.total.with_margin,
                "Rendered calculator"
            );
            (StatusCode::OK, Html(html::render_page(settings, &input, &evaluation))).into_response()
        }
        Err(err) => {
            let err = ApiError::from(err);
            (err.status(), Html(html::render_error_page(settings, &err.0.to_string())))
                .into_response()
        }
    }
}
