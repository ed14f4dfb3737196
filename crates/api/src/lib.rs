//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The calculator page (side panel inputs, results, breakdown table)
//! - JSON breakdown and CSV export endpoints
//! - The calculator input extractor
//! - Error responses

pub mod error;
pub mod extractors;
pub mod html;
pub mod routes;

use axum::Router;
use axum::routing::get;
use livingcost_core::CalculatorSettings;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stipend rates, currency pair and defaults. Read-only after startup.
    pub settings: Arc<CalculatorSettings>,
}

impl AppState {
    /// Wraps settings for sharing between handlers.
    #[must_use]
    pub fn new(settings: CalculatorSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::show_calculator))
        .nest("/api/v1", routes::api_routes())
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
