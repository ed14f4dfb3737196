//! Livingcost Server
//!
//! Main entry point for the living expense calculator.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livingcost_api::{AppState, create_router};
use livingcost_core::CalculatorSettings;
use livingcost_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livingcost=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate()?;
    let settings =
        CalculatorSettings::from_config(&config).context("Invalid calculator defaults")?;

    info!(
        applicant_monthly = %settings.rates.applicant_monthly,
        spouse_monthly = %settings.rates.spouse_monthly,
        child_monthly = %settings.rates.child_monthly,
        currencies = %settings.currencies,
        "Stipend rates configured"
    );

    // Create router
    let app = create_router(AppState::new(settings));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
