//! # fze-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `PORT` (default 8080), prices
//! against `CATALOG_PATH` (default: built-in catalog) with the fee schedule
//! at `FEE_SCHEDULE_PATH` (default: built-in fees).

use fze_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let state = AppState::bootstrap(&config).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    let app = fze_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Formation estimator API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
