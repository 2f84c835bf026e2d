//! Nido API Server
//!
//! Main entry point for the Nido backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nido_api::{AppState, CentreRegistry, create_router};
use nido_shared::AppConfig;
use nido_xero::{ActualsService, XeroClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nido=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;
    info!(centres = config.centres.len(), "Configuration loaded");

    // Xero client and actuals service
    let client = XeroClient::new(&config.xero)?;
    let actuals = ActualsService::new(Arc::new(client));

    // Create application state
    let state = AppState {
        actuals,
        centres: Arc::new(CentreRegistry::new(config.centres.clone())),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
