//! HTTP API layer with Axum routes.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nido_shared::config::CentreConfig;
use nido_shared::types::TenantId;
use nido_xero::ActualsService;

/// Registered childcare centres, looked up by Xero tenant ID.
pub struct CentreRegistry {
    centres: Vec<CentreConfig>,
}

impl CentreRegistry {
    /// Creates a registry from configured centres.
    #[must_use]
    pub fn new(centres: Vec<CentreConfig>) -> Self {
        Self { centres }
    }

    /// All registered centres, in configuration order.
    #[must_use]
    pub fn all(&self) -> &[CentreConfig] {
        &self.centres
    }

    /// Finds a centre by its Xero tenant ID.
    #[must_use]
    pub fn find(&self, tenant: TenantId) -> Option<&CentreConfig> {
        self.centres.iter().find(|c| c.tenant_id == tenant)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Actuals extraction service.
    pub actuals: ActualsService,
    /// Centre registry.
    pub centres: Arc<CentreRegistry>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
