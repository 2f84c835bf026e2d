//! Centre registry routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;
use nido_shared::types::TenantId;

/// One registered centre.
#[derive(Serialize)]
pub struct CentreResponse {
    /// Short centre code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Xero tenant ID.
    pub tenant_id: TenantId,
}

/// GET /centres - List the configured centre registry.
async fn list_centres(State(state): State<AppState>) -> Json<Vec<CentreResponse>> {
    let centres = state
        .centres
        .all()
        .iter()
        .map(|c| CentreResponse {
            code: c.code.clone(),
            name: c.name.clone(),
            tenant_id: c.tenant_id,
        })
        .collect();

    Json(centres)
}

/// Creates the centre routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/centres", get(list_centres))
}
