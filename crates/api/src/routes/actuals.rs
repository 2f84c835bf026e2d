//! Actuals and budget-vs-actual routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use nido_core::budget::{BudgetService, CategoryKind, MonthlyBudget};
use nido_core::chart::{resolve_account, CategoryMap};
use nido_shared::AppError;
use nido_shared::types::{AccountId, TenantId};
use nido_xero::XeroError;

/// Creates the actuals routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/centres/{tenant_id}/actuals", get(get_actuals))
        .route(
            "/centres/{tenant_id}/reports/budget-vs-actual",
            post(budget_vs_actual),
        )
}

/// Query parameters for the actuals endpoint.
#[derive(Debug, Deserialize)]
pub struct ActualsQuery {
    /// Generic category name to resolve (e.g. "fee_revenue").
    pub category: String,
    /// Fallback account GUID used when the tenant has no override for the category.
    pub account: Option<Uuid>,
    /// Start date of the report range.
    pub from: NaiveDate,
    /// End date of the report range.
    pub to: NaiveDate,
}

/// Request body for the budget-vs-actual report.
#[derive(Debug, Deserialize)]
pub struct BudgetVsActualRequest {
    /// Generic category name to resolve.
    pub category: String,
    /// Category classification (revenue or expense).
    pub kind: CategoryKind,
    /// Fallback account GUID used when the tenant has no override for the category.
    pub account: Option<Uuid>,
    /// Start date of the report range.
    pub from: NaiveDate,
    /// End date of the report range.
    pub to: NaiveDate,
    /// Monthly budget figures, keyed by report header label.
    #[serde(default)]
    pub budgets: Vec<MonthlyBudget>,
}

/// GET `/centres/{tenant_id}/actuals` - Monthly actuals for a category.
async fn get_actuals(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Query(query): Query<ActualsQuery>,
) -> impl IntoResponse {
    let tenant = TenantId::from_uuid(tenant_id);

    let Some(centre) = state.centres.find(tenant) else {
        return unknown_centre(tenant);
    };

    let Some(account) = resolve(tenant, &query.category, query.account) else {
        return unknown_category(&query.category);
    };

    match state
        .actuals
        .monthly_actuals(tenant, account, query.from, query.to)
        .await
    {
        Ok(months) => {
            info!(
                centre = %centre.code,
                category = %query.category,
                months = months.len(),
                "Extracted actuals"
            );
            Json(json!({
                "tenant_id": tenant,
                "centre": centre.code,
                "category": query.category,
                "account_id": account,
                "months": months
            }))
            .into_response()
        }
        Err(e) => upstream_error(&e),
    }
}

/// POST `/centres/{tenant_id}/reports/budget-vs-actual` - Variance report.
async fn budget_vs_actual(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(payload): Json<BudgetVsActualRequest>,
) -> impl IntoResponse {
    let tenant = TenantId::from_uuid(tenant_id);

    let Some(centre) = state.centres.find(tenant) else {
        return unknown_centre(tenant);
    };

    let Some(account) = resolve(tenant, &payload.category, payload.account) else {
        return unknown_category(&payload.category);
    };

    match state
        .actuals
        .monthly_actuals(tenant, account, payload.from, payload.to)
        .await
    {
        Ok(actuals) => {
            let report = BudgetService::budget_vs_actual(
                &payload.category,
                payload.kind,
                &payload.budgets,
                &actuals,
            );
            info!(
                centre = %centre.code,
                category = %payload.category,
                lines = report.lines.len(),
                "Built budget vs actual report"
            );
            Json(json!({
                "tenant_id": tenant,
                "centre": centre.code,
                "report": report
            }))
            .into_response()
        }
        Err(e) => upstream_error(&e),
    }
}

/// Resolves a category against tenant overrides, falling back to the
/// caller-supplied account when given.
fn resolve(tenant: TenantId, category: &str, fallback: Option<Uuid>) -> Option<AccountId> {
    let fallback_map: CategoryMap = fallback
        .map(|account| CategoryMap::from([(category.to_string(), AccountId::from_uuid(account))]))
        .unwrap_or_default();

    resolve_account(tenant, category, &fallback_map)
}

fn unknown_centre(tenant: TenantId) -> axum::response::Response {
    error_response(&AppError::NotFound(format!(
        "no centre is registered for tenant {tenant}"
    )))
}

fn unknown_category(category: &str) -> axum::response::Response {
    error_response(&AppError::Validation(format!(
        "category '{category}' has no override for this tenant and no fallback account was supplied"
    )))
}

fn upstream_error(e: &XeroError) -> axum::response::Response {
    match e {
        XeroError::Api { status, body } => {
            error!(status = *status, body = %body, "Xero API request failed");
        }
        XeroError::Decode { body, .. } | XeroError::EmptyResponse { body } => {
            error!(error = %e, body = %body, "Xero response could not be used");
        }
        XeroError::Transport(_) => {
            error!(error = %e, "Xero request failed in transport");
        }
    }

    error_response(&AppError::Upstream(
        "failed to fetch the Profit and Loss report from Xero".to_string(),
    ))
}

fn error_response(err: &AppError) -> axum::response::Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}
