//! Xero REST API client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use nido_core::report::{Report, ReportResponse};
use nido_shared::config::XeroConfig;
use nido_shared::types::TenantId;

use crate::error::XeroError;

/// Source of Profit and Loss reports, keyed by tenant and date range.
///
/// The seam between the actuals service and the network; tests substitute
/// a stub implementation.
#[async_trait]
pub trait ProfitAndLossSource: Send + Sync {
    /// Fetches the monthly P&L report for a tenant over a date range.
    async fn profit_and_loss(
        &self,
        tenant: TenantId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Report, XeroError>;
}

/// Xero REST API client.
pub struct XeroClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl XeroClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &XeroConfig) -> Result<Self, XeroError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl ProfitAndLossSource for XeroClient {
    async fn profit_and_loss(
        &self,
        tenant: TenantId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Report, XeroError> {
        let url = format!("{}/api.xro/2.0/Reports/ProfitAndLoss", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("fromDate", from.to_string()),
                ("toDate", to.to_string()),
                ("paymentsOnly", "false".to_string()),
                ("standardLayout", "true".to_string()),
                ("timeframe", "MONTH".to_string()),
            ])
            .bearer_auth(&self.access_token)
            .header("xero-tenant-id", tenant.to_string())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(XeroError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ReportResponse = serde_json::from_str(&body).map_err(|source| {
            XeroError::Decode {
                source,
                body: body.clone(),
            }
        })?;

        parsed
            .reports
            .into_iter()
            .next()
            .ok_or(XeroError::EmptyResponse { body })
    }
}
