//! Actuals extraction service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, instrument};

use nido_core::report::{monthly_actuals, MonthlyActual};
use nido_shared::types::{AccountId, TenantId};

use crate::client::ProfitAndLossSource;
use crate::error::XeroError;

/// Service extracting monthly actuals for a tenant's ledger accounts.
#[derive(Clone)]
pub struct ActualsService {
    source: Arc<dyn ProfitAndLossSource>,
}

impl ActualsService {
    /// Creates the service over a P&L source.
    #[must_use]
    pub fn new(source: Arc<dyn ProfitAndLossSource>) -> Self {
        Self { source }
    }

    /// Fetches the tenant's P&L report and extracts the monthly series for
    /// one account.
    ///
    /// Failures propagate to the caller; there is no retry and no fallback
    /// data.
    #[instrument(skip(self), fields(%tenant, %account))]
    pub async fn monthly_actuals(
        &self,
        tenant: TenantId,
        account: AccountId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<MonthlyActual>, XeroError> {
        let report = match self.source.profit_and_loss(tenant, from, to).await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Failed to fetch P&L report");
                return Err(e);
            }
        };

        let series = monthly_actuals(&report, account);
        debug!(months = series.len(), "Extracted monthly actuals");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use nido_core::report::{Cell, CellAttribute, Report, ReportRow};

    const ACCOUNT: &str = "7d05a53d-613d-4eb2-a2fc-dcb6adb80b80";

    struct StubSource {
        report: Report,
    }

    #[async_trait::async_trait]
    impl ProfitAndLossSource for StubSource {
        async fn profit_and_loss(
            &self,
            _tenant: TenantId,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Report, XeroError> {
            Ok(self.report.clone())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl ProfitAndLossSource for FailingSource {
        async fn profit_and_loss(
            &self,
            _tenant: TenantId,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Report, XeroError> {
            Err(XeroError::Api {
                status: 503,
                body: "upstream unavailable".to_string(),
            })
        }
    }

    fn cell(value: &str) -> Cell {
        Cell {
            value: Some(value.to_string()),
            attributes: vec![],
        }
    }

    fn stub_report() -> Report {
        Report {
            report_id: Some("ProfitAndLoss".to_string()),
            report_name: None,
            report_type: None,
            report_titles: vec![],
            report_date: None,
            updated_date_utc: None,
            rows: vec![
                ReportRow::Header {
                    cells: vec![cell(""), cell("31 Jul 25"), cell("31 Aug 25")],
                },
                ReportRow::Section {
                    title: Some("Income".to_string()),
                    rows: vec![ReportRow::Row {
                        cells: vec![
                            Cell {
                                value: Some("Childcare Fees".to_string()),
                                attributes: vec![CellAttribute {
                                    id: "account".to_string(),
                                    value: ACCOUNT.to_string(),
                                }],
                            },
                            cell("52,310.00"),
                            cell("54,891.25"),
                        ],
                    }],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_extracts_series_from_source() {
        let service = ActualsService::new(Arc::new(StubSource {
            report: stub_report(),
        }));
        let account = AccountId::from_uuid(Uuid::parse_str(ACCOUNT).unwrap());

        let series = service
            .monthly_actuals(
                TenantId::new(),
                account,
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].amount, dec!(52310.00));
        assert_eq!(series[1].amount, dec!(54891.25));
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let service = ActualsService::new(Arc::new(FailingSource));

        let result = service
            .monthly_actuals(
                TenantId::new(),
                AccountId::new(),
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            )
            .await;

        assert!(matches!(
            result,
            Err(XeroError::Api { status: 503, .. })
        ));
    }
}
