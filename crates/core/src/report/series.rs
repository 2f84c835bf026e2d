//! Monthly actuals extraction from a flattened P&L report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nido_shared::types::AccountId;

use super::flatten::flatten_rows;
use super::parse::{parse_money, period_end_from_label};
use super::types::{Report, ReportRow};

/// Attribute ID Xero uses to tag a cell with its ledger account.
const ACCOUNT_ATTRIBUTE: &str = "account";

/// One month's actual amount for a ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActual {
    /// Month label as rendered in the report header (e.g. "31 Aug 25").
    pub label: String,
    /// Period-end date derived from the label, when the label is well-formed.
    pub period_end: Option<NaiveDate>,
    /// Actual amount for the month; zero when the report carries no value.
    pub amount: Decimal,
}

/// Extracts the chronological monthly series for one account from a report.
///
/// The series has one entry per month label in the report's header row, in
/// header order. Months without a matching cell, and accounts with no
/// matching row at all, are zero-filled.
#[must_use]
pub fn monthly_actuals(report: &Report, account: AccountId) -> Vec<MonthlyActual> {
    let flat = flatten_rows(&report.rows);
    let labels = month_labels(&flat);
    let account_row = find_account_row(&flat, account);

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            // Cell 0 is the row label, so month i lives in cell i + 1.
            let amount = account_row
                .and_then(|row| row.cells().get(i + 1))
                .map_or(Decimal::ZERO, |cell| parse_money(cell.value.as_deref()));

            MonthlyActual {
                period_end: period_end_from_label(&label),
                label,
                amount,
            }
        })
        .collect()
}

/// Month labels from the report's header row, in column order.
fn month_labels(flat: &[&ReportRow]) -> Vec<String> {
    flat.iter()
        .find_map(|row| match row {
            ReportRow::Header { cells } => Some(cells),
            _ => None,
        })
        .map(|cells| {
            cells
                .iter()
                .skip(1)
                .map(|cell| cell.value.clone().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// Finds the row whose first cell is tagged with the given account ID.
fn find_account_row<'a>(flat: &[&'a ReportRow], account: AccountId) -> Option<&'a ReportRow> {
    flat.iter()
        .find(|row| {
            row.cells()
                .first()
                .and_then(|cell| cell.attribute(ACCOUNT_ATTRIBUTE))
                .and_then(|value| Uuid::parse_str(value).ok())
                .is_some_and(|id| id == account.into_inner())
        })
        .copied()
}
