//! Budget data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a budget category.
///
/// Determines the variance direction: under budget is favourable for
/// expenses, over budget is favourable for revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Revenue category (e.g. childcare fees).
    Revenue,
    /// Expense category (e.g. wages, rent).
    Expense,
}

/// A caller-supplied budget figure for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Month label matching the report header (e.g. "31 Aug 25").
    pub label: String,
    /// Budgeted amount.
    pub amount: Decimal,
}

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Favourable variance (under budget for expenses, over target for revenue).
    Favorable,
    /// Unfavourable variance (over budget for expenses, under target for revenue).
    Unfavorable,
    /// On budget (no variance).
    OnBudget,
}

/// Budget vs actual for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyVariance {
    /// Month label.
    pub label: String,
    /// Period-end date derived from the label, when well-formed.
    pub period_end: Option<NaiveDate>,
    /// Budgeted amount; zero when no figure was supplied for the month.
    pub budgeted: Decimal,
    /// Actual amount from the P&L report.
    pub actual: Decimal,
    /// Variance amount, signed so that positive is favourable.
    pub variance: Decimal,
    /// Variance as a percentage of budget; zero when budget is zero.
    pub variance_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Budget vs actual report for one category over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetVsActualReport {
    /// Generic category name.
    pub category: String,
    /// Category classification.
    pub kind: CategoryKind,
    /// Per-month variance lines, in report header order.
    pub lines: Vec<MonthlyVariance>,
    /// Summary totals.
    pub summary: BudgetVsActualSummary,
}

/// Budget vs actual summary totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetVsActualSummary {
    /// Total budgeted amount.
    pub total_budgeted: Decimal,
    /// Total actual amount.
    pub total_actual: Decimal,
    /// Total variance.
    pub total_variance: Decimal,
    /// Overall variance status.
    pub status: VarianceStatus,
}
