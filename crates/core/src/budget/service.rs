//! Budget vs actual report assembly.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::report::MonthlyActual;

use super::types::{
    BudgetVsActualReport, BudgetVsActualSummary, CategoryKind, MonthlyBudget, MonthlyVariance,
};
use super::variance::Variance;

/// Service assembling budget vs actual reports.
pub struct BudgetService;

impl BudgetService {
    /// Joins caller-supplied budget figures against extracted actuals.
    ///
    /// Lines follow the actuals series (one per report header month, in
    /// order); months without a supplied budget figure are treated as
    /// budgeted at zero. Budget figures for months outside the series are
    /// ignored.
    #[must_use]
    pub fn budget_vs_actual(
        category: &str,
        kind: CategoryKind,
        budgets: &[MonthlyBudget],
        actuals: &[MonthlyActual],
    ) -> BudgetVsActualReport {
        let budget_by_label: HashMap<&str, Decimal> = budgets
            .iter()
            .map(|b| (b.label.as_str(), b.amount))
            .collect();

        let lines: Vec<MonthlyVariance> = actuals
            .iter()
            .map(|month| {
                let budgeted = budget_by_label
                    .get(month.label.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let variance = Variance::calculate(kind, budgeted, month.amount);

                MonthlyVariance {
                    label: month.label.clone(),
                    period_end: month.period_end,
                    budgeted,
                    actual: month.amount,
                    variance: variance.amount,
                    variance_percent: variance.percent,
                    status: variance.status,
                }
            })
            .collect();

        let total_budgeted: Decimal = lines.iter().map(|l| l.budgeted).sum();
        let total_actual: Decimal = lines.iter().map(|l| l.actual).sum();
        let total = Variance::calculate(kind, total_budgeted, total_actual);

        BudgetVsActualReport {
            category: category.to_string(),
            kind,
            lines,
            summary: BudgetVsActualSummary {
                total_budgeted,
                total_actual,
                total_variance: total.amount,
                status: total.status,
            },
        }
    }
}
