//! Budget variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CategoryKind, VarianceStatus};

/// Result of a single variance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variance {
    /// Variance amount, signed so that positive is favourable.
    pub amount: Decimal,
    /// Variance as a percentage of budget, rounded to 2 decimal places.
    pub percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

impl Variance {
    /// Calculates variance for a category kind.
    ///
    /// For expenses: variance = budgeted - actual, under budget is favourable.
    /// For revenue: variance = actual - budgeted, over budget is favourable.
    /// A zero budget yields a zero percentage (no division).
    #[must_use]
    pub fn calculate(kind: CategoryKind, budgeted: Decimal, actual: Decimal) -> Self {
        let amount = match kind {
            CategoryKind::Expense => budgeted - actual,
            CategoryKind::Revenue => actual - budgeted,
        };

        let percent = if budgeted.is_zero() {
            Decimal::ZERO
        } else {
            (amount / budgeted * Decimal::ONE_HUNDRED).round_dp(2)
        };

        let status = if amount.is_zero() {
            VarianceStatus::OnBudget
        } else if amount.is_sign_positive() {
            VarianceStatus::Favorable
        } else {
            VarianceStatus::Unfavorable
        };

        Self {
            amount,
            percent,
            status,
        }
    }
}
