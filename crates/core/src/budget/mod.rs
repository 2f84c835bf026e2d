//! Budget vs actual variance analysis.

pub mod service;
pub mod types;
pub mod variance;


pub use service::BudgetService;
pub use types::{
    BudgetVsActualReport, BudgetVsActualSummary, CategoryKind, MonthlyBudget, MonthlyVariance,
    VarianceStatus,
};
pub use variance::Variance;
