//! Xero REST client and actuals extraction service.
//!
//! This crate owns the network edge: fetching Profit and Loss reports from
//! the Xero API and composing the pure extraction logic from `nido-core`
//! into an actuals service. The fetch seam is the [`ProfitAndLossSource`]
//! trait so the service is testable without the network.

pub mod actuals;
pub mod client;
pub mod error;

pub use actuals::ActualsService;
pub use client::{ProfitAndLossSource, XeroClient};
pub use error::XeroError;
