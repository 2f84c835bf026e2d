//! Core business logic for Nido.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and calculations live here.
//!
//! # Modules
//!
//! - `report` - Xero P&L report schema, flattening, and monthly series extraction
//! - `chart` - Per-tenant chart of accounts category resolution
//! - `budget` - Budget vs actual variance analysis

pub mod budget;
pub mod chart;
pub mod report;
