//! Chart of accounts category resolution.
//!
//! Callers name budget categories generically ("fee_revenue", "wages");
//! each tenant's Xero chart of accounts assigns those categories its own
//! account GUIDs. Resolution consults the per-tenant override table first
//! and falls back to the caller-supplied mapping.

pub mod overrides;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use overrides::overrides_for;
pub use resolve::{resolve_account, CategoryMap};
