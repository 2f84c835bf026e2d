//! Tests for chart of accounts category resolution.

use std::collections::HashMap;
use std::str::FromStr;

use nido_shared::types::{AccountId, TenantId};

use super::overrides::overrides_for;
use super::resolve::resolve_account;

const SUNNYBANK: &str = "f2a4b1c8-3e51-4c2a-9d7e-8b06c5a1d940";
const HARBOURSIDE: &str = "91b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
const SUNNYBANK_FEES: &str = "7d05a53d-613d-4eb2-a2fc-dcb6adb80b80";

fn fallback_map() -> HashMap<String, AccountId> {
    HashMap::from([
        ("fee_revenue".to_string(), AccountId::new()),
        ("wages".to_string(), AccountId::new()),
        ("utilities".to_string(), AccountId::new()),
    ])
}

#[test]
fn test_override_wins_over_fallback() {
    let tenant = TenantId::from_str(SUNNYBANK).unwrap();
    let fallback = fallback_map();

    let resolved = resolve_account(tenant, "fee_revenue", &fallback).unwrap();

    assert_eq!(resolved, AccountId::from_str(SUNNYBANK_FEES).unwrap());
    assert_ne!(Some(&resolved), fallback.get("fee_revenue"));
}

#[test]
fn test_unknown_tenant_passes_fallback_through() {
    let tenant = TenantId::new();
    let fallback = fallback_map();

    let resolved = resolve_account(tenant, "wages", &fallback);

    assert_eq!(resolved.as_ref(), fallback.get("wages"));
}

#[test]
fn test_fallback_is_per_category() {
    // Harbourside overrides fee_revenue only; other categories fall back.
    let tenant = TenantId::from_str(HARBOURSIDE).unwrap();
    let fallback = fallback_map();

    let revenue = resolve_account(tenant, "fee_revenue", &fallback);
    let utilities = resolve_account(tenant, "utilities", &fallback);

    assert_ne!(revenue.as_ref(), fallback.get("fee_revenue"));
    assert_eq!(utilities.as_ref(), fallback.get("utilities"));
}

#[test]
fn test_unresolvable_category_is_none() {
    let tenant = TenantId::from_str(SUNNYBANK).unwrap();

    assert_eq!(
        resolve_account(tenant, "helicopter_maintenance", &HashMap::new()),
        None
    );
}

#[test]
fn test_overrides_table_lookup() {
    let tenant = TenantId::from_str(SUNNYBANK).unwrap();

    let table = overrides_for(tenant).unwrap();
    assert!(table.contains_key("fee_revenue"));

    assert!(overrides_for(TenantId::new()).is_none());
}
