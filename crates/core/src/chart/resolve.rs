//! Category-to-account resolution.

use std::collections::HashMap;

use nido_shared::types::{AccountId, TenantId};

use super::overrides::overrides_for;

/// Caller-supplied mapping of generic category names to account GUIDs.
pub type CategoryMap = HashMap<String, AccountId>;

/// Resolves a generic category name to a tenant's account GUID.
///
/// A tenant override for the category always wins; otherwise the
/// caller-supplied mapping passes through unchanged. Fallback is per
/// category, so a tenant with an override table still falls back for
/// categories the table does not name.
#[must_use]
pub fn resolve_account(
    tenant: TenantId,
    category: &str,
    fallback: &CategoryMap,
) -> Option<AccountId> {
    overrides_for(tenant)
        .and_then(|table| table.get(category).copied())
        .or_else(|| fallback.get(category).copied())
}
