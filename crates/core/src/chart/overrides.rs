//! Static per-tenant chart of accounts override tables.
//!
//! Each table maps generic category names to the account GUIDs a centre's
//! Xero organisation actually uses. The tables are maintained by hand and
//! must be updated whenever a centre's chart of accounts changes in Xero.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use uuid::uuid;

use nido_shared::types::{AccountId, TenantId};

/// Sunnybank Early Learning.
const SUNNYBANK: TenantId = TenantId(uuid!("f2a4b1c8-3e51-4c2a-9d7e-8b06c5a1d940"));
/// Westgrove Childcare Centre.
const WESTGROVE: TenantId = TenantId(uuid!("0c9d8e7f-6a5b-4c3d-2e1f-a0b9c8d7e6f5"));
/// Harbourside Kids.
const HARBOURSIDE: TenantId = TenantId(uuid!("91b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d"));

static CHART_OVERRIDES: Lazy<HashMap<TenantId, HashMap<&'static str, AccountId>>> =
    Lazy::new(|| {
        HashMap::from([
            (
                SUNNYBANK,
                HashMap::from([
                    (
                        "fee_revenue",
                        AccountId(uuid!("7d05a53d-613d-4eb2-a2fc-dcb6adb80b80")),
                    ),
                    (
                        "wages",
                        AccountId(uuid!("453b2751-d701-491e-b097-0769359dc43b")),
                    ),
                    (
                        "rent",
                        AccountId(uuid!("2f1c0b9a-8d7e-4f6a-b5c4-d3e2f1a0b9c8")),
                    ),
                ]),
            ),
            (
                WESTGROVE,
                HashMap::from([
                    (
                        "fee_revenue",
                        AccountId(uuid!("a1b2c3d4-0f1e-4d2c-3b4a-596877869504")),
                    ),
                    (
                        "wages",
                        AccountId(uuid!("b2c3d4e5-1a2b-4c3d-4e5f-6a7b8c9d0e1f")),
                    ),
                    (
                        "consumables",
                        AccountId(uuid!("c3d4e5f6-2b3c-4d4e-5f6a-7b8c9d0e1f2a")),
                    ),
                ]),
            ),
            (
                HARBOURSIDE,
                // Harbourside only diverges on revenue; everything else
                // follows the caller-supplied mapping.
                HashMap::from([(
                    "fee_revenue",
                    AccountId(uuid!("d4e5f6a7-3c4d-4e5f-6a7b-8c9d0e1f2a3b")),
                )]),
            ),
        ])
    });

/// Returns the override table for a tenant, if one is maintained.
#[must_use]
pub fn overrides_for(tenant: TenantId) -> Option<&'static HashMap<&'static str, AccountId>> {
    CHART_OVERRIDES.get(&tenant)
}
