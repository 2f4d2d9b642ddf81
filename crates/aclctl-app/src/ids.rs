// Rust guideline compliant 2026-10-17

//! Policy ID resolution helpers.

use crate::error::Result;
use aclctl_core::{identity, IdLister, ResourceKind};
use uuid::Uuid;

/// Name of the built-in management policy.
pub const GLOBAL_MANAGEMENT_POLICY_NAME: &str = "global-management";

/// Fixed ID of the built-in management policy.
pub const GLOBAL_MANAGEMENT_POLICY_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Resolves a partial policy ID to its canonical full ID.
///
/// The built-in management policy name and complete hyphenated UUIDs are
/// returned without a listing call. Anything else is resolved against the
/// current policy listing.
///
/// # Arguments
///
/// * `partial` - Partial or full policy ID
/// * `lister` - Source of the current policy IDs
///
/// # Returns
///
/// The canonical policy ID.
///
/// # Errors
///
/// Returns an error if the partial ID is empty, ambiguous, not found, or the
/// listing fails.
pub fn resolve_policy_id<L>(partial: &str, lister: &L) -> Result<String>
where
    L: IdLister + ?Sized,
{
    if partial == GLOBAL_MANAGEMENT_POLICY_NAME {
        return Ok(GLOBAL_MANAGEMENT_POLICY_ID.to_string());
    }

    if is_full_id(partial) {
        return Ok(partial.to_string());
    }

    Ok(identity::resolve_prefix(ResourceKind::Policy, partial, lister)?)
}

fn is_full_id(candidate: &str) -> bool {
    candidate.len() == 36 && Uuid::try_parse(candidate).is_ok()
}
