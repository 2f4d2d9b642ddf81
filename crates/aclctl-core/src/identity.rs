// Rust guideline compliant 2026-10-17

//! Resolution of partial identifiers to canonical identifiers.
//!
//! A user may type any prefix of an identifier. Resolution fetches the
//! current identifier universe through an [`IdLister`], prefers an exact
//! match, and otherwise requires the prefix to select exactly one element.

use crate::error::{BoxError, Error, Result};
use crate::models::ResourceKind;

/// Read-only capability that lists every identifier of a kind.
pub trait IdLister {
    /// Returns the current identifier universe for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the transport, authorization or decoding failure unchanged.
    fn list_ids(&self, kind: ResourceKind) -> std::result::Result<Vec<String>, BoxError>;
}

impl<F> IdLister for F
where
    F: Fn(ResourceKind) -> std::result::Result<Vec<String>, BoxError>,
{
    fn list_ids(&self, kind: ResourceKind) -> std::result::Result<Vec<String>, BoxError> {
        self(kind)
    }
}

/// Resolves a partial identifier by querying the lister once.
///
/// # Arguments
///
/// * `kind` - Kind of identifier being resolved
/// * `prefix` - Partial or full identifier
/// * `lister` - Source of the current identifier universe
///
/// # Returns
///
/// The canonical identifier.
///
/// # Errors
///
/// Returns an error if:
/// - The prefix is empty (the lister is not called)
/// - The lister fails
/// - No identifier starts with the prefix
/// - Several identifiers start with the prefix and none equals it
pub fn resolve_prefix<L>(kind: ResourceKind, prefix: &str, lister: &L) -> Result<String>
where
    L: IdLister + ?Sized,
{
    validate_prefix(kind, prefix)?;

    let universe = lister
        .list_ids(kind)
        .map_err(|source| Error::Upstream { kind, source })?;
    tracing::debug!(%kind, prefix, universe = universe.len(), "resolving partial ID");

    resolve_in(kind, prefix, &universe)
}

/// Resolves a partial identifier against an already-fetched universe.
///
/// # Errors
///
/// Returns an error if the prefix is empty, matches nothing, or is
/// ambiguous.
pub fn resolve_in<S: AsRef<str>>(kind: ResourceKind, prefix: &str, universe: &[S]) -> Result<String> {
    validate_prefix(kind, prefix)?;

    if universe.iter().any(|id| id.as_ref() == prefix) {
        return Ok(prefix.to_string());
    }

    let mut matches: Vec<String> = universe
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| id.starts_with(prefix))
        .map(str::to_string)
        .collect();
    matches.sort();
    matches.dedup();

    match matches.len() {
        0 => Err(Error::NotFound {
            kind,
            prefix: prefix.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousPrefix {
            kind,
            prefix: prefix.to_string(),
            matches,
        }),
    }
}

fn validate_prefix(kind: ResourceKind, prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::Validation(format!("{} ID prefix cannot be empty", kind)));
    }
    Ok(())
}
