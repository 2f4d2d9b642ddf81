// Rust guideline compliant 2026-10-17

//! Token creation service.
//!
//! Turns the options collected from the command line into a create request,
//! resolving partial policy IDs on the way, and submits it.

use crate::error::{AppError, Result};
use crate::ids::resolve_policy_id;
use aclctl_core::{AclToken, Error as CoreError, IdLister, NewToken, PolicyLink, ResourceKind, TokenCreator};

/// Options for creating a token, built once from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTokenOptions {
    /// Free-form description of the token.
    pub description: String,
    /// Create a datacenter-local token.
    pub local: bool,
    /// Full or partial policy IDs, in flag order.
    pub policy_ids: Vec<String>,
    /// Policy names, in flag order.
    pub policy_names: Vec<String>,
}

impl CreateTokenOptions {
    /// Checks that at least one policy was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when neither IDs nor names are given.
    pub fn validate(&self) -> Result<()> {
        if self.policy_ids.is_empty() && self.policy_names.is_empty() {
            return Err(AppError::Validation(
                "Cannot create a token without specifying -policy-name or -policy-id at least once"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds the create request, resolving every policy ID.
///
/// Name links come first and are left for the remote system to resolve.
/// ID links follow in the order given. Duplicate links are kept as supplied.
///
/// # Errors
///
/// Returns an error if:
/// - No policy ID or name was supplied (the lister is not called)
/// - A policy ID cannot be resolved
pub fn build_new_token<L>(options: &CreateTokenOptions, lister: &L) -> Result<NewToken>
where
    L: IdLister + ?Sized,
{
    options.validate()?;

    let mut policies: Vec<PolicyLink> = options
        .policy_names
        .iter()
        .map(PolicyLink::by_name)
        .collect();

    for partial in &options.policy_ids {
        let id = resolve_policy_id(partial, lister).map_err(|err| match err {
            AppError::Core(source) => AppError::PolicyResolution {
                prefix: partial.clone(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(partial = %partial, id = %id, "resolved policy ID");
        policies.push(PolicyLink::by_id(id));
    }

    Ok(NewToken {
        description: options.description.clone(),
        policies,
        local: options.local,
    })
}

/// Resolves policy IDs and creates the token with a single create call.
///
/// # Errors
///
/// Returns an error if the request cannot be built (see [`build_new_token`])
/// or the create call fails.
pub fn create_token<C>(options: &CreateTokenOptions, client: &C) -> Result<AclToken>
where
    C: IdLister + TokenCreator + ?Sized,
{
    let request = build_new_token(options, client)?;
    tracing::info!(policies = request.policies.len(), local = request.local, "creating token");

    client.create_token(&request).map_err(|source| {
        AppError::CreateFailed(CoreError::Upstream {
            kind: ResourceKind::Token,
            source,
        })
    })
}
