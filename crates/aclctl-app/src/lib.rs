// Rust guideline compliant 2026-10-17

//! Shared application services for aclctl.
//!
//! This crate provides the non-CLI-specific parts of token creation:
//! policy ID resolution, building and submitting the create request, and
//! standardized error envelopes.

pub mod error;
pub mod ids;
pub mod response;
pub mod token;

pub use error::{AppError, ErrorCode, Result};
pub use ids::resolve_policy_id;
pub use response::ErrorEnvelope;
pub use token::{build_new_token, create_token, CreateTokenOptions};
