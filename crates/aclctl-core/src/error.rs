// Rust guideline compliant 2026-10-17

//! Error types for the aclctl core library.

use crate::models::ResourceKind;
use thiserror::Error;

/// Result type alias for aclctl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Type-erased error produced by an external capability (HTTP client, fake).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for aclctl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Caller-level misuse, such as an empty prefix.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No identifier of the given kind starts with the prefix.
    #[error("No such {kind} ID with prefix: {prefix}")]
    NotFound {
        /// Kind of identifier that was searched.
        kind: ResourceKind,
        /// The prefix as supplied by the caller.
        prefix: String,
    },

    /// Two or more identifiers start with the prefix and none equals it.
    #[error(
        "Partial {kind} ID {prefix} is not unique: matches {} entries, please supply more characters",
        .matches.len()
    )]
    AmbiguousPrefix {
        /// Kind of identifier that was searched.
        kind: ResourceKind,
        /// The prefix as supplied by the caller.
        prefix: String,
        /// Every conflicting identifier, sorted.
        matches: Vec<String>,
    },

    /// The remote capability failed; the cause is kept untouched.
    #[error("Upstream {kind} request failed: {source}")]
    Upstream {
        /// Kind of resource the request was about.
        kind: ResourceKind,
        /// Underlying transport, authorization or decoding failure.
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Returns the number of conflicting matches for ambiguity errors.
    #[must_use]
    pub fn match_count(&self) -> Option<usize> {
        match self {
            Error::AmbiguousPrefix { matches, .. } => Some(matches.len()),
            _ => None,
        }
    }
}
