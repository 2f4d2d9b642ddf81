// Rust guideline compliant 2026-10-17

//! Error handling for aclctl application services.

use aclctl_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No identifier matched the given prefix.
    NotFound,
    /// The given prefix matched several identifiers.
    AmbiguousPrefix,
    /// The remote system failed or rejected the request.
    UpstreamError,
    /// Input validation failed.
    ValidationError,
    /// Configuration could not be loaded or is invalid.
    ConfigError,
    /// IO failure while reading local files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Fallback for errors raised outside the application layer.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The command was invoked without the inputs it needs.
    #[error("{0}")]
    Validation(String),

    /// A policy ID prefix could not be resolved.
    #[error("Error resolving policy ID {prefix}: {source}")]
    PolicyResolution {
        /// The prefix exactly as supplied.
        prefix: String,
        /// Why resolution failed.
        #[source]
        source: CoreError,
    },

    /// The create call failed.
    #[error("Failed to create new token: {0}")]
    CreateFailed(#[source] CoreError),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns the core error this application error wraps, if any.
    #[must_use]
    pub fn core(&self) -> Option<&CoreError> {
        match self {
            AppError::Validation(_) => None,
            AppError::PolicyResolution { source, .. } => Some(source),
            AppError::CreateFailed(core) | AppError::Core(core) => Some(core),
        }
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self.core() {
            None => ErrorCode::ValidationError,
            Some(core) => match core {
                CoreError::NotFound { .. } => ErrorCode::NotFound,
                CoreError::AmbiguousPrefix { .. } => ErrorCode::AmbiguousPrefix,
                CoreError::Upstream { .. } => ErrorCode::UpstreamError,
                CoreError::Validation(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self.core()? {
            CoreError::AmbiguousPrefix {
                kind,
                prefix,
                matches,
            } => Some(serde_json::json!({
                "kind": kind,
                "prefix": prefix,
                "matches": matches,
                "count": matches.len(),
            })),
            CoreError::NotFound { kind, prefix } => Some(serde_json::json!({
                "kind": kind,
                "prefix": prefix,
            })),
            CoreError::Upstream { kind, .. } => Some(serde_json::json!({
                "kind": kind,
            })),
            _ => None,
        }
    }
}
