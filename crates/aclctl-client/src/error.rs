// Rust guideline compliant 2026-10-17

//! ACL API client error types.

use thiserror::Error;

/// Errors from ACL API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API returned a non-2xx status.
    #[error("Unexpected response code: {status} ({body})")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client could not be configured.
    #[error("client configuration error: {0}")]
    Config(String),

    /// A local TLS or token file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http { source, .. } if source.is_timeout())
    }
}
