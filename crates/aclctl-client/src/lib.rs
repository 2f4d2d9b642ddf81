// Rust guideline compliant 2026-10-17

//! HTTP client for the remote ACL API.
//!
//! [`HttpClient`] implements the [`aclctl_core::IdLister`] and
//! [`aclctl_core::TokenCreator`] capabilities over blocking HTTP.

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::ClientError;
