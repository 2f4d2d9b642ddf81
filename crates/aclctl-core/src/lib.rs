// Rust guideline compliant 2026-10-17

//! aclctl Core Library
//!
//! This crate provides the foundational components for ACL token tooling:
//! - Data models (tokens, policy links, policy listing entries)
//! - Prefix resolution of partial identifiers
//! - Capability traits for the remote ACL API
//! - Layered configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod identity;
pub mod models;

pub use config::{Config, ConfigOverrides, OutputFormat};
pub use error::{BoxError, Error, Result};
pub use identity::{resolve_in, resolve_prefix, IdLister};
pub use models::{AclToken, NewToken, PolicyLink, PolicyListEntry, ResourceKind, TokenCreator};
