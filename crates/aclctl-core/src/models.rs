// Rust guideline compliant 2026-10-17

//! Core data models for ACL tokens and policies.
//!
//! Field names follow the remote ACL API's wire format (`PascalCase`,
//! `AccessorID`, `SecretID`).

use crate::error::BoxError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of ACL record an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// An access-rule document.
    Policy,
    /// A named set of policies.
    Role,
    /// A bearer credential, identified by its accessor ID.
    Token,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Policy => "policy",
            ResourceKind::Role => "role",
            ResourceKind::Token => "token",
        };
        f.write_str(name)
    }
}

/// A token's reference to a policy, either by ID or by name.
///
/// Exactly one side is normally set; the remote system resolves names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLink {
    /// Canonical policy ID.
    #[serde(rename = "ID", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Policy name.
    #[serde(rename = "Name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl PolicyLink {
    /// Creates a link that references a policy by its canonical ID.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Creates a link that references a policy by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }
}

/// One entry of the policy listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyListEntry {
    /// Canonical policy ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Unique policy name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Datacenters the policy is restricted to; empty means all.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub datacenters: Vec<String>,
    #[serde(default, with = "base64_bytes")]
    pub hash: Vec<u8>,
    #[serde(default)]
    pub create_index: u64,
    #[serde(default)]
    pub modify_index: u64,
}

/// Request body for creating a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewToken {
    /// Free-form human description.
    #[serde(default)]
    pub description: String,
    /// Policy links, in the order they were supplied.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub policies: Vec<PolicyLink>,
    /// Whether the token is local to the datacenter that created it.
    #[serde(default)]
    pub local: bool,
}

/// A token record as returned by the remote system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclToken {
    /// Public identifier of the token.
    #[serde(rename = "AccessorID")]
    pub accessor_id: String,
    /// Bearer secret.
    #[serde(rename = "SecretID")]
    pub secret_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub policies: Vec<PolicyLink>,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub create_time: Option<DateTime<FixedOffset>>,
    /// Content hash, base64 on the wire.
    #[serde(default, with = "base64_bytes")]
    pub hash: Vec<u8>,
    #[serde(default)]
    pub create_index: u64,
    #[serde(default)]
    pub modify_index: u64,
}

impl AclToken {
    /// Returns the content hash as lowercase hex.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        self.hash.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

/// Capability that creates tokens on the remote system.
pub trait TokenCreator {
    /// Creates a token and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns the transport, authorization or decoding failure unchanged.
    fn create_token(&self, token: &NewToken) -> std::result::Result<AclToken, BoxError>;
}

/// Decodes a list the API may send as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        // The API sends null for records that were never hashed.
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(value) => STANDARD.decode(value).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
