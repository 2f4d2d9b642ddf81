// Rust guideline compliant 2026-10-17

//! Blocking HTTP client for the ACL endpoints.
//!
//! Each call issues exactly one request. Retries are not built in; callers
//! bound the wait through `timeout_secs`.

use crate::error::ClientError;
use aclctl_core::{
    AclToken, BoxError, Config, IdLister, NewToken, PolicyListEntry, ResourceKind, TokenCreator,
};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Certificate, Identity};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Header carrying the ACL token.
pub const TOKEN_HEADER: &str = "X-Consul-Token";

const POLICIES_PATH: &str = "v1/acl/policies";
const ROLES_PATH: &str = "v1/acl/roles";
const TOKENS_PATH: &str = "v1/acl/tokens";
const TOKEN_PATH: &str = "v1/acl/token";

#[derive(Debug, Deserialize)]
struct RoleListEntry {
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct TokenListEntry {
    #[serde(rename = "AccessorID")]
    accessor_id: String,
}

/// HTTP client for the remote ACL API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
    datacenter: Option<String>,
    stale: bool,
}

impl HttpClient {
    /// Creates a client from the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address is not a valid HTTP(S) URL
    /// - The token file, CA files or client identity cannot be read
    /// - The TLS settings are rejected by the HTTP stack
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let base = config
            .base_url()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        let base_url = Url::parse(&format!("{}/", base))
            .map_err(|e| ClientError::Config(format!("invalid address {}: {}", base, e)))?;
        let token = config
            .effective_token()
            .map_err(|e| ClientError::Config(format!("failed to read token file: {}", e)))?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.ssl_verify);

        for cert in load_ca_certificates(config)? {
            builder = builder.add_root_certificate(cert);
        }

        if let (Some(cert), Some(key)) = (&config.client_cert, &config.client_key) {
            builder = builder.identity(load_identity(cert, key)?);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %base_url, datacenter = ?config.datacenter, "ACL client ready");

        Ok(Self {
            client,
            base_url,
            token,
            datacenter: config.datacenter.clone(),
            stale: config.stale,
        })
    }

    /// Lists every policy known to the remote system.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// is not a policy list.
    pub fn list_policies(&self) -> Result<Vec<PolicyListEntry>, ClientError> {
        let url = self.endpoint(POLICIES_PATH, true)?;
        let entries: Option<Vec<PolicyListEntry>> = self.execute(self.client.get(url), POLICIES_PATH)?;
        Ok(entries.unwrap_or_default())
    }

    /// Lists the IDs of every role.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::list_policies`].
    pub fn list_role_ids(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(ROLES_PATH, true)?;
        let entries: Option<Vec<RoleListEntry>> = self.execute(self.client.get(url), ROLES_PATH)?;
        Ok(entries.unwrap_or_default().into_iter().map(|e| e.id).collect())
    }

    /// Lists the accessor IDs of every token.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::list_policies`].
    pub fn list_token_accessor_ids(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(TOKENS_PATH, true)?;
        let entries: Option<Vec<TokenListEntry>> = self.execute(self.client.get(url), TOKENS_PATH)?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.accessor_id)
            .collect())
    }

    /// Creates a token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or an
    /// undecodable response.
    pub fn create(&self, token: &NewToken) -> Result<AclToken, ClientError> {
        let url = self.endpoint(TOKEN_PATH, false)?;
        self.execute(self.client.put(url).json(token), TOKEN_PATH)
    }

    fn endpoint(&self, path: &str, read: bool) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {}: {}", path, e)))?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(dc) = &self.datacenter {
                query.append_pair("dc", dc);
            }
            if read && self.stale {
                query.append_key_only("stale");
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T, ClientError> {
        let endpoint = format!("/{}", path);
        let request = match &self.token {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        };

        let response = request.send().map_err(|source| {
            let err = ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            };
            tracing::warn!(endpoint = %endpoint, timeout = err.is_timeout(), "ACL request failed");
            err
        })?;

        let status = response.status();
        tracing::debug!(endpoint = %endpoint, status = status.as_u16(), "ACL API response");

        let body = response.text().map_err(|source| ClientError::Http {
            endpoint: endpoint.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode { endpoint, source })
    }
}

impl IdLister for HttpClient {
    fn list_ids(&self, kind: ResourceKind) -> Result<Vec<String>, BoxError> {
        let ids: Vec<String> = match kind {
            ResourceKind::Policy => self.list_policies()?.into_iter().map(|p| p.id).collect(),
            ResourceKind::Role => self.list_role_ids()?,
            ResourceKind::Token => self.list_token_accessor_ids()?,
        };
        Ok(ids)
    }
}

impl TokenCreator for HttpClient {
    fn create_token(&self, token: &NewToken) -> Result<AclToken, BoxError> {
        Ok(self.create(token)?)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ClientError> {
    std::fs::read(path).map_err(|source| ClientError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_certificate(path: &Path) -> Result<Certificate, ClientError> {
    let pem = read_file(path)?;
    Certificate::from_pem(&pem)
        .map_err(|e| ClientError::Config(format!("invalid CA certificate {}: {}", path.display(), e)))
}

fn load_ca_certificates(config: &Config) -> Result<Vec<Certificate>, ClientError> {
    let mut certs = Vec::new();

    if let Some(path) = &config.ca_file {
        certs.push(parse_certificate(path)?);
    }

    if let Some(dir) = &config.ca_path {
        let entries = std::fs::read_dir(dir).map_err(|source| ClientError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("pem") | Some("crt")
                )
            })
            .collect();
        paths.sort();
        for path in paths {
            certs.push(parse_certificate(&path)?);
        }
    }

    Ok(certs)
}

fn load_identity(cert: &Path, key: &Path) -> Result<Identity, ClientError> {
    let mut pem = read_file(cert)?;
    pem.push(b'\n');
    pem.extend(read_file(key)?);
    Identity::from_pem(&pem)
        .map_err(|e| ClientError::Config(format!("invalid client certificate or key: {}", e)))
}
