// Rust guideline compliant 2026-10-17

//! Configuration management for aclctl.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable aligned fields with a policy table.
    #[default]
    Pretty,
    /// The plain `Key: value` layout, one policy per line.
    Plain,
    /// JSON output format.
    Json,
}

impl OutputFormat {
    /// Parses a format name as accepted by the environment and config file.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Some(OutputFormat::Pretty),
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Connection and presentation settings for aclctl.
///
/// Built once at startup and passed by reference; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Agent address, `host:port` or a full `http(s)://` URL.
    #[serde(default = "default_http_addr")]
    pub http_addr: String,

    /// ACL token sent with every request.
    #[serde(default)]
    pub token: Option<String>,

    /// File holding the ACL token; used only when `token` is unset.
    #[serde(default)]
    pub token_file: Option<PathBuf>,

    /// Use HTTPS for a bare `host:port` address.
    #[serde(default)]
    pub http_ssl: bool,

    /// Verify the server certificate.
    #[serde(default = "default_true")]
    pub ssl_verify: bool,

    /// PEM bundle of CA certificates.
    #[serde(default)]
    pub ca_file: Option<PathBuf>,

    /// Directory of PEM CA certificates.
    #[serde(default)]
    pub ca_path: Option<PathBuf>,

    /// Client certificate (PEM) for mutual TLS.
    #[serde(default)]
    pub client_cert: Option<PathBuf>,

    /// Client private key (PEM) for mutual TLS.
    #[serde(default)]
    pub client_key: Option<PathBuf>,

    /// Datacenter to query; the agent's own when unset.
    #[serde(default)]
    pub datacenter: Option<String>,

    /// Allow any server, not only the leader, to answer reads.
    #[serde(default)]
    pub stale: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Minimum level of diagnostic log events written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_http_addr() -> String {
    "127.0.0.1:8500".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            token: None,
            token_file: None,
            http_ssl: false,
            ssl_verify: true,
            ca_file: None,
            ca_path: None,
            client_cert: None,
            client_key: None,
            datacenter: None,
            stale: false,
            timeout_secs: default_timeout_secs(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub http_addr: Option<String>,
    pub token: Option<String>,
    pub token_file: Option<PathBuf>,
    pub ca_file: Option<PathBuf>,
    pub ca_path: Option<PathBuf>,
    pub client_cert: Option<PathBuf>,
    pub client_key: Option<PathBuf>,
    pub datacenter: Option<String>,
    pub stale: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from file, environment variables and overrides.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if one is given
    /// 3. Environment variables (`CONSUL_*` and `ACLCTL_*`)
    /// 4. `overrides`, usually command-line flags
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment variable holds an invalid value
    /// - The merged configuration fails validation
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env(path, overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_env<F>(path: Option<&Path>, overrides: &ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(lookup)?;
        config.apply_overrides(overrides);
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CONSUL_HTTP_ADDR` - Agent address
    /// - `CONSUL_HTTP_TOKEN` / `CONSUL_HTTP_TOKEN_FILE` - ACL token or token file
    /// - `CONSUL_HTTP_SSL` / `CONSUL_HTTP_SSL_VERIFY` - TLS toggles (true/false)
    /// - `CONSUL_CACERT` / `CONSUL_CAPATH` - CA bundle file or directory
    /// - `CONSUL_CLIENT_CERT` / `CONSUL_CLIENT_KEY` - Client identity
    /// - `CONSUL_DATACENTER` - Datacenter
    /// - `ACLCTL_TIMEOUT_SECS` - Request timeout
    /// - `ACLCTL_OUTPUT_FORMAT` - Output format (pretty/plain/json)
    /// - `ACLCTL_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|val| !val.is_empty());

        if let Some(val) = get("CONSUL_HTTP_ADDR") {
            self.http_addr = val;
        }
        if let Some(val) = get("CONSUL_HTTP_TOKEN") {
            self.token = Some(val);
        }
        if let Some(val) = get("CONSUL_HTTP_TOKEN_FILE") {
            self.token_file = Some(PathBuf::from(val));
        }
        if let Some(val) = get("CONSUL_HTTP_SSL") {
            self.http_ssl = parse_bool("CONSUL_HTTP_SSL", &val)?;
        }
        if let Some(val) = get("CONSUL_HTTP_SSL_VERIFY") {
            self.ssl_verify = parse_bool("CONSUL_HTTP_SSL_VERIFY", &val)?;
        }
        if let Some(val) = get("CONSUL_CACERT") {
            self.ca_file = Some(PathBuf::from(val));
        }
        if let Some(val) = get("CONSUL_CAPATH") {
            self.ca_path = Some(PathBuf::from(val));
        }
        if let Some(val) = get("CONSUL_CLIENT_CERT") {
            self.client_cert = Some(PathBuf::from(val));
        }
        if let Some(val) = get("CONSUL_CLIENT_KEY") {
            self.client_key = Some(PathBuf::from(val));
        }
        if let Some(val) = get("CONSUL_DATACENTER") {
            self.datacenter = Some(val);
        }
        if let Some(val) = get("ACLCTL_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                Error::InvalidConfig("ACLCTL_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }
        if let Some(val) = get("ACLCTL_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::InvalidConfig("ACLCTL_OUTPUT_FORMAT must be pretty, plain, or json".to_string())
            })?;
        }
        if let Some(val) = get("ACLCTL_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let ConfigOverrides {
            http_addr,
            token,
            token_file,
            ca_file,
            ca_path,
            client_cert,
            client_key,
            datacenter,
            stale,
            timeout_secs,
            output_format,
            log_level,
        } = overrides.clone();

        if let Some(val) = http_addr {
            self.http_addr = val;
        }
        if token.is_some() {
            self.token = token;
        }
        if token_file.is_some() {
            self.token_file = token_file;
        }
        if ca_file.is_some() {
            self.ca_file = ca_file;
        }
        if ca_path.is_some() {
            self.ca_path = ca_path;
        }
        if client_cert.is_some() {
            self.client_cert = client_cert;
        }
        if client_key.is_some() {
            self.client_key = client_key;
        }
        if datacenter.is_some() {
            self.datacenter = datacenter;
        }
        if let Some(val) = stale {
            self.stale = val;
        }
        if let Some(val) = timeout_secs {
            self.timeout_secs = val;
        }
        if let Some(val) = output_format {
            self.output_format = val;
        }
        if let Some(val) = log_level {
            self.log_level = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `http_addr` is empty
    /// - `timeout_secs` is zero
    /// - Only one of `client_cert` and `client_key` is set
    /// - `log_level` is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.http_addr.trim().is_empty() {
            return Err(Error::InvalidConfig("http_addr cannot be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.client_cert.is_some() != self.client_key.is_some() {
            return Err(Error::InvalidConfig(
                "client_cert and client_key must be given together".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Returns the base URL requests are sent to, without a trailing slash.
    ///
    /// A bare `host:port` gets `https://` when `http_ssl` is set and
    /// `http://` otherwise. An explicit scheme is kept as given.
    ///
    /// # Errors
    ///
    /// Returns an error for `unix://` socket addresses, which are not supported.
    pub fn base_url(&self) -> Result<String> {
        let addr = self.http_addr.trim().trim_end_matches('/');

        if addr.starts_with("http://") || addr.starts_with("https://") {
            return Ok(addr.to_string());
        }
        if addr.starts_with("unix://") {
            return Err(Error::InvalidConfig(format!(
                "unix socket addresses are not supported: {}",
                addr
            )));
        }

        let scheme = if self.http_ssl { "https" } else { "http" };
        Ok(format!("{}://{}", scheme, addr))
    }

    /// Returns the ACL token to send, reading `token_file` when no token is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be read.
    pub fn effective_token(&self) -> Result<Option<String>> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(Some(token.to_string()));
        }

        match &self.token_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            None => Ok(None),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(Error::InvalidConfig(format!("{} must be true or false", key))),
    }
}
