// Rust guideline compliant 2026-10-17

//! Command-line surface of `aclctl`.

use aclctl_app::CreateTokenOptions;
use aclctl_core::{ConfigOverrides, OutputFormat};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aclctl",
    version,
    about = "Manage ACL tokens on a Consul-compatible agent",
    long_about = "aclctl talks to the ACL HTTP API of a Consul-compatible agent. Connection settings come from flags, CONSUL_* environment variables, or a TOML file given with --config.",
    after_help = "Examples:\n  aclctl token create --description \"Replication token\" --policy-id b52fc3de-5 --policy-name acl-replication\n  aclctl --json token create --policy-name node-read --local\n"
)]
pub struct Cli {
    #[command(flatten)]
    pub http: HttpArgs,

    /// Enable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level for diagnostics on stderr (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Custom config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Connection flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct HttpArgs {
    /// Agent address, host:port or http(s):// URL [env: CONSUL_HTTP_ADDR]
    #[arg(long, global = true, value_name = "ADDR")]
    pub http_addr: Option<String>,

    /// ACL token to use in the request [env: CONSUL_HTTP_TOKEN]
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// File containing the ACL token [env: CONSUL_HTTP_TOKEN_FILE]
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    /// PEM file of CA certificates [env: CONSUL_CACERT]
    #[arg(long, global = true)]
    pub ca_file: Option<PathBuf>,

    /// Directory of PEM CA certificates [env: CONSUL_CAPATH]
    #[arg(long, global = true)]
    pub ca_path: Option<PathBuf>,

    /// Client certificate for mutual TLS [env: CONSUL_CLIENT_CERT]
    #[arg(long, global = true)]
    pub client_cert: Option<PathBuf>,

    /// Client key for mutual TLS [env: CONSUL_CLIENT_KEY]
    #[arg(long, global = true)]
    pub client_key: Option<PathBuf>,

    /// Datacenter to query; defaults to the agent's own
    #[arg(long, global = true)]
    pub datacenter: Option<String>,

    /// Allow any server to answer reads, not only the leader
    #[arg(long, global = true)]
    pub stale: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Pretty,
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage ACL tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum TokenAction {
    /// Create an ACL token
    #[command(
        long_about = "Create an ACL token.\n\nPolicies may be linked using either --policy-id or --policy-name. When specifying policies by ID you may use a unique prefix of the UUID as a shortcut for the entire UUID.",
        after_help = "Example:\n  aclctl token create --description \"Replication token\" \\\n                      --policy-id b52fc3de-5 \\\n                      --policy-name acl-replication\n"
    )]
    Create(CreateArgs),
}

#[derive(Debug, Args, Default)]
pub struct CreateArgs {
    /// A description of the token
    #[arg(long, default_value = "")]
    pub description: String,

    /// Create this as a datacenter local token
    #[arg(long)]
    pub local: bool,

    /// Show token metadata such as the content hash and raft indices
    #[arg(long)]
    pub meta: bool,

    /// ID or unique ID prefix of a policy to link. May be specified multiple times
    #[arg(long = "policy-id", value_name = "ID")]
    pub policy_ids: Vec<String>,

    /// Name of a policy to link. May be specified multiple times
    #[arg(long = "policy-name", value_name = "NAME")]
    pub policy_names: Vec<String>,
}

impl CreateArgs {
    /// Converts the parsed flags into token creation options.
    pub fn to_options(&self) -> CreateTokenOptions {
        CreateTokenOptions {
            description: self.description.clone(),
            local: self.local,
            policy_ids: self.policy_ids.clone(),
            policy_names: self.policy_names.clone(),
        }
    }
}

impl Cli {
    /// Output format requested on the command line, if any.
    ///
    /// `--format` wins over `--json`.
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self.format {
            Some(format) => Some(format.into()),
            None if self.json => Some(OutputFormat::Json),
            None => None,
        }
    }

    /// Configuration values given as flags.
    pub fn overrides(&self) -> ConfigOverrides {
        let http = &self.http;
        ConfigOverrides {
            http_addr: http.http_addr.clone(),
            token: http.token.clone(),
            token_file: http.token_file.clone(),
            ca_file: http.ca_file.clone(),
            ca_path: http.ca_path.clone(),
            client_cert: http.client_cert.clone(),
            client_key: http.client_key.clone(),
            datacenter: http.datacenter.clone(),
            stale: http.stale.then_some(true),
            timeout_secs: http.timeout_secs,
            output_format: self.output_format(),
            log_level: self.log_level.clone(),
        }
    }
}
