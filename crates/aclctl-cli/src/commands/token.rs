// Rust guideline compliant 2026-10-17

//! `aclctl token` subcommands.

use crate::cli::CreateArgs;
use crate::output::OutputFormatter;
use aclctl_app::create_token;
use aclctl_client::HttpClient;
use aclctl_core::Config;
use anyhow::{Context, Result};

/// Creates a token and prints it.
///
/// Options are checked before a client is built, so an invocation without
/// any policy never reaches the network.
///
/// # Errors
///
/// Returns an error if:
/// - No `--policy-id` or `--policy-name` was given
/// - The client cannot be configured
/// - A policy ID cannot be resolved or the create call fails
pub fn create(args: &CreateArgs, config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    let options = args.to_options();
    options.validate()?;

    let client = HttpClient::new(config).context("Error connecting to ACL agent")?;
    let token = create_token(&options, &client)?;

    println!("{}", formatter.format_token(&token, args.meta));
    Ok(())
}
