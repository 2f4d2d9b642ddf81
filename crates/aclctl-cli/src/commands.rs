// Rust guideline compliant 2026-10-17

//! Command implementations for the aclctl CLI.

use crate::cli::{Commands, TokenAction};
use crate::output::OutputFormatter;
use aclctl_core::Config;
use anyhow::Result;

pub mod token;

/// Dispatches a parsed command.
///
/// # Errors
///
/// Returns the failure of the command that ran.
pub fn execute(command: Option<Commands>, config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    match command {
        Some(Commands::Token { action }) => match action {
            TokenAction::Create(args) => token::create(&args, config, formatter),
        },
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
