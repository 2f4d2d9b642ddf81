// Rust guideline compliant 2026-10-17

//! aclctl
//!
//! Command-line client for the ACL API of a Consul-compatible agent.

use aclctl_app::AppError;
use aclctl_cli::{commands, create_formatter, logging, should_use_color, Cli};
use aclctl_core::Config;
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let config = match Config::load(cli.config.as_deref(), &cli.overrides())
        .map_err(AppError::from)
        .context("Error loading configuration")
    {
        Ok(config) => config,
        Err(err) => {
            let formatter = create_formatter(cli.output_format().unwrap_or_default(), use_color);
            eprintln!("{}", formatter.format_error(&err));
            return ExitCode::FAILURE;
        }
    };

    let formatter = create_formatter(config.output_format, use_color);

    if let Err(err) = logging::init_tracing(&config.log_level) {
        eprintln!("{}", formatter.format_error(&err));
        return ExitCode::FAILURE;
    }

    match commands::execute(cli.command, &config, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&err));
            ExitCode::FAILURE
        }
    }
}
