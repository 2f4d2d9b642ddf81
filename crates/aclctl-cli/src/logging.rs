// Rust guideline compliant 2026-10-17

//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout carries only command output.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global subscriber at the given level.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the level name is not recognized.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {}", other),
    }
}
