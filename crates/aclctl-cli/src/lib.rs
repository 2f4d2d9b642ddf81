// Rust guideline compliant 2026-10-17

//! aclctl CLI library.
//!
//! Exposes the command-line surface, commands and formatters for use by the
//! binary and its tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use cli::Cli;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;
