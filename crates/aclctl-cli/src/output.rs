// Rust guideline compliant 2026-10-17

//! Output formatting for the aclctl CLI.
//!
//! Created tokens and errors are rendered as an aligned human layout, as
//! plain text, or as JSON for machine consumption.

use aclctl_app::{AppError, ErrorCode, ErrorEnvelope};
use aclctl_core::{AclToken, OutputFormat};
use serde_json::{json, Map, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a created token.
    ///
    /// # Arguments
    /// * `token` - The token returned by the agent
    /// * `show_meta` - Include the content hash and raft indices
    fn format_token(&self, token: &AclToken, show_meta: bool) -> String;

    /// Formats an error for display on stderr.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Joins an error and its causes into one line.
///
/// Causes whose text already appears in the message are skipped, so errors
/// that embed their source are not repeated.
pub fn error_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    for cause in error.chain().skip(1) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
    }
    message
}

fn create_time(token: &AclToken) -> String {
    token
        .create_time
        .map(|t| t.format("%Y-%m-%d %H:%M:%S%.f %z").to_string())
        .unwrap_or_default()
}

fn header_lines(token: &AclToken, show_meta: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("AccessorID:   {}\n", token.accessor_id));
    output.push_str(&format!("SecretID:     {}\n", token.secret_id));
    output.push_str(&format!("Description:  {}\n", token.description));
    output.push_str(&format!("Local:        {}\n", token.local));
    output.push_str(&format!("Create Time:  {}\n", create_time(token)));

    if show_meta {
        output.push_str(&format!("Hash:         {}\n", token.hash_hex()));
        output.push_str(&format!("Create Index: {}\n", token.create_index));
        output.push_str(&format!("Modify Index: {}\n", token.modify_index));
    }

    output
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_token(&self, token: &AclToken, show_meta: bool) -> String {
        let mut record = Map::new();
        record.insert("AccessorID".into(), json!(token.accessor_id));
        record.insert("SecretID".into(), json!(token.secret_id));
        record.insert("Description".into(), json!(token.description));
        record.insert("Policies".into(), json!(token.policies));
        record.insert("Local".into(), json!(token.local));
        record.insert(
            "CreateTime".into(),
            json!(token.create_time.map(|t| t.to_rfc3339())),
        );

        if show_meta {
            record.insert("Hash".into(), json!(token.hash_hex()));
            record.insert("CreateIndex".into(), json!(token.create_index));
            record.insert("ModifyIndex".into(), json!(token.modify_index));
        }

        serde_json::to_string_pretty(&Value::Object(record))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize token" }).to_string())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app_error) => ErrorEnvelope {
                message: error_message(error),
                ..ErrorEnvelope::from_error(app_error)
            },
            None => ErrorEnvelope {
                code: ErrorCode::Unknown,
                message: error_message(error),
                details: None,
            },
        };
        json!({ "error": envelope }).to_string()
    }
}

/// Human-readable formatter with a policy table.
pub struct PrettyFormatter {
    use_color: bool,
}

impl PrettyFormatter {
    /// Creates a new pretty formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for PrettyFormatter {
    fn format_token(&self, token: &AclToken, show_meta: bool) -> String {
        let mut output = header_lines(token, show_meta);

        if token.policies.is_empty() {
            output.push_str("Policies:     none");
            return output;
        }

        output.push_str("Policies:\n");
        let mut builder = Builder::default();
        builder.push_record(["ID", "Name"]);
        for policy in &token.policies {
            builder.push_record([policy.id.as_str(), policy.name.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        output.push_str(&table.to_string());
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let message = error_message(error);
        if !self.use_color {
            return format!("Error: {}", message);
        }

        let mut buffer = Ansi::new(Vec::new());
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(buffer, "Error:");
        let _ = buffer.reset();
        let _ = write!(buffer, " {}", message);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }
}

/// Plain text formatter, one field per line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_token(&self, token: &AclToken, show_meta: bool) -> String {
        let mut output = header_lines(token, show_meta);
        output.push_str("Policies:");
        for policy in &token.policies {
            output.push_str(&format!("\n   {} - {}", policy.id, policy.name));
        }
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        error_message(error)
    }
}

/// Creates the formatter for an output format.
///
/// `use_color` is ignored for plain and JSON output.
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Pretty => Box::new(PrettyFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
