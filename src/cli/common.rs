//! Shared CLI plumbing: error type, exit codes and document loading.

use crate::config::Config;
use crate::export::flat::parse_key;
use crate::models::{ColorError, KeyColor};
use crate::services::{Document, DocumentSettings};
use clap::Args;
use serde::Serialize;
use std::fmt;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid input or arguments
    Validation = 1,
    /// File system or clipboard failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub kind: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid input error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads configuration, reporting a broken file as a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Flags that describe the document a command works on.
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// Key color as HEX, or HEXm for a muted slot (repeatable)
    #[arg(short, long = "key", value_name = "HEX")]
    pub keys: Vec<String>,

    /// Saved state as a query string (k=...&p=...)
    #[arg(long, value_name = "QUERY")]
    pub state: Option<String>,

    /// Resolution of the position axis (overrides configuration)
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,
}

impl DocumentArgs {
    /// Engine settings from configuration and flags.
    pub fn settings(&self, config: &Config) -> CliResult<DocumentSettings> {
        let mut settings = DocumentSettings::from(config);
        if let Some(height) = self.height {
            if height == 0 {
                return Err(CliError::validation("--height must be at least 1"));
            }
            settings.height = height;
        }
        Ok(settings)
    }

    /// Builds the document.
    ///
    /// `--state` supplies the starting point; `--key` flags, when present,
    /// replace its key colors. Malformed `--key` values are rejected.
    pub fn build(&self, config: &Config) -> CliResult<Document> {
        let settings = self.settings(config)?;
        let mut document = match &self.state {
            Some(state) => Document::from_query(state, settings),
            None => Document::new(settings),
        };

        if !self.keys.is_empty() {
            let keys = self
                .keys
                .iter()
                .map(|raw| {
                    let flat = parse_key(raw.trim()).map_err(|e| CliError::validation(e.to_string()))?;
                    Ok(if flat.muted {
                        KeyColor::muted(flat.hex)
                    } else {
                        KeyColor::new(flat.hex)
                    })
                })
                .collect::<CliResult<Vec<_>>>()?;
            if keys.len() > settings.max_key_colors {
                return Err(CliError::validation(format!(
                    "Too many key colors: {} given, at most {} allowed",
                    keys.len(),
                    settings.max_key_colors
                )));
            }
            document.set_key_colors(keys);
        }

        Ok(document)
    }

    /// Builds the document and requires a non-empty gradient.
    pub fn build_non_empty(&self, config: &Config) -> CliResult<Document> {
        let document = self.build(config)?;
        if document.gradient().is_empty() {
            return Err(CliError::validation(format!(
                "{}. Pass at least one --key HEX or a --state with k=...",
                ColorError::EmptyGradient
            )));
        }
        Ok(document)
    }
}
