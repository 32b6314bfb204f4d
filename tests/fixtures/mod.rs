//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use shadeline::models::KeyColor;
use shadeline::services::{Document, DocumentSettings};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shadeline binary
pub fn shadeline_bin() -> String {
    std::env::var("CARGO_BIN_EXE_shadeline")
        .unwrap_or_else(|_| "target/release/shadeline".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// between them in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(shadeline_bin());
    cmd.env("SHADELINE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = temp_config_dir();
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Temporary directory used as the config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn json_output(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Engine settings at a given height with default caps.
pub fn settings(height: u32) -> DocumentSettings {
    DocumentSettings {
        height,
        ..DocumentSettings::default()
    }
}

/// A document with a single active key color.
pub fn single_key_document(hex: &str, height: u32) -> Document {
    Document::with_key_colors(vec![KeyColor::new(hex)], settings(height))
}

/// A document with a light, a mid and a dark key color.
pub fn three_key_document(height: u32) -> Document {
    Document::with_key_colors(
        vec![
            KeyColor::new("F5D0A9"),
            KeyColor::new("3366CC"),
            KeyColor::new("1B2A41"),
        ],
        settings(height),
    )
}

/// Positions of a document's palette entries, in palette order.
pub fn positions(document: &Document) -> Vec<u32> {
    document
        .palette()
        .entries()
        .iter()
        .map(|e| e.position)
        .collect()
}
