//! CLI command handlers for Shadeline.
//!
//! This module provides headless, scriptable access to the gradient engine
//! for automation, testing, and build pipelines.

pub mod common;
pub mod config;
pub mod export;
pub mod gradient;
pub mod palette;
pub mod sample;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, DocumentArgs, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use gradient::GradientArgs;
pub use palette::PaletteArgs;
pub use sample::SampleArgs;
