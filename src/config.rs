//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::constants::{
    APP_NAME, CONFIG_DIR_ENV, DEFAULT_CAP_STOPS, DEFAULT_HEIGHT, DEFAULT_MAX_KEY_COLORS,
    DEFAULT_SWATCH_SIZE,
};
use crate::export::ExportFormat;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Gradient engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Resolution of the position axis (rows from white to black)
    pub height: u32,
    /// Synthetic stops in each of the white and black caps
    pub cap_stops: usize,
    /// Maximum number of key color slots
    pub max_key_colors: usize,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            cap_stops: DEFAULT_CAP_STOPS,
            max_key_colors: DEFAULT_MAX_KEY_COLORS,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is given on the command line
    pub default_format: ExportFormat,
    /// Width of one SVG swatch
    pub swatch_width: u32,
    /// Height of one SVG swatch
    pub swatch_height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::default(),
            swatch_width: DEFAULT_SWATCH_SIZE.0,
            swatch_height: DEFAULT_SWATCH_SIZE.1,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl ThemeMode {
    /// Parses `auto`, `dark` or `light` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Shadeline/config.toml`
/// - macOS: `~/Library/Application Support/Shadeline/config.toml`
/// - Windows: `%APPDATA%\Shadeline\config.toml`
///
/// The directory can be overridden with the `SHADELINE_CONFIG_DIR` environment
/// variable.
///
/// # Validation
///
/// - `gradient.height`, `gradient.cap_stops` and `gradient.max_key_colors` must be non-zero
/// - `export.swatch_width` and `export.swatch_height` must be non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gradient engine settings
    #[serde(default)]
    pub gradient: GradientConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - `$SHADELINE_CONFIG_DIR` if set
    /// - Linux: `~/.config/Shadeline/`
    /// - macOS: `~/Library/Application Support/Shadeline/`
    /// - Windows: `%APPDATA%\Shadeline\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        info!("Saved configuration to {}", config_path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - gradient height, cap stops and key color cap are non-zero
    /// - swatch dimensions are non-zero
    pub fn validate(&self) -> Result<()> {
        if self.gradient.height == 0 {
            anyhow::bail!("gradient.height must be at least 1");
        }
        if self.gradient.cap_stops == 0 {
            anyhow::bail!("gradient.cap_stops must be at least 1");
        }
        if self.gradient.max_key_colors == 0 {
            anyhow::bail!("gradient.max_key_colors must be at least 1");
        }
        if self.export.swatch_width == 0 || self.export.swatch_height == 0 {
            anyhow::bail!(
                "export swatch size must be non-zero (got {}x{})",
                self.export.swatch_width,
                self.export.swatch_height
            );
        }
        Ok(())
    }
}
