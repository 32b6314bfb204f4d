//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::constants::APP_NAME;
use crate::export::ExportFormat;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Resolution of the gradient axis
    #[arg(long, value_name = "N")]
    height: Option<u32>,

    /// Synthetic stops in each of the white and black caps
    #[arg(long, value_name = "N")]
    cap_stops: Option<usize>,

    /// Maximum number of key color slots
    #[arg(long, value_name = "N")]
    max_keys: Option<usize>,

    /// Default export format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// SVG swatch width
    #[arg(long, value_name = "PX")]
    swatch_width: Option<u32>,

    /// SVG swatch height
    #[arg(long, value_name = "PX")]
    swatch_height: Option<u32>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: Option<String>,
    gradient: GradientOutput,
    export: ExportOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct GradientOutput {
    height: u32,
    cap_stops: usize,
    max_key_colors: usize,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    default_format: String,
    swatch_width: u32,
    swatch_height: u32,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.height.is_none()
            && self.cap_stops.is_none()
            && self.max_keys.is_none()
            && self.format.is_none()
            && self.swatch_width.is_none()
            && self.swatch_height.is_none()
            && self.theme.is_none()
    }

    /// Applies the given values to a configuration and validates the result.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(height) = self.height {
            config.gradient.height = height;
        }
        if let Some(cap_stops) = self.cap_stops {
            config.gradient.cap_stops = cap_stops;
        }
        if let Some(max_keys) = self.max_keys {
            config.gradient.max_key_colors = max_keys;
        }
        if let Some(format) = self.format {
            config.export.default_format = format;
        }
        if let Some(width) = self.swatch_width {
            config.export.swatch_width = width;
        }
        if let Some(height) = self.swatch_height {
            config.export.swatch_height = height;
        }
        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --height, --cap-stops, \
                 --max-keys, --format, --swatch-width, --swatch-height, or --theme",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config)?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        gradient: GradientOutput {
            height: config.gradient.height,
            cap_stops: config.gradient.cap_stops,
            max_key_colors: config.gradient.max_key_colors,
        },
        export: ExportOutput {
            default_format: config.export.default_format.to_string(),
            swatch_width: config.export.swatch_width,
            swatch_height: config.export.swatch_height,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str().to_string(),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=======================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Gradient:");
    println!("  Height: {}", config.gradient.height);
    println!("  Cap Stops: {}", config.gradient.cap_stops);
    println!("  Max Key Colors: {}", config.gradient.max_key_colors);
    println!();

    println!("Export:");
    println!("  Default Format: {}", config.export.default_format);
    println!(
        "  Swatch Size: {}x{}",
        config.export.swatch_width, config.export.swatch_height
    );
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_args_apply() {
        let args = ConfigSetArgs {
            height: Some(800),
            format: Some(ExportFormat::Json),
            theme: Some("Light".to_string()),
            ..ConfigSetArgs::default()
        };
        let mut config = Config::new();
        args.apply(&mut config).unwrap();
        assert_eq!(config.gradient.height, 800);
        assert_eq!(config.export.default_format, ExportFormat::Json);
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_set_args_rejects_invalid_values() {
        let mut config = Config::new();
        let bad_theme = ConfigSetArgs {
            theme: Some("sepia".to_string()),
            ..ConfigSetArgs::default()
        };
        assert!(bad_theme.apply(&mut config).is_err());

        let zero_height = ConfigSetArgs {
            height: Some(0),
            ..ConfigSetArgs::default()
        };
        assert!(zero_height.apply(&mut Config::new()).is_err());
    }

    #[test]
    fn test_set_args_is_empty() {
        assert!(ConfigSetArgs::default().is_empty());
    }
}
