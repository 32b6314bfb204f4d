//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the gradient engine defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shadeline";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "shadeline";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SHADELINE_CONFIG_DIR";

/// Default resolution of the position axis.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Number of synthetic stops in each of the white and black caps.
pub const DEFAULT_CAP_STOPS: usize = 10;

/// Default number of key color slots offered by the UI.
pub const DEFAULT_MAX_KEY_COLORS: usize = 7;

/// Fill used when there is no active key color to build a gradient from.
pub const NEUTRAL_PLACEHOLDER_HEX: &str = "#F0F0F0";

/// Markers on colors lighter than this get dark text.
pub const DARK_TEXT_THRESHOLD: f32 = 0.66;

/// Default SVG swatch size (width, height).
pub const DEFAULT_SWATCH_SIZE: (u32, u32) = (120, 40);
