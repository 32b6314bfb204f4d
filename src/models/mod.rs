//! Data models for colors, key color slots and palette entries.
//!
//! This module contains the core value types used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod error;
pub mod key_color;
pub mod lch;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use error::ColorError;
pub use key_color::{KeyColor, KeyColorSet};
pub use lch::Lch;
pub use palette::PaletteEntry;
pub use rgb::RgbColor;
