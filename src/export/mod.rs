//! Export functionality for palettes.
//!
//! This module renders a document's palette into text formats that can be
//! written to a file or copied to the clipboard: CSS custom properties, an SVG
//! swatch strip, a JSON dump, and the flat query string.

pub mod css;
pub mod flat;
pub mod json;
pub mod svg;

pub use css::generate_css;
pub use flat::FlatDocument;
pub use json::generate_json;
pub use svg::generate_svg;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ExportConfig;
use crate::services::Document;

/// Output format of an export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSS custom properties
    #[default]
    Css,
    /// SVG swatch strip
    Svg,
    /// JSON dump of key colors, stops and palette
    Json,
    /// Flat query string (`k=...&p=...`)
    Query,
}

impl ExportFormat {
    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Query => "txt",
        }
    }

    /// Short label used in status messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS variables",
            Self::Svg => "SVG",
            Self::Json => "JSON",
            Self::Query => "Query string",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Css => "css",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Query => "query",
        };
        f.write_str(name)
    }
}

/// Renders a document's palette in the given format.
///
/// CSS and SVG exports of an empty palette are empty strings.
pub fn render(format: ExportFormat, document: &Document, settings: &ExportConfig) -> Result<String> {
    let entries = document.palette().entries();
    let output = match format {
        ExportFormat::Css => generate_css(entries),
        ExportFormat::Svg => {
            generate_svg(entries, settings.swatch_width, settings.swatch_height)
        }
        ExportFormat::Json => generate_json(document)?,
        ExportFormat::Query => document.to_query(),
    };
    Ok(output)
}
