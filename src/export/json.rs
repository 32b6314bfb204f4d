//! JSON export of a whole document.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::gradient::StopKind;
use crate::services::Document;

/// JSON view of a key color slot.
#[derive(Debug, Serialize)]
struct KeyColorJson {
    hex: String,
    active: bool,
    lightness: Option<u8>,
}

/// JSON view of a gradient stop.
#[derive(Debug, Serialize)]
struct StopJson {
    position: u32,
    hex: String,
    lightness: u8,
    kind: StopKind,
}

/// JSON view of a palette entry.
#[derive(Debug, Serialize)]
struct EntryJson {
    index: usize,
    hex: String,
    lightness: u8,
    position: u32,
    oklch: [f32; 3],
}

#[derive(Debug, Serialize)]
struct DocumentJson {
    height: u32,
    key_colors: Vec<KeyColorJson>,
    stops: Vec<StopJson>,
    palette: Vec<EntryJson>,
    query: String,
}

/// Generates a pretty-printed JSON dump of key colors, stops and palette.
pub fn generate_json(document: &Document) -> Result<String> {
    let json = DocumentJson {
        height: document.height(),
        key_colors: document
            .key_colors()
            .slots()
            .iter()
            .map(|slot| KeyColorJson {
                hex: slot.hex.clone(),
                active: slot.active,
                lightness: slot.lightness(),
            })
            .collect(),
        stops: document
            .gradient()
            .stops()
            .iter()
            .map(|stop| StopJson {
                position: stop.position,
                hex: stop.color.to_hex(),
                lightness: stop.color.lightness_percent(),
                kind: stop.kind,
            })
            .collect(),
        palette: document
            .palette()
            .numbered()
            .map(|(index, entry)| EntryJson {
                index,
                hex: entry.hex.clone(),
                lightness: entry.lightness,
                position: entry.position,
                oklch: [entry.color.l, entry.color.c, entry.color.h],
            })
            .collect(),
        query: document.to_query(),
    };

    serde_json::to_string_pretty(&json).context("Failed to serialize palette to JSON")
}
