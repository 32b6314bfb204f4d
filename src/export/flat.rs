//! Flat, query-string friendly representation of a document.
//!
//! Key colors are written as `HEX` or `HEXm` (muted), palette entries as
//! `HEX@L`. Both lists are comma separated and combined into
//! `k=<keys>&p=<palette>`. Parsing never fails as a whole: malformed items
//! are skipped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::warn;

use crate::models::rgb::normalize_hex;
use crate::models::ColorError;

/// A key color in flat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatKey {
    /// Six uppercase hex digits
    pub hex: String,
    /// Whether the slot is muted
    pub muted: bool,
}

/// A palette entry in flat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    /// Six uppercase hex digits
    pub hex: String,
    /// Lightness percentage, 0..=100
    pub lightness: u8,
}

/// Serializable snapshot of key colors and palette entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatDocument {
    /// Key colors in slot order
    pub keys: Vec<FlatKey>,
    /// Palette entries in display order
    pub palette: Vec<FlatEntry>,
}

impl FlatDocument {
    /// Key colors as `3366CC,808080m`.
    #[must_use]
    pub fn keys_param(&self) -> String {
        self.keys
            .iter()
            .map(|k| format!("{}{}", k.hex, if k.muted { "m" } else { "" }))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Palette as `E1E9FF@90,3366CC@56`.
    #[must_use]
    pub fn palette_param(&self) -> String {
        self.palette
            .iter()
            .map(|e| format!("{}@{}", e.hex, e.lightness))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Query string `k=...&p=...`. Empty parts are omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadeline::export::flat::{FlatDocument, FlatEntry, FlatKey};
    ///
    /// let flat = FlatDocument {
    ///     keys: vec![FlatKey { hex: "3366CC".into(), muted: false }],
    ///     palette: vec![FlatEntry { hex: "E1E9FF".into(), lightness: 90 }],
    /// };
    /// assert_eq!(flat.to_query(), "k=3366CC&p=E1E9FF@90");
    /// ```
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if !self.keys.is_empty() {
            parts.push(format!("k={}", self.keys_param()));
        }
        if !self.palette.is_empty() {
            parts.push(format!("p={}", self.palette_param()));
        }
        parts.join("&")
    }

    /// Parses a query string. A leading `?` and unknown parameters are ignored.
    #[must_use]
    pub fn parse_query(query: &str) -> Self {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut flat = Self::default();
        for pair in query.split('&') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let value = percent_decode(value);
            match name {
                "k" => flat.keys = parse_keys(&value),
                "p" => flat.palette = parse_palette(&value),
                _ => {}
            }
        }
        flat
    }
}

/// Parses a comma-separated key color list.
#[must_use]
pub fn parse_keys(value: &str) -> Vec<FlatKey> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| match parse_key(item) {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Skipping key color: {e}");
                None
            }
        })
        .collect()
}

/// Parses a single `HEX` or `HEXm` item.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if the hex part is malformed.
pub fn parse_key(item: &str) -> Result<FlatKey, ColorError> {
    let (hex, muted) = match item.strip_suffix(['m', 'M']) {
        Some(hex) => (hex, true),
        None => (item, false),
    };
    let hex = normalize_hex(hex).ok_or_else(|| ColorError::InvalidColor(item.to_string()))?;
    Ok(FlatKey { hex, muted })
}

/// Parses a comma-separated `HEX@L` list.
#[must_use]
pub fn parse_palette(value: &str) -> Vec<FlatEntry> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| match parse_entry(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping palette entry '{item}': {e}");
                None
            }
        })
        .collect()
}

/// Parses a single `HEX@L` item.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] for a malformed item or hex, and
/// [`ColorError::OutOfRange`] for a lightness above 100.
pub fn parse_entry(item: &str) -> Result<FlatEntry, ColorError> {
    let invalid = || ColorError::InvalidColor(item.to_string());
    let captures = entry_pattern()
        .and_then(|re| re.captures(item.trim()))
        .ok_or_else(invalid)?;

    let hex = normalize_hex(&captures[1]).ok_or_else(invalid)?;
    let value: f64 = captures[2].parse().map_err(|_| invalid())?;
    let value = ColorError::check_range(value, 0.0, 100.0)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lightness = value.round() as u8;
    Ok(FlatEntry { hex, lightness })
}

/// `HEX@L` with an optional `#` and a decimal lightness.
fn entry_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\s*@\s*(\d+(?:\.\d+)?)$").ok())
        .as_ref()
}

/// Decodes `%XX` escapes. Malformed escapes are kept verbatim.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(byte) = decoded {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
