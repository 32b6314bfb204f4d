//! Document state: key colors, the gradient built from them and the palette.
//!
//! A [`Document`] is the single state object the presentation layer drives.
//! Every key color edit rebuilds the gradient and re-resolves the palette, so
//! the three always agree.

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::constants::{DEFAULT_CAP_STOPS, DEFAULT_HEIGHT, DEFAULT_MAX_KEY_COLORS};
use crate::export::flat::{FlatDocument, FlatEntry, FlatKey};
use crate::gradient::Gradient;
use crate::models::{KeyColor, KeyColorSet};
use crate::services::PaletteStore;

/// Engine settings a document is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Resolution of the position axis
    pub height: u32,
    /// Stops in each of the white and black caps
    pub cap_stops: usize,
    /// Maximum number of key color slots
    pub max_key_colors: usize,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            cap_stops: DEFAULT_CAP_STOPS,
            max_key_colors: DEFAULT_MAX_KEY_COLORS,
        }
    }
}

impl From<&Config> for DocumentSettings {
    fn from(config: &Config) -> Self {
        Self {
            height: config.gradient.height,
            cap_stops: config.gradient.cap_stops,
            max_key_colors: config.gradient.max_key_colors,
        }
    }
}

/// One gradient plus one palette.
#[derive(Debug, Clone)]
pub struct Document {
    key_colors: KeyColorSet,
    palette: PaletteStore,
    settings: DocumentSettings,
    gradient: Gradient,
}

impl Document {
    /// Creates a document with one empty key color slot.
    #[must_use]
    pub fn new(settings: DocumentSettings) -> Self {
        Self::with_key_colors(Vec::new(), settings)
    }

    /// Creates a document from key colors.
    #[must_use]
    pub fn with_key_colors(keys: Vec<KeyColor>, settings: DocumentSettings) -> Self {
        let key_colors = KeyColorSet::from_colors(keys, settings.max_key_colors);
        let gradient = Self::build_gradient(&key_colors, &settings);
        Self {
            key_colors,
            palette: PaletteStore::new(),
            settings,
            gradient,
        }
    }

    fn build_gradient(keys: &KeyColorSet, settings: &DocumentSettings) -> Gradient {
        Gradient::build(&keys.active_hexes(), settings.height, settings.cap_stops)
    }

    /// Rebuilds the gradient and re-resolves every palette entry.
    fn refresh(&mut self) {
        self.gradient = Self::build_gradient(&self.key_colors, &self.settings);
        self.palette.recompute_all(&self.gradient);
        debug!(
            "Document refreshed: {} active key colors, {} palette entries",
            self.key_colors.active_hexes().len(),
            self.palette.len()
        );
    }

    /// Key color slots.
    #[must_use]
    pub const fn key_colors(&self) -> &KeyColorSet {
        &self.key_colors
    }

    /// Palette entries.
    #[must_use]
    pub const fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    /// Current gradient.
    #[must_use]
    pub const fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Settings the document was built with.
    #[must_use]
    pub const fn settings(&self) -> DocumentSettings {
        self.settings
    }

    /// Resolution of the position axis.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.gradient.height()
    }

    // === Key colors ===

    /// Replaces all key colors.
    pub fn set_key_colors(&mut self, keys: Vec<KeyColor>) {
        self.key_colors = KeyColorSet::from_colors(keys, self.settings.max_key_colors);
        self.refresh();
    }

    /// Appends a key color slot. Returns its index.
    pub fn add_key_color(&mut self, hex: &str) -> Result<usize> {
        let index = self.key_colors.add(hex)?;
        self.refresh();
        Ok(index)
    }

    /// Deletes a key color slot.
    pub fn remove_key_color(&mut self, index: usize) -> Result<()> {
        self.key_colors.remove(index)?;
        self.refresh();
        Ok(())
    }

    /// Edits the hex text of a key color slot.
    pub fn set_key_hex(&mut self, index: usize, hex: &str) -> Result<()> {
        self.key_colors.set_hex(index, hex)?;
        self.refresh();
        Ok(())
    }

    /// Mutes or unmutes a key color slot. Returns the new active state.
    pub fn toggle_key_color(&mut self, index: usize) -> Result<bool> {
        let active = self.key_colors.toggle(index)?;
        self.refresh();
        Ok(active)
    }

    /// Reorders key color slots light to dark.
    pub fn sort_key_colors(&mut self) {
        self.key_colors.sort_by_lightness();
        self.refresh();
    }

    // === Palette ===

    /// Pins a palette entry at `position`.
    pub fn add_at(&mut self, position: u32) -> Option<String> {
        self.palette.add_at(position, &self.gradient)
    }

    /// Pins a palette entry at a lightness percentage.
    pub fn add_by_lightness(&mut self, percent: u8) -> Option<String> {
        self.palette.add_by_lightness(percent, &self.gradient)
    }

    /// Moves a palette entry's pin.
    pub fn retarget(&mut self, id: &str, position: u32) -> bool {
        self.palette.retarget(id, position, &self.gradient)
    }

    /// Moves a palette entry's pin to a typed lightness.
    pub fn retarget_lightness(&mut self, id: &str, percent: u8) -> bool {
        self.palette.retarget_lightness(id, percent, &self.gradient)
    }

    /// Steps a palette entry's lightness.
    pub fn nudge(&mut self, id: &str, delta: i32) -> bool {
        self.palette.nudge(id, delta, &self.gradient)
    }

    /// Removes a palette entry.
    pub fn remove_entry(&mut self, id: &str) -> bool {
        self.palette.remove(id)
    }

    /// Removes every palette entry.
    pub fn clear_palette(&mut self) {
        self.palette.clear();
    }

    /// Sorts the palette light to dark.
    pub fn sort_palette(&mut self) {
        self.palette.sort_by_lightness();
    }

    // === Flat representation ===

    /// Snapshot in flat form. Empty or malformed key slots are left out.
    #[must_use]
    pub fn to_flat(&self) -> FlatDocument {
        FlatDocument {
            keys: self
                .key_colors
                .slots()
                .iter()
                .filter_map(|slot| {
                    slot.expanded_hex().map(|hex| FlatKey {
                        hex,
                        muted: !slot.active,
                    })
                })
                .collect(),
            palette: self
                .palette
                .entries()
                .iter()
                .map(|e| FlatEntry {
                    hex: e.hex_digits().to_string(),
                    lightness: e.lightness,
                })
                .collect(),
        }
    }

    /// Rebuilds a document from its flat form.
    ///
    /// Palette positions are reconstructed from the stored lightness. Colors
    /// are re-resolved against the rebuilt gradient when it is non-empty.
    #[must_use]
    pub fn from_flat(flat: &FlatDocument, settings: DocumentSettings) -> Self {
        let keys = flat
            .keys
            .iter()
            .map(|k| {
                if k.muted {
                    KeyColor::muted(k.hex.clone())
                } else {
                    KeyColor::new(k.hex.clone())
                }
            })
            .collect();
        let mut document = Self::with_key_colors(keys, settings);
        for entry in &flat.palette {
            document
                .palette
                .restore(&entry.hex, entry.lightness, &document.gradient);
        }
        document.palette.sort_by_lightness();
        document
    }

    /// Parses a query string into a document.
    #[must_use]
    pub fn from_query(query: &str, settings: DocumentSettings) -> Self {
        Self::from_flat(&FlatDocument::parse_query(query), settings)
    }

    /// Flat query string of this document.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.to_flat().to_query()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(height: u32) -> DocumentSettings {
        DocumentSettings {
            height,
            ..DocumentSettings::default()
        }
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::default();
        assert_eq!(doc.key_colors().len(), 1);
        assert!(doc.gradient().is_empty());
        assert_eq!(doc.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_key_edits_rebuild_gradient() {
        let mut doc = Document::new(settings(300));
        doc.set_key_hex(0, "3366CC").unwrap();
        assert!(!doc.gradient().is_empty());

        let id = doc.add_at(140).unwrap();
        let blue_hex = doc.palette().get(&id).unwrap().hex.clone();

        doc.set_key_hex(0, "CC3333").unwrap();
        let entry = doc.palette().get(&id).unwrap();
        assert_eq!(entry.position, 140);
        assert_ne!(entry.hex, blue_hex);
    }

    #[test]
    fn test_muting_only_key_keeps_palette() {
        let mut doc = Document::with_key_colors(vec![KeyColor::new("3366CC")], settings(300));
        let id = doc.add_at(100).unwrap();
        let before = doc.palette().get(&id).unwrap().clone();

        assert!(!doc.toggle_key_color(0).unwrap());
        assert!(doc.gradient().is_empty());
        assert_eq!(doc.palette().get(&id).unwrap(), &before);
        assert!(doc.add_at(50).is_none());
    }

    #[test]
    fn test_add_remove_sort_keys() {
        let mut doc = Document::with_key_colors(vec![KeyColor::new("222244")], settings(300));
        assert_eq!(doc.add_key_color("EEDDCC").unwrap(), 1);
        doc.sort_key_colors();
        assert_eq!(doc.key_colors().slots()[0].hex, "EEDDCC");
        doc.remove_key_color(1).unwrap();
        assert_eq!(doc.key_colors().active_hexes(), vec!["EEDDCC"]);
        assert_eq!(doc.gradient().key_markers().len(), 1);
    }

    #[test]
    fn test_flat_roundtrip() {
        let mut doc = Document::with_key_colors(
            vec![KeyColor::new("3366CC"), KeyColor::muted("808080")],
            settings(1000),
        );
        doc.add_by_lightness(90).unwrap();
        doc.add_by_lightness(40).unwrap();

        let query = doc.to_query();
        assert!(query.starts_with("k=3366CC,808080m&p="));

        let loaded = Document::from_query(&query, settings(1000));
        assert_eq!(loaded.to_query(), query);
        let labels: Vec<u8> = loaded.palette().entries().iter().map(|e| e.lightness).collect();
        assert_eq!(labels, vec![90, 40]);
    }

    #[test]
    fn test_from_flat_without_keys_keeps_stored_hex() {
        let loaded = Document::from_query("p=ABCDEF@40", settings(300));
        assert!(loaded.gradient().is_empty());
        let entry = &loaded.palette().entries()[0];
        assert_eq!(entry.hex, "#ABCDEF");
        assert_eq!(entry.lightness, 40);
        assert_eq!(entry.position, 180);
    }
}
