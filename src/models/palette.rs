//! Palette entries pinned to positions on the gradient.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Lch;

/// A saved sample bound to a fixed position on the gradient.
///
/// `position` is the pin. `color`, `hex` and `lightness` are derived from it
/// and are recomputed whenever the gradient changes, so an entry keeps its
/// place and takes on whatever color the gradient now produces there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Pinned position on the gradient axis
    pub position: u32,
    /// Resolved perceptual color
    pub color: Lch,
    /// Resolved color as `#RRGGBB`
    pub hex: String,
    /// `round(color.l * 100)`
    pub lightness: u8,
}

impl PaletteEntry {
    /// Creates an entry at `position` with the given resolved color.
    #[must_use]
    pub fn new(position: u32, color: Lch) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            position,
            color,
            hex: color.to_hex(),
            lightness: color.lightness_percent(),
        }
    }

    /// Replaces the derived fields with a freshly resolved color.
    pub fn apply_color(&mut self, color: Lch) {
        self.color = color;
        self.hex = color.to_hex();
        self.lightness = color.lightness_percent();
    }

    /// Hex digits without the leading `#`.
    #[must_use]
    pub fn hex_digits(&self) -> &str {
        self.hex.trim_start_matches('#')
    }

    /// Whether text drawn on this entry's swatch should be dark.
    #[must_use]
    pub fn prefers_dark_text(&self) -> bool {
        self.color.prefers_dark_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_fields() {
        let color = Lch::new(0.5, 0.0, 0.0);
        let entry = PaletteEntry::new(150, color);
        assert_eq!(entry.position, 150);
        assert_eq!(entry.lightness, 50);
        assert_eq!(entry.hex, color.to_hex());
        assert_eq!(entry.hex_digits().len(), 6);
        assert!(Uuid::parse_str(&entry.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = PaletteEntry::new(0, Lch::white(0.0));
        let b = PaletteEntry::new(0, Lch::white(0.0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_color_keeps_position() {
        let mut entry = PaletteEntry::new(42, Lch::white(0.0));
        entry.apply_color(Lch::black(0.0));
        assert_eq!(entry.position, 42);
        assert_eq!(entry.hex, "#000000");
        assert_eq!(entry.lightness, 0);
        assert!(!entry.prefers_dark_text());
    }
}
