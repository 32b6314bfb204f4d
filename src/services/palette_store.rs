//! Palette binding store.
//!
//! Holds the user's pinned palette entries and keeps their colors in sync with
//! the live gradient. An entry's identity is its position, not its color: when
//! the gradient changes every entry stays where it is and takes on the color
//! the gradient now produces there.
//!
//! Every operation takes the current [`Gradient`] explicitly. Operations that
//! need to resolve a color are no-ops on an empty gradient, and out-of-range
//! positions are clamped to `0..height`.

use serde::Serialize;
use tracing::debug;

use crate::gradient::{position_for_lightness, Gradient};
use crate::models::{Lch, PaletteEntry, RgbColor};

/// Ordered list of palette entries, light to dark.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaletteStore {
    entries: Vec<PaletteEntry>,
}

/// Largest valid pin position for a gradient.
fn clamp_position(position: u32, gradient: &Gradient) -> u32 {
    position.min(gradient.height().saturating_sub(1))
}

impl PaletteStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Display index (0-based) of an entry.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Entries paired with their 1-based display numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &PaletteEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Pins a new entry at `position`.
    ///
    /// The entry is inserted after the last entry whose position is less than
    /// or equal to the new one. Returns the new entry's id, or `None` when the
    /// gradient is empty.
    pub fn add_at(&mut self, position: u32, gradient: &Gradient) -> Option<String> {
        let position = clamp_position(position, gradient);
        let color = gradient.resolve(position)?;
        let entry = PaletteEntry::new(position, color);
        let id = entry.id.clone();

        let index = self
            .entries
            .iter()
            .rposition(|e| e.position <= position)
            .map_or(0, |i| i + 1);
        self.entries.insert(index, entry);

        debug!("Pinned palette entry at {position} ({})", color.to_hex());
        Some(id)
    }

    /// Pins a new entry at the position of a typed lightness percentage.
    ///
    /// Unlike [`add_at`](Self::add_at), ordering uses lightness labels: the
    /// list is ordered light to dark by label and the new entry goes after
    /// every entry whose label is at least `percent`. Returns `None` when the
    /// gradient is empty.
    pub fn add_by_lightness(&mut self, percent: u8, gradient: &Gradient) -> Option<String> {
        let percent = percent.min(100);
        let position = clamp_position(position_for_lightness(percent, gradient.height()), gradient);
        let color = gradient.resolve(position)?;
        let entry = PaletteEntry::new(position, color);
        let id = entry.id.clone();

        self.entries.sort_by_key(|e| std::cmp::Reverse(e.lightness));
        let index = self.entries.partition_point(|e| e.lightness >= percent);
        self.entries.insert(index, entry);

        debug!("Pinned palette entry at L{percent} (position {position})");
        Some(id)
    }

    /// Moves an entry's pin, re-resolves its color and re-sorts the palette.
    ///
    /// Returns `false` if the entry does not exist or the gradient is empty.
    pub fn retarget(&mut self, id: &str, position: u32, gradient: &Gradient) -> bool {
        let position = clamp_position(position, gradient);
        let Some(color) = gradient.resolve(position) else {
            return false;
        };
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        entry.position = position;
        entry.apply_color(color);
        self.sort_by_lightness();
        true
    }

    /// Moves an entry's pin to the position of a typed lightness percentage.
    ///
    /// The entry's lightness afterwards is the resolved one, which can differ
    /// from `percent` (for example when the position is clamped to the last
    /// row).
    pub fn retarget_lightness(&mut self, id: &str, percent: u8, gradient: &Gradient) -> bool {
        let position = position_for_lightness(percent.min(100), gradient.height());
        self.retarget(id, position, gradient)
    }

    /// Steps an entry's lightness by `delta` percentage points.
    pub fn nudge(&mut self, id: &str, delta: i32, gradient: &Gradient) -> bool {
        let Some(entry) = self.get(id) else {
            return false;
        };
        let percent = (i32::from(entry.lightness) + delta).clamp(0, 100);
        self.retarget_lightness(id, u8::try_from(percent).unwrap_or(0), gradient)
    }

    /// Re-resolves every entry at its unchanged position.
    ///
    /// A no-op on an empty gradient.
    pub fn recompute_all(&mut self, gradient: &Gradient) {
        if gradient.is_empty() {
            return;
        }
        for entry in &mut self.entries {
            if let Some(color) = gradient.resolve(entry.position) {
                entry.apply_color(color);
            }
        }
        debug!("Recomputed {} palette entries", self.entries.len());
    }

    /// Removes an entry. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stable sort ascending by position (light to dark).
    pub fn sort_by_lightness(&mut self) {
        self.entries.sort_by_key(|e| e.position);
    }

    /// Re-creates an entry from its flat `(hex, lightness)` form.
    ///
    /// The position is reconstructed from the lightness. The color is
    /// re-resolved when the gradient is non-empty; otherwise the stored hex and
    /// lightness are kept. Returns `None` for a malformed hex.
    pub fn restore(&mut self, hex: &str, lightness: u8, gradient: &Gradient) -> Option<String> {
        let rgb = RgbColor::from_hex(hex).ok()?;
        let lightness = lightness.min(100);
        let position = clamp_position(position_for_lightness(lightness, gradient.height()), gradient);
        let mut entry = PaletteEntry::new(position, Lch::from_rgb(rgb));
        match gradient.resolve(position) {
            Some(color) => entry.apply_color(color),
            None => {
                entry.hex = rgb.to_hex();
                entry.lightness = lightness;
            }
        }
        let id = entry.id.clone();
        self.entries.push(entry);
        Some(id)
    }
}
