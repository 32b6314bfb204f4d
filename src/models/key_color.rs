//! Key color slots that feed the gradient.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::lch::to_perceptual;
use super::rgb::normalize_hex;

/// A user-specified anchor color.
///
/// `hex` holds what the user typed (3 or 6 hex digits, uppercase, no `#`).
/// It may be empty or malformed while the user is still editing; such slots
/// are simply ignored by the gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColor {
    /// Hex digits as entered
    pub hex: String,
    /// Muted slots (`active == false`) do not feed the gradient
    pub active: bool,
}

impl KeyColor {
    /// Creates an active key color.
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: clean_hex_input(&hex.into()),
            active: true,
        }
    }

    /// Creates a muted key color.
    pub fn muted(hex: impl Into<String>) -> Self {
        Self {
            active: false,
            ..Self::new(hex)
        }
    }

    /// Six-digit uppercase hex, or `None` if the slot is empty or malformed.
    #[must_use]
    pub fn expanded_hex(&self) -> Option<String> {
        normalize_hex(&self.hex)
    }

    /// Whether the slot holds a usable color.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.expanded_hex().is_some()
    }

    /// Lightness percentage of the slot's color, if it parses.
    #[must_use]
    pub fn lightness(&self) -> Option<u8> {
        to_perceptual(&self.hex).ok().map(|c| c.lightness_percent())
    }
}

/// Cleans pasted text into hex digits for a key color slot.
///
/// Drops everything that is not a hex digit, upper-cases the rest and keeps at
/// most six digits, so `"#3366cc;"` becomes `3366CC`.
#[must_use]
pub fn sanitize_pasted_hex(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_hexdigit)
        .take(6)
        .collect::<String>()
        .to_ascii_uppercase()
}

fn clean_hex_input(hex: &str) -> String {
    let hex = hex.trim();
    hex.strip_prefix('#').unwrap_or(hex).to_ascii_uppercase()
}

/// Ordered key color slots with a UI-imposed cap.
///
/// At least one slot always exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColorSet {
    slots: Vec<KeyColor>,
    max_slots: usize,
}

impl KeyColorSet {
    /// Creates a set with a single empty active slot.
    #[must_use]
    pub fn new(max_slots: usize) -> Self {
        Self {
            slots: vec![KeyColor::new("")],
            max_slots: max_slots.max(1),
        }
    }

    /// Creates a set from existing colors.
    ///
    /// Every color is kept, even past `max_slots`; the cap only limits
    /// [`add`](Self::add). An empty list yields one empty slot.
    #[must_use]
    pub fn from_colors(colors: Vec<KeyColor>, max_slots: usize) -> Self {
        let max_slots = max_slots.max(1);
        let mut slots = colors;
        if slots.len() > max_slots {
            warn!(
                "Loaded {} key colors, more than the {max_slots} slots the editor adds",
                slots.len()
            );
        }
        if slots.is_empty() {
            slots.push(KeyColor::new(""));
        }
        Self { slots, max_slots }
    }

    /// All slots in display order.
    #[must_use]
    pub fn slots(&self) -> &[KeyColor] {
        &self.slots
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a set keeps at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of slots.
    #[must_use]
    pub const fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Whether another slot can be added.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.slots.len() < self.max_slots
    }

    /// Appends a slot and returns its index.
    pub fn add(&mut self, hex: &str) -> Result<usize> {
        if !self.can_add() {
            anyhow::bail!("Cannot add more than {} key colors", self.max_slots);
        }
        self.slots.push(KeyColor::new(hex));
        Ok(self.slots.len() - 1)
    }

    /// Whether the slot at `index` may be deleted.
    ///
    /// The only slot can never be deleted, and neither can the only slot that
    /// holds a valid color.
    #[must_use]
    pub fn can_remove(&self, index: usize) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return false;
        };
        if self.slots.len() == 1 {
            return false;
        }
        let valid_count = self.slots.iter().filter(|s| s.is_valid()).count();
        !(slot.is_valid() && valid_count == 1)
    }

    /// Deletes the slot at `index`.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.slots.len() {
            anyhow::bail!("Key color {} does not exist", index + 1);
        }
        if self.slots.len() == 1 {
            anyhow::bail!("At least one key color slot is required");
        }
        self.slots.remove(index);
        Ok(())
    }

    /// Replaces the hex text of a slot.
    pub fn set_hex(&mut self, index: usize, hex: &str) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("Key color {} does not exist", index + 1))?;
        slot.hex = clean_hex_input(hex);
        Ok(())
    }

    /// Flips a slot between active and muted. Returns the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| anyhow::anyhow!("Key color {} does not exist", index + 1))?;
        slot.active = !slot.active;
        Ok(slot.active)
    }

    /// Reorders slots from light to dark.
    ///
    /// Slots without a valid color count as lightness 0. The sort is stable.
    pub fn sort_by_lightness(&mut self) {
        self.slots
            .sort_by_key(|slot| std::cmp::Reverse(slot.lightness().unwrap_or(0)));
    }

    /// Expanded hexes of active, valid slots, in slot order.
    #[must_use]
    pub fn active_hexes(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .filter_map(KeyColor::expanded_hex)
            .collect()
    }

    /// Display labels such as `KEY-1 L56` (`KEY-2` when the slot has no color).
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot.lightness() {
                Some(l) => format!("KEY-{} L{}", i + 1, l),
                None => format!("KEY-{}", i + 1),
            })
            .collect()
    }
}

impl Default for KeyColorSet {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MAX_KEY_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(hexes: &[&str]) -> KeyColorSet {
        KeyColorSet::from_colors(hexes.iter().map(|h| KeyColor::new(*h)).collect(), 7)
    }

    #[test]
    fn test_new_set_has_one_slot() {
        let set = KeyColorSet::new(7);
        assert_eq!(set.len(), 1);
        assert!(set.active_hexes().is_empty());
    }

    #[test]
    fn test_key_color_input_is_cleaned() {
        let key = KeyColor::new(" #3366cc ");
        assert_eq!(key.hex, "3366CC");
        assert!(key.is_valid());
        assert_eq!(KeyColor::new("abc").expanded_hex().as_deref(), Some("AABBCC"));
    }

    #[test]
    fn test_add_respects_cap() {
        let mut set = KeyColorSet::new(2);
        assert_eq!(set.add("FFF").unwrap(), 1);
        assert!(set.add("000").is_err());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_colors_fills_empty() {
        let set = KeyColorSet::from_colors(Vec::new(), 3);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_colors_keeps_colors_past_cap() {
        let many: Vec<KeyColor> = (0..9).map(|i| KeyColor::new(format!("{i}{i}{i}"))).collect();
        let mut set = KeyColorSet::from_colors(many, 5);
        assert_eq!(set.len(), 9);
        assert_eq!(set.active_hexes().last().map(String::as_str), Some("888888"));
        assert!(!set.can_add());
        assert!(set.add("FFF").is_err());
    }

    #[test]
    fn test_remove_keeps_one_slot() {
        let mut set = set_of(&["3366CC", ""]);
        assert!(set.can_remove(1));
        // Only valid color cannot be removed while another slot exists
        assert!(!set.can_remove(0));
        set.remove(1).unwrap();
        assert!(set.remove(0).is_err());
        assert!(set.remove(5).is_err());
    }

    #[test]
    fn test_toggle_and_active_hexes() {
        let mut set = set_of(&["3366CC", "F0F", "nope"]);
        assert_eq!(set.active_hexes(), vec!["3366CC", "FF00FF"]);

        assert!(!set.toggle(0).unwrap());
        assert_eq!(set.active_hexes(), vec!["FF00FF"]);
        assert!(set.toggle(0).unwrap());
    }

    #[test]
    fn test_sort_by_lightness() {
        let mut set = set_of(&["000000", "", "FFFFFF", "3366CC"]);
        set.sort_by_lightness();
        let hexes: Vec<&str> = set.slots().iter().map(|s| s.hex.as_str()).collect();
        assert_eq!(hexes, vec!["FFFFFF", "3366CC", "000000", ""]);
    }

    #[test]
    fn test_sanitize_pasted_hex() {
        assert_eq!(sanitize_pasted_hex("#3366cc;"), "3366CC");
        assert_eq!(sanitize_pasted_hex("rgb: 12 34 56 78"), "123456");
        assert_eq!(sanitize_pasted_hex("xyz"), "");
    }

    #[test]
    fn test_labels() {
        let set = set_of(&["FFFFFF", ""]);
        assert_eq!(set.labels(), vec!["KEY-1 L100", "KEY-2"]);
    }
}
