//! Centralized shortcut and action system.
//!
//! Maps key events to [`Action`]s. What an action does can depend on which
//! pane has focus; that interpretation lives in the TUI handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Cycle focus between panes
    NextPane,
    /// Cycle focus backwards
    PreviousPane,
    /// Move the cursor up one step
    MoveUp,
    /// Move the cursor down one step
    MoveDown,
    /// Fine move up, or nudge the selected pin lighter
    FineUp,
    /// Fine move down, or nudge the selected pin darker
    FineDown,
    /// Jump to the top of the focused list or gradient
    JumpToFirst,
    /// Jump to the bottom of the focused list or gradient
    JumpToLast,

    // === PINS AND SLOTS ===
    /// Pin at the gradient cursor, or add a key slot
    Add,
    /// Pin at the gradient cursor
    PinAtCursor,
    /// Pin by typed lightness
    PinByLightness,
    /// Edit the selected key hex or pin lightness
    Edit,
    /// Delete the selected key slot or pin
    Delete,
    /// Mute or unmute the selected key slot
    ToggleMute,
    /// Sort key slots light to dark
    SortKeys,
    /// Remove every pin
    ClearPalette,

    // === CLIPBOARD ===
    /// Copy the palette as CSS variables
    CopyCss,
    /// Copy the palette as an SVG strip
    CopySvg,
    /// Copy the document as a query string
    CopyQuery,
    /// Copy the selected hex
    CopyHex,
    /// Paste a hex into the selected key slot
    PasteHex,

    // === GENERAL ===
    /// Leave the editor
    Quit,
}

impl Action {
    /// Action ID string used in help hints.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NextPane => "next_pane",
            Self::PreviousPane => "previous_pane",
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::FineUp => "fine_up",
            Self::FineDown => "fine_down",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::Add => "add",
            Self::PinAtCursor => "pin_at_cursor",
            Self::PinByLightness => "pin_by_lightness",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::ToggleMute => "toggle_mute",
            Self::SortKeys => "sort_keys",
            Self::ClearPalette => "clear_palette",
            Self::CopyCss => "copy_css",
            Self::CopySvg => "copy_svg",
            Self::CopyQuery => "copy_query",
            Self::CopyHex => "copy_hex",
            Self::PasteHex => "paste_hex",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys since the character already
    /// carries the case. Terminals disagree on whether they report it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register_shortcuts();
        registry
    }

    fn register_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Tab, M::NONE, Action::NextPane);
        self.register(K::BackTab, M::SHIFT, Action::PreviousPane);
        self.register(K::BackTab, M::NONE, Action::PreviousPane);
        self.register(K::Up, M::NONE, Action::MoveUp);
        self.register(K::Down, M::NONE, Action::MoveDown);
        self.register(K::Char('k'), M::NONE, Action::MoveUp);
        self.register(K::Char('j'), M::NONE, Action::MoveDown);
        self.register(K::Char('K'), M::NONE, Action::FineUp);
        self.register(K::Char('J'), M::NONE, Action::FineDown);
        self.register(K::Up, M::SHIFT, Action::FineUp);
        self.register(K::Down, M::SHIFT, Action::FineDown);
        self.register(K::Home, M::NONE, Action::JumpToFirst);
        self.register(K::End, M::NONE, Action::JumpToLast);

        // === PINS AND SLOTS ===
        self.register(K::Char('a'), M::NONE, Action::Add);
        self.register(K::Enter, M::NONE, Action::PinAtCursor);
        self.register(K::Char('l'), M::NONE, Action::PinByLightness);
        self.register(K::Char('e'), M::NONE, Action::Edit);
        self.register(K::Char('d'), M::NONE, Action::Delete);
        self.register(K::Delete, M::NONE, Action::Delete);
        self.register(K::Char('m'), M::NONE, Action::ToggleMute);
        self.register(K::Char(' '), M::NONE, Action::ToggleMute);
        self.register(K::Char('S'), M::NONE, Action::SortKeys);
        self.register(K::Char('C'), M::NONE, Action::ClearPalette);

        // === CLIPBOARD ===
        self.register(K::Char('c'), M::NONE, Action::CopyCss);
        self.register(K::Char('v'), M::NONE, Action::CopySvg);
        self.register(K::Char('u'), M::NONE, Action::CopyQuery);
        self.register(K::Char('y'), M::NONE, Action::CopyHex);
        self.register(K::Char('p'), M::NONE, Action::PasteHex);
        self.register(K::Char('v'), M::CONTROL, Action::PasteHex);

        // === GENERAL ===
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::NextPane)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::PinAtCursor)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_uppercase_with_or_without_shift() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(Action::FineDown)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('J'), KeyModifiers::NONE)),
            Some(Action::FineDown)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(Action::ClearPalette)
        );
    }

    #[test]
    fn test_copy_shortcuts() {
        let registry = ShortcutRegistry::new();
        let expected = [
            ('c', Action::CopyCss),
            ('v', Action::CopySvg),
            ('u', Action::CopyQuery),
            ('y', Action::CopyHex),
        ];
        for (c, action) in expected {
            assert_eq!(
                registry.lookup(key(KeyCode::Char(c), KeyModifiers::NONE)),
                Some(action),
                "key {c}"
            );
        }
    }

    #[test]
    fn test_control_modifier_is_kept() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Char('v'), KeyModifiers::CONTROL)),
            Some(Action::PasteHex)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_action_ids_are_unique() {
        let registry = ShortcutRegistry::new();
        let mut ids: Vec<&str> = registry.bindings.values().map(Action::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert!(ids.len() >= 20);
    }
}
