//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod prompt;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::shortcuts::ShortcutRegistry;
use crate::tui::AppState;

pub use actions::dispatch_action;
pub use prompt::handle_prompt_input;

/// Handle keyboard input events. Returns `true` when the editor should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Route to the prompt while one is open
    if state.prompt.is_some() {
        handle_prompt_input(state, key)?;
        return Ok(false);
    }

    let registry = ShortcutRegistry::new();
    match registry.lookup(key) {
        Some(action) => {
            state.clear_error();
            dispatch_action(state, action)
        }
        // No action mapped - ignore key
        None => Ok(false),
    }
}
