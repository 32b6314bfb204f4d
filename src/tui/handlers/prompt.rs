//! Prompt input handler.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::ColorError;
use crate::tui::{AppState, Component, PromptEvent, PromptKind, PromptValue};

/// Handle input while a prompt is open
pub fn handle_prompt_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    let Some(prompt) = state.prompt.as_mut() else {
        return Ok(());
    };

    if key.code == KeyCode::Char('v') && key.modifiers.contains(KeyModifiers::CONTROL) {
        match state.clipboard.paste() {
            Ok(text) => prompt.paste(&text),
            Err(e) => state.error_message = Some(format!("{e:#}")),
        }
        return Ok(());
    }

    match prompt.handle_input(key) {
        Some(PromptEvent::Confirmed(kind, value)) => {
            state.prompt = None;
            apply_prompt(state, kind, value);
            state.clamp_cursors();
        }
        Some(PromptEvent::Cancelled) => {
            state.prompt = None;
            state.set_status("Cancelled");
        }
        None => {}
    }
    Ok(())
}

/// Applies a confirmed prompt value to the document.
fn apply_prompt(state: &mut AppState, kind: PromptKind, value: PromptValue) {
    match (kind, value) {
        (PromptKind::AddKey, PromptValue::Hex(hex)) => {
            match state.document.add_key_color(&hex) {
                Ok(index) => {
                    state.key_cursor = index;
                    state.set_status(format!("Added key color #{hex}"));
                }
                Err(e) => state.set_error(e.to_string()),
            }
        }
        (PromptKind::EditKey(index), PromptValue::Hex(hex)) => {
            match state.document.set_key_hex(index, &hex) {
                Ok(()) => state.set_status(format!("Key color set to #{hex}")),
                Err(e) => state.set_error(e.to_string()),
            }
        }
        (PromptKind::PinLightness, PromptValue::Lightness(percent)) => {
            match state.document.add_by_lightness(percent) {
                Some(id) => {
                    state.select_entry(&id);
                    state.set_status(format!("Pinned L{percent}"));
                }
                None => state.set_error(ColorError::EmptyGradient.to_string()),
            }
        }
        (PromptKind::EditLightness(id), PromptValue::Lightness(percent)) => {
            if state.document.retarget_lightness(&id, percent) {
                state.select_entry(&id);
                if let Some(entry) = state.document.palette().get(&id) {
                    let message = format!("Pin moved to {} L{}", entry.hex, entry.lightness);
                    state.set_status(message);
                }
            } else {
                state.set_error("Pin could not be moved");
            }
        }
        // Prompt kinds only ever produce their own value type
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;
    use crate::tui::Prompt;

    fn type_and_confirm(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_prompt_input(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        handle_prompt_input(state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_add_key_prompt() {
        let mut state = test_state();
        state.prompt = Some(Prompt::new(PromptKind::AddKey));
        type_and_confirm(&mut state, "000000");
        assert!(state.prompt.is_none());
        assert_eq!(state.document.key_colors().len(), 2);
        assert_eq!(state.key_cursor, 1);
    }

    #[test]
    fn test_pin_lightness_prompt() {
        let mut state = test_state();
        state.prompt = Some(Prompt::new(PromptKind::PinLightness));
        type_and_confirm(&mut state, "50");
        let entries = state.document.palette().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, 150);
        assert_eq!(entries[0].lightness, 50);
    }

    #[test]
    fn test_invalid_input_keeps_prompt_open() {
        let mut state = test_state();
        state.prompt = Some(Prompt::new(PromptKind::PinLightness));
        type_and_confirm(&mut state, "150");
        assert!(state.prompt.is_some());
        assert!(state.document.palette().is_empty());
    }

    #[test]
    fn test_edit_lightness_prompt_moves_pin() {
        let mut state = test_state();
        let id = state.document.add_at(30).unwrap();
        state.prompt = Some(Prompt::new(PromptKind::EditLightness(id.clone())));
        type_and_confirm(&mut state, "20");
        let entry = state.document.palette().get(&id).unwrap();
        assert_eq!(entry.position, 240);
    }

    #[test]
    fn test_escape_closes_prompt() {
        let mut state = test_state();
        state.prompt = Some(Prompt::new(PromptKind::AddKey));
        handle_prompt_input(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(state.prompt.is_none());
        assert_eq!(state.status_message, "Cancelled");
    }
}
