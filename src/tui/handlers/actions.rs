//! Action dispatch for the main editor view.
//!
//! The same action can mean different things depending on the focused pane:
//! `a` adds a key slot in the key pane and pins at the cursor elsewhere.

use anyhow::Result;
use tracing::debug;

use crate::export::{self, ExportFormat};
use crate::models::ColorError;
use crate::shortcuts::Action;
use crate::tui::{AppState, Focus, Prompt, PromptKind};

/// Apply an action. Returns `true` when the editor should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!("Dispatching {} in {:?} pane", action.id(), state.focus);

    match action {
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        Action::NextPane => state.focus = state.focus.next(),
        Action::PreviousPane => state.focus = state.focus.previous(),
        Action::MoveUp => move_cursor(state, -1, false),
        Action::MoveDown => move_cursor(state, 1, false),
        Action::FineUp => fine_step(state, -1),
        Action::FineDown => fine_step(state, 1),
        Action::JumpToFirst => jump(state, true),
        Action::JumpToLast => jump(state, false),
        Action::Add => match state.focus {
            Focus::Keys => open_add_key(state),
            Focus::Gradient | Focus::Palette => pin_at_cursor(state),
        },
        Action::PinAtCursor => match state.focus {
            Focus::Keys => open_edit(state),
            Focus::Gradient => pin_at_cursor(state),
            Focus::Palette => open_edit(state),
        },
        Action::PinByLightness => {
            if state.document.gradient().is_empty() {
                state.set_error(ColorError::EmptyGradient.to_string());
            } else {
                state.prompt = Some(Prompt::new(PromptKind::PinLightness));
            }
        }
        Action::Edit => open_edit(state),
        Action::Delete => delete_selected(state),
        Action::ToggleMute => toggle_mute(state),
        Action::SortKeys => {
            state.document.sort_key_colors();
            state.key_cursor = 0;
            state.set_status("Key colors sorted light to dark");
        }
        Action::ClearPalette => {
            state.document.clear_palette();
            state.palette_cursor = 0;
            state.set_status("Palette cleared");
        }
        Action::CopyCss => copy_export(state, ExportFormat::Css),
        Action::CopySvg => copy_export(state, ExportFormat::Svg),
        Action::CopyQuery => copy_export(state, ExportFormat::Query),
        Action::CopyHex => copy_hex(state),
        Action::PasteHex => paste_hex(state),
    }

    state.clamp_cursors();
    Ok(false)
}

/// Moves the focused cursor by `direction` list items or gradient rows.
fn move_cursor(state: &mut AppState, direction: i32, fine: bool) {
    match state.focus {
        Focus::Keys => {
            let len = state.document.key_colors().len();
            state.key_cursor = step_index(state.key_cursor, direction, len);
        }
        Focus::Palette => {
            let len = state.document.palette().len();
            state.palette_cursor = step_index(state.palette_cursor, direction, len);
        }
        Focus::Gradient => {
            let step = if fine { 1 } else { state.row_step() };
            state.cursor = if direction < 0 {
                state.cursor.saturating_sub(step)
            } else {
                state.cursor.saturating_add(step).min(state.max_cursor())
            };
        }
    }
}

/// Fine cursor move on the gradient; lightness nudge on a selected pin.
fn fine_step(state: &mut AppState, direction: i32) {
    if state.focus != Focus::Palette {
        move_cursor(state, direction, true);
        return;
    }

    let Some(id) = state.selected_entry_id() else {
        return;
    };
    // Up on screen is lighter
    if state.document.nudge(&id, -direction) {
        state.select_entry(&id);
        if let Some(entry) = state.document.palette().get(&id) {
            let message = format!("Pin moved to {} L{}", entry.hex, entry.lightness);
            state.set_status(message);
        }
    }
}

fn jump(state: &mut AppState, first: bool) {
    match state.focus {
        Focus::Keys => {
            state.key_cursor = if first { 0 } else { usize::MAX };
        }
        Focus::Palette => {
            state.palette_cursor = if first { 0 } else { usize::MAX };
        }
        Focus::Gradient => {
            state.cursor = if first { 0 } else { state.max_cursor() };
        }
    }
}

fn step_index(index: usize, direction: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if direction < 0 {
        index.saturating_sub(1)
    } else {
        (index + 1).min(len - 1)
    }
}

fn open_add_key(state: &mut AppState) {
    if state.document.key_colors().can_add() {
        state.prompt = Some(Prompt::new(PromptKind::AddKey));
    } else {
        let max = state.document.key_colors().max_slots();
        state.set_error(format!("At most {max} key colors"));
    }
}

fn open_edit(state: &mut AppState) {
    match state.focus {
        Focus::Keys => {
            let hex = state
                .document
                .key_colors()
                .slots()
                .get(state.key_cursor)
                .map(|slot| slot.hex.clone())
                .unwrap_or_default();
            state.prompt = Some(Prompt::with_input(
                PromptKind::EditKey(state.key_cursor),
                hex,
            ));
        }
        Focus::Palette => {
            let Some(id) = state.selected_entry_id() else {
                state.set_error("No pin selected");
                return;
            };
            let lightness = state
                .document
                .palette()
                .get(&id)
                .map(|e| e.lightness.to_string())
                .unwrap_or_default();
            state.prompt = Some(Prompt::with_input(PromptKind::EditLightness(id), lightness));
        }
        Focus::Gradient => {
            state.set_status("Select a key color or a pin to edit");
        }
    }
}

fn pin_at_cursor(state: &mut AppState) {
    match state.document.add_at(state.cursor) {
        Some(id) => {
            state.select_entry(&id);
            if let Some(entry) = state.document.palette().get(&id) {
                let message = format!(
                    "Pinned {} L{} at position {}",
                    entry.hex, entry.lightness, entry.position
                );
                state.set_status(message);
            }
        }
        None => state.set_error(ColorError::EmptyGradient.to_string()),
    }
}

fn delete_selected(state: &mut AppState) {
    match state.focus {
        Focus::Keys => {
            if !state.document.key_colors().can_remove(state.key_cursor) {
                state.set_error("The last key color slot cannot be removed");
                return;
            }
            match state.document.remove_key_color(state.key_cursor) {
                Ok(()) => state.set_status("Key color removed"),
                Err(e) => state.set_error(e.to_string()),
            }
        }
        Focus::Palette => {
            if let Some(id) = state.selected_entry_id() {
                state.document.remove_entry(&id);
                state.set_status("Pin removed");
            }
        }
        Focus::Gradient => {
            state.set_status("Switch to the palette pane to remove pins");
        }
    }
}

fn toggle_mute(state: &mut AppState) {
    if state.focus != Focus::Keys {
        return;
    }
    match state.document.toggle_key_color(state.key_cursor) {
        Ok(true) => state.set_status("Key color enabled"),
        Ok(false) => state.set_status("Key color muted"),
        Err(e) => state.set_error(e.to_string()),
    }
}

fn copy_export(state: &mut AppState, format: ExportFormat) {
    let content = match export::render(format, &state.document, &state.config.export) {
        Ok(content) => content,
        Err(e) => {
            state.set_error(format!("Failed to render {format}: {e}"));
            return;
        }
    };
    if content.is_empty() {
        state.set_error("Nothing to copy. Pin some colors first");
        return;
    }
    match state.clipboard.copy(&content, format.label()) {
        Ok(message) => state.set_status(message),
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

fn copy_hex(state: &mut AppState) {
    let hex = match state.focus {
        Focus::Keys => state
            .document
            .key_colors()
            .slots()
            .get(state.key_cursor)
            .and_then(|slot| slot.expanded_hex())
            .map(|hex| format!("#{hex}")),
        Focus::Gradient => state
            .document
            .gradient()
            .resolve(state.cursor)
            .map(|color| color.to_hex()),
        Focus::Palette => state
            .document
            .palette()
            .entries()
            .get(state.palette_cursor)
            .map(|e| e.hex.clone()),
    };

    let Some(hex) = hex else {
        state.set_error("No color to copy");
        return;
    };
    match state.clipboard.copy(&hex, &hex) {
        Ok(message) => state.set_status(message),
        Err(e) => state.set_error(format!("{e:#}")),
    }
}

fn paste_hex(state: &mut AppState) {
    if state.focus != Focus::Keys {
        state.set_status("Switch to the key pane to paste a color");
        return;
    }
    let text = match state.clipboard.paste() {
        Ok(text) => text,
        Err(e) => {
            state.set_error(format!("{e:#}"));
            return;
        }
    };
    let mut prompt = Prompt::new(PromptKind::EditKey(state.key_cursor));
    prompt.paste(&text);
    state.prompt = Some(prompt);
}
