//! Key color slot list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{pane_block, AppState, Focus};
use crate::models::RgbColor;

/// Key color pane widget
pub struct KeyColorsPanel;

impl KeyColorsPanel {
    /// Render the key color slots
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let focused = state.focus == Focus::Keys;
        let key_colors = state.document.key_colors();
        let title = format!(" Keys {}/{} ", key_colors.len(), key_colors.max_slots());
        let block = pane_block(&title, focused, theme);

        let labels = key_colors.labels();
        let mut lines: Vec<Line> = Vec::new();
        for (index, (slot, label)) in key_colors.slots().iter().zip(labels).enumerate() {
            let selected = focused && index == state.key_cursor;

            let swatch = match RgbColor::from_hex(&slot.hex) {
                Ok(rgb) => Span::styled("    ", Style::default().bg(rgb.to_ratatui_color())),
                Err(_) => Span::styled(" ?? ", Style::default().fg(theme.error)),
            };

            let hex = if slot.hex.is_empty() {
                "------".to_string()
            } else {
                slot.hex.clone()
            };
            let mut text_style = if slot.active {
                Style::default().fg(theme.text)
            } else {
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            if selected {
                text_style = text_style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
            }

            lines.push(Line::from(vec![
                Span::raw(if selected { "▶" } else { " " }),
                swatch,
                Span::styled(format!(" {hex:<6} "), text_style),
                Span::styled(label, Style::default().fg(theme.text_secondary)),
            ]));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
