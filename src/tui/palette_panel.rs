//! Palette entry list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::gradient_view::text_color;
use super::{pane_block, AppState, Focus};

/// Palette pane widget
pub struct PalettePanel;

impl PalettePanel {
    /// Render the numbered palette
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let focused = state.focus == Focus::Palette;
        let palette = state.document.palette();
        let title = format!(" Palette ({}) ", palette.len());
        let block = pane_block(&title, focused, theme);

        if palette.is_empty() {
            let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
                " Enter pins the gradient cursor",
                Style::default().fg(theme.text_muted),
            )))])
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = palette
            .numbered()
            .map(|(index, entry)| {
                let rgb = entry.color.to_rgb();
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {index:>2} "),
                        Style::default()
                            .bg(rgb.to_ratatui_color())
                            .fg(text_color(&entry.color)),
                    ),
                    Span::styled(
                        format!(" {} ", entry.hex),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled(
                        format!("L{:<3} @{}", entry.lightness, entry.position),
                        Style::default().fg(theme.text_secondary),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶");

        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.palette_cursor));
        }
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
