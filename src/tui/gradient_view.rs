//! Gradient bar widget.
//!
//! Maps the rows of the pane onto the document height, one sampled color per
//! row, with key markers, pins and the cursor drawn on top.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{pane_block, AppState, Focus};
use crate::models::Lch;

/// Gradient widget renders the lightness axis
pub struct GradientView;

impl GradientView {
    /// Render the gradient bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = pane_block(" Gradient ", state.focus == Focus::Gradient, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = inner.height;
        state.gradient_rows.set(rows);
        if rows == 0 || inner.width < 4 {
            return;
        }

        let gradient = state.document.gradient();
        if gradient.is_empty() {
            let placeholder = Paragraph::new(
                "No active key colors.\n\nTab to the key pane and press a to add one.",
            )
            .style(Style::default().fg(theme.text_muted))
            .wrap(Wrap { trim: true });
            f.render_widget(placeholder, inner);
            return;
        }

        let rows = u32::from(rows);
        let colors = gradient.sample_rows(rows);
        let labels = Self::row_labels(state, rows);
        let cursor_row = gradient.row_for_position(state.cursor, rows);
        let swatch_width = usize::from(inner.width.saturating_sub(2));

        let lines: Vec<Line> = colors
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(row, (color, label))| {
                let is_cursor = row as u32 == cursor_row;
                let indicator = if is_cursor {
                    Span::styled("▶ ", Style::default().fg(theme.accent))
                } else {
                    Span::raw("  ")
                };
                let label = if is_cursor {
                    let mut text = format!("{} L{}", state.cursor, color.lightness_percent());
                    if !label.is_empty() {
                        text = format!("{text} {label}");
                    }
                    text
                } else {
                    label
                };
                let text: String = format!(" {label:<swatch_width$}")
                    .chars()
                    .take(swatch_width)
                    .collect();
                let mut style = Style::default()
                    .bg(to_color(color))
                    .fg(text_color(color));
                if is_cursor {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![indicator, Span::styled(text, style)])
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
    }

    /// Marker text for every row: key stops as `K1`, pins as `#1`.
    fn row_labels(state: &AppState, rows: u32) -> Vec<String> {
        let gradient = state.document.gradient();
        let mut labels = vec![String::new(); rows as usize];

        for marker in gradient.key_markers() {
            let row = gradient.row_for_position(marker.position, rows) as usize;
            push_label(&mut labels[row], &format!("K{}", marker.index));
        }
        for (index, entry) in state.document.palette().numbered() {
            let row = gradient.row_for_position(entry.position, rows) as usize;
            push_label(&mut labels[row], &format!("#{index}"));
        }
        labels
    }
}

fn push_label(label: &mut String, text: &str) {
    if !label.is_empty() {
        label.push(' ');
    }
    label.push_str(text);
}

fn to_color(color: &Lch) -> Color {
    color.to_rgb().to_ratatui_color()
}

/// Black on light swatches, white on dark ones.
pub(crate) fn text_color(color: &Lch) -> Color {
    if color.prefers_dark_text() {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;

    #[test]
    fn test_row_labels_mark_keys_and_pins() {
        let mut state = test_state();
        state.document.add_at(0);
        state.document.add_at(299);
        let labels = GradientView::row_labels(&state, 30);

        assert_eq!(labels.len(), 30);
        assert_eq!(labels[0], "#1");
        assert_eq!(labels[29], "#2");
        assert_eq!(labels.iter().filter(|l| l.contains("K1")).count(), 1);
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(text_color(&Lch::white(0.0)), Color::Black);
        assert_eq!(text_color(&Lch::black(0.0)), Color::White);
    }
}
