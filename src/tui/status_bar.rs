//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the focused pane, or for the open prompt.
    fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        if state.prompt.is_some() {
            return &[("Enter", "confirm"), ("Esc", "cancel"), ("Ctrl+V", "paste")];
        }
        match state.focus {
            Focus::Keys => &[
                ("a", "add"),
                ("e", "edit"),
                ("d", "delete"),
                ("m", "mute"),
                ("S", "sort"),
                ("p", "paste"),
                ("Tab", "pane"),
                ("q", "quit"),
            ],
            Focus::Gradient => &[
                ("j/k", "move"),
                ("J/K", "fine"),
                ("Enter", "pin"),
                ("l", "pin L"),
                ("y", "copy hex"),
                ("c/v/u", "copy css/svg/url"),
                ("Tab", "pane"),
                ("q", "quit"),
            ],
            Focus::Palette => &[
                ("j/k", "select"),
                ("J/K", "nudge"),
                ("e", "edit L"),
                ("d", "delete"),
                ("C", "clear"),
                ("c/v/u", "copy css/svg/url"),
                ("Tab", "pane"),
                ("q", "quit"),
            ],
        }
    }

    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::test_state;
    use crate::tui::{Prompt, PromptKind};

    #[test]
    fn test_hints_follow_focus() {
        let mut state = test_state();
        state.focus = Focus::Palette;
        assert!(StatusBar::hints(&state).iter().any(|(_, a)| *a == "nudge"));

        state.prompt = Some(Prompt::new(PromptKind::AddKey));
        assert_eq!(StatusBar::hints(&state)[0], ("Enter", "confirm"));
    }
}
