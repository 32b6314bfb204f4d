//! Single-line text prompt for hex and lightness entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::key_color::sanitize_pasted_hex;
use crate::models::rgb::normalize_hex;
use crate::tui::theme::Theme;
use crate::tui::Component;

/// What the typed value is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Hex for a new key color slot
    AddKey,
    /// Hex for an existing key color slot
    EditKey(usize),
    /// Lightness for a new pin
    PinLightness,
    /// Lightness for an existing pin
    EditLightness(String),
}

impl PromptKind {
    fn title(&self) -> &'static str {
        match self {
            Self::AddKey => " Add Key Color ",
            Self::EditKey(_) => " Edit Key Color ",
            Self::PinLightness => " Pin by Lightness ",
            Self::EditLightness(_) => " Edit Pin Lightness ",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::AddKey | Self::EditKey(_) => "3 or 6 hex digits, # optional",
            Self::PinLightness | Self::EditLightness(_) => "Lightness 0-100",
        }
    }

    const fn is_hex(&self) -> bool {
        matches!(self, Self::AddKey | Self::EditKey(_))
    }
}

/// A validated prompt result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptValue {
    /// Six-digit uppercase hex
    Hex(String),
    /// Lightness percentage
    Lightness(u8),
}

/// Events emitted by the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// User confirmed a valid value
    Confirmed(PromptKind, PromptValue),
    /// User cancelled the prompt
    Cancelled,
}

/// Prompt component state
#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
    error: Option<String>,
}

impl Prompt {
    /// Creates an empty prompt.
    #[must_use]
    pub fn new(kind: PromptKind) -> Self {
        Self::with_input(kind, "")
    }

    /// Creates a prompt pre-filled with `input`.
    #[must_use]
    pub fn with_input(kind: PromptKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            error: None,
        }
    }

    /// What the prompt is for.
    #[must_use]
    pub const fn kind(&self) -> &PromptKind {
        &self.kind
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input with cleaned pasted hex.
    pub fn paste(&mut self, text: &str) {
        self.input = if self.kind.is_hex() {
            sanitize_pasted_hex(text)
        } else {
            text.chars().filter(char::is_ascii_digit).take(3).collect()
        };
        self.error = None;
    }

    fn validate(&self) -> Result<PromptValue, String> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if self.kind.is_hex() {
            normalize_hex(input)
                .map(PromptValue::Hex)
                .ok_or_else(|| format!("'{input}' is not a valid hex color"))
        } else {
            match input.parse::<u8>() {
                Ok(value) if value <= 100 => Ok(PromptValue::Lightness(value)),
                _ => Err(format!("'{input}' is not a lightness between 0 and 100")),
            }
        }
    }
}

impl Component for Prompt {
    type Event = PromptEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => match self.validate() {
                Ok(value) => return Some(PromptEvent::Confirmed(self.kind.clone(), value)),
                Err(e) => self.error = Some(e),
            },
            KeyCode::Esc => return Some(PromptEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(50, 9, area);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.kind.title())
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Length(1), // Hint or error
                Constraint::Min(1),    // Help text
            ])
            .split(inner);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.text))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(input, chunks[0]);

        let hint = match &self.error {
            Some(error) => Paragraph::new(error.as_str()).style(Style::default().fg(theme.error)),
            None => Paragraph::new(self.kind.hint()).style(Style::default().fg(theme.text_muted)),
        };
        frame.render_widget(hint, chunks[1]);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", key_style),
            Span::raw(" Confirm  "),
            Span::styled("Esc", key_style),
            Span::raw(" Cancel"),
        ]))
        .style(Style::default().fg(theme.text));
        frame.render_widget(help, chunks[2]);
    }
}

/// Centered rectangle `percent_x` wide and `height` rows tall.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
