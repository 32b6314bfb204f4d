//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event dispatch,
//! and the three panes (key colors, gradient bar, palette) using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod clipboard;
pub mod component;
pub mod gradient_view;
pub mod handlers;
pub mod key_colors_panel;
pub mod palette_panel;
pub mod prompt;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::services::Document;

pub use clipboard::SystemClipboard;
pub use component::Component;
pub use gradient_view::GradientView;
pub use key_colors_panel::KeyColorsPanel;
pub use palette_panel::PalettePanel;
pub use prompt::{Prompt, PromptEvent, PromptKind, PromptValue};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Pane that receives navigation and editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Key color slots
    Keys,
    /// Gradient bar
    #[default]
    Gradient,
    /// Palette entries
    Palette,
}

impl Focus {
    /// Next pane, left to right.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Keys => Self::Gradient,
            Self::Gradient => Self::Palette,
            Self::Palette => Self::Keys,
        }
    }

    /// Previous pane, right to left.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Keys => Self::Palette,
            Self::Gradient => Self::Keys,
            Self::Palette => Self::Gradient,
        }
    }
}

/// Application state for the interactive editor.
#[derive(Debug)]
pub struct AppState {
    /// Key colors, gradient and palette
    pub document: Document,
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Focused pane
    pub focus: Focus,
    /// Selected key color slot
    pub key_cursor: usize,
    /// Gradient cursor position
    pub cursor: u32,
    /// Selected palette entry
    pub palette_cursor: usize,
    /// Open text prompt, if any
    pub prompt: Option<Prompt>,
    /// System clipboard
    pub clipboard: SystemClipboard,
    /// Status bar message
    pub status_message: String,
    /// Error shown in the status bar until the next action
    pub error_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Rows available to the gradient bar at the last render
    pub gradient_rows: Cell<u16>,
}

impl AppState {
    /// Creates the editor state for a document.
    #[must_use]
    pub fn new(document: Document, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let status_message = if config.ui.show_help_on_startup {
            "Tab switches panes. In the key pane press a to add a color.".to_string()
        } else {
            String::new()
        };
        let cursor = document.height() / 2;
        Self {
            document,
            config,
            theme,
            focus: Focus::default(),
            key_cursor: 0,
            cursor,
            palette_cursor: 0,
            prompt: None,
            clipboard: SystemClipboard::new(),
            status_message,
            error_message: None,
            should_quit: false,
            gradient_rows: Cell::new(0),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Id of the selected palette entry.
    #[must_use]
    pub fn selected_entry_id(&self) -> Option<String> {
        self.document
            .palette()
            .entries()
            .get(self.palette_cursor)
            .map(|e| e.id.clone())
    }

    /// Selects the palette entry with `id`, if it still exists.
    pub fn select_entry(&mut self, id: &str) {
        if let Some(index) = self.document.palette().index_of(id) {
            self.palette_cursor = index;
        }
    }

    /// Positions one gradient row apart at the current viewport size.
    #[must_use]
    pub fn row_step(&self) -> u32 {
        let rows = u32::from(self.gradient_rows.get()).max(1);
        (self.document.height() / rows).max(1)
    }

    /// Highest position the cursor may take.
    #[must_use]
    pub fn max_cursor(&self) -> u32 {
        self.document.height().saturating_sub(1)
    }

    /// Keeps every cursor inside its list after edits.
    pub fn clamp_cursors(&mut self) {
        let keys = self.document.key_colors().len();
        self.key_cursor = self.key_cursor.min(keys.saturating_sub(1));
        let entries = self.document.palette().len();
        self.palette_cursor = self.palette_cursor.min(entries.saturating_sub(1));
        self.cursor = self.cursor.min(self.max_cursor());
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(state, key)? {
                        break;
                    }
                }
                // Resize and other events re-render on the next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Panes
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let panes = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Key colors
            Constraint::Min(24),    // Gradient bar
            Constraint::Length(36), // Palette
        ])
        .split(chunks[1]);

    KeyColorsPanel::render(f, panes[0], state);
    GradientView::render(f, panes[1], state);
    PalettePanel::render(f, panes[2], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(prompt) = &state.prompt {
        prompt.render(f, f.area(), &state.theme);
    }
}

/// Render title bar with document summary
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let document = &state.document;
    let active = document.key_colors().active_hexes().len();

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "- {active} active key colors, {} pins, height {}",
                document.palette().len(),
                document.height()
            ),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Bordered pane block, highlighted when focused.
pub(crate) fn pane_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.active } else { theme.inactive };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::models::KeyColor;
    use crate::services::DocumentSettings;

    pub(crate) fn test_state() -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        let settings = DocumentSettings {
            height: 300,
            ..DocumentSettings::default()
        };
        let document = Document::with_key_colors(vec![KeyColor::new("3366CC")], settings);
        AppState::new(document, config)
    }

    #[test]
    fn test_focus_cycles() {
        let focus = Focus::Keys;
        assert_eq!(focus.next().next().next(), Focus::Keys);
        assert_eq!(focus.previous(), Focus::Palette);
        assert_eq!(focus.next().previous(), Focus::Keys);
    }

    #[test]
    fn test_new_state_centers_cursor() {
        let state = test_state();
        assert_eq!(state.cursor, 150);
        assert_eq!(state.focus, Focus::Gradient);
        assert_eq!(state.theme, Theme::dark());
    }

    #[test]
    fn test_row_step_uses_viewport() {
        let state = test_state();
        // No render yet: one row covers the whole height
        assert_eq!(state.row_step(), 300);
        state.gradient_rows.set(30);
        assert_eq!(state.row_step(), 10);
        state.gradient_rows.set(1000);
        assert_eq!(state.row_step(), 1);
    }

    #[test]
    fn test_clamp_cursors() {
        let mut state = test_state();
        state.key_cursor = 5;
        state.palette_cursor = 3;
        state.cursor = 10_000;
        state.clamp_cursors();
        assert_eq!(state.key_cursor, 0);
        assert_eq!(state.palette_cursor, 0);
        assert_eq!(state.cursor, 299);
    }
}
