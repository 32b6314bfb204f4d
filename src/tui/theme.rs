//! Pane and text colors for the editor chrome.
//!
//! Swatches are drawn in their own colors; the theme only covers borders,
//! labels and overlays around them.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Colors for the editor chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Title bar and prompt borders
    pub primary: Color,
    /// Cursor marker and the prompt's input line
    pub accent: Color,
    /// Error line and invalid key slots
    pub error: Color,
    /// Hex values and status text
    pub text: Color,
    /// Lightness labels and positions
    pub text_secondary: Color,
    /// Hints and muted key slots
    pub text_muted: Color,
    pub background: Color,
    /// Selected row in a list pane
    pub highlight_bg: Color,
    /// Border of the focused pane
    pub active: Color,
    /// Border of the other panes
    pub inactive: Color,
}

impl Theme {
    /// Theme for a configured mode. `Auto` follows the OS setting and falls
    /// back to dark when it cannot be read.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Self::light(),
                Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
            },
        }
    }

    /// Chrome for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            background: Color::Black,
            highlight_bg: Color::DarkGray,
            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Chrome for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            // Yellow washes out on white
            accent: Color::Rgb(180, 100, 0),
            error: Color::Red,
            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,
            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}
