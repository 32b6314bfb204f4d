//! System clipboard access for exports and pasted hex values.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Thin wrapper around the system clipboard.
///
/// The handle is opened lazily and kept for the rest of the session. On some
/// platforms clipboard contents vanish when the last handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    /// Create a clipboard wrapper. Nothing is opened until first use.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.handle.is_none() {
            self.handle = Some(Clipboard::new().context("Clipboard is not available")?);
        }
        self.handle
            .as_mut()
            .context("Clipboard is not available")
    }

    /// Copy text. Returns a description for the status bar.
    pub fn copy(&mut self, text: &str, label: &str) -> Result<String> {
        self.handle()?
            .set_text(text.to_string())
            .context("Failed to copy to clipboard")?;
        Ok(format!("✓ Copied {label} to clipboard"))
    }

    /// Current clipboard text.
    pub fn paste(&mut self) -> Result<String> {
        self.handle()?
            .get_text()
            .context("Clipboard does not hold text")
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}
