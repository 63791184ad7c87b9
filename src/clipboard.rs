//! Clipboard access for copying the rewritten text.

use arboard::Clipboard;

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Handler for system clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    /// Write text to the system clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// Used when no system clipboard is reachable (headless sessions).
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ClipboardSink for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), String> {
        Err(format!("Clipboard unavailable: {}", self.reason))
    }
}

/// Open the system clipboard, falling back to [`UnavailableClipboard`].
pub fn system_clipboard() -> Box<dyn ClipboardSink> {
    match ClipboardHandler::new() {
        Ok(handler) => Box::new(handler),
        Err(err) => {
            tracing::warn!(error = %err, "System clipboard unavailable");
            Box::new(UnavailableClipboard::new(err.to_string()))
        }
    }
}
