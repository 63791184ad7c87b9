//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use humanize_ai::clipboard::ClipboardSink;
use humanize_ai::config::{Config, SecureString};
use humanize_ai::gemini::GeminiClient;
use humanize_ai::ui::app::{App, UiCommand};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

pub use mock_gemini::{CapturedRequest, MockGemini, MockResponse};

pub const TEST_KEY: &str = "test-key-123";

/// Client pointed at `base_url`, optionally with a key.
pub fn gemini_client(base_url: &str, key: Option<&str>) -> GeminiClient {
    GeminiClient::new(
        reqwest::Client::new(),
        base_url,
        key.map(|k| SecureString::new(k.to_string())),
    )
}

/// Clipboard that remembers every write.
#[derive(Clone, Default)]
pub struct SpyClipboard(pub Arc<Mutex<Vec<String>>>);

impl ClipboardSink for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.0.lock().push(text.to_string());
        Ok(())
    }
}

/// App with a command channel and spy clipboard attached.
pub fn make_app(config: &Config) -> (App, mpsc::Receiver<UiCommand>, SpyClipboard) {
    let clipboard = SpyClipboard::default();
    let mut app = App::new(config, Box::new(clipboard.clone()));
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    (app, rx, clipboard)
}
