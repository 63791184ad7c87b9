use crate::chat::ChatLog;
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::error::{ChatError, GenerationError};
use crate::prompt::{ProcessingMode, ToneStyle};
use crate::text::{export_text, word_count, TextFileError};
use crate::ui::chat_panel::{ChatPanelIntent, ChatPanelReducer, ChatPanelState};
use crate::ui::editor::TextBuffer;
use crate::ui::import_dialog::{ImportDialogState, ImportIntent, ImportReducer};
use crate::ui::mvi::Reducer;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Blocking alert raised when a rewrite fails.
pub const PROCESS_FAILED_ALERT: &str =
    "Failed to process text. Please check your API Key configuration or try again.";

/// How long the "Copied" indicator stays visible.
pub const COPIED_INDICATOR: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Output,
    Chat,
}

/// Work the UI hands to the async runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Humanize {
        text: String,
        mode: ProcessingMode,
        tone: ToneStyle,
    },
    ChatSend {
        message: String,
        context: String,
        prior_user_messages: usize,
    },
    Import {
        path: PathBuf,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    input: TextBuffer,
    output: TextBuffer,
    /// Latch: at most one humanize request in flight.
    is_processing: bool,
    mode: ProcessingMode,
    tone: ToneStyle,
    copied_until: Option<Instant>,
    /// Chat panel visibility (MVI pattern).
    chat_panel: ChatPanelState,
    /// Import path prompt (MVI pattern).
    import_dialog: ImportDialogState,
    chat_log: ChatLog,
    chat_draft: TextBuffer,
    /// Chat sends awaiting a reply.
    chat_pending: usize,
    chat_ready: bool,
    alert: Option<String>,
    status: Option<String>,
    export_dir: PathBuf,
    clipboard: Box<dyn ClipboardSink>,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            input: TextBuffer::new(),
            output: TextBuffer::new(),
            is_processing: false,
            mode: config.defaults.mode,
            tone: config.defaults.tone,
            copied_until: None,
            chat_panel: ChatPanelState::default(),
            import_dialog: ImportDialogState::default(),
            chat_log: ChatLog::new(),
            chat_draft: TextBuffer::new(),
            chat_pending: 0,
            chat_ready: false,
            alert: None,
            status: None,
            export_dir: config.defaults.export_dir(),
            clipboard,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Whether a chat session was opened at startup.
    pub fn set_chat_ready(&mut self, ready: bool) {
        self.chat_ready = ready;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &TextBuffer {
        &self.input
    }

    pub fn output(&self) -> &TextBuffer {
        &self.output
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
    }

    pub fn input_word_count(&self) -> usize {
        word_count(self.input.text())
    }

    pub fn output_word_count(&self) -> usize {
        word_count(self.output.text())
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    pub fn tone(&self) -> ToneStyle {
        self.tone
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn cycle_tone(&mut self, forward: bool) {
        self.tone = if forward {
            self.tone.next()
        } else {
            self.tone.previous()
        };
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    pub fn chat_draft(&self) -> &TextBuffer {
        &self.chat_draft
    }

    pub fn chat_panel(&self) -> ChatPanelState {
        self.chat_panel
    }

    pub fn chat_ready(&self) -> bool {
        self.chat_ready
    }

    /// True while at least one chat reply is outstanding.
    pub fn is_chat_typing(&self) -> bool {
        self.chat_pending > 0
    }

    pub fn import_dialog(&self) -> &ImportDialogState {
        &self.import_dialog
    }

    pub fn on_tick(&mut self) {
        self.expire_indicators(Instant::now());
    }

    pub fn expire_indicators(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    // ========================================================================
    // Rewrite
    // ========================================================================

    /// Start a rewrite of the input text.
    ///
    /// No-op when the input is blank or a rewrite is already running.
    pub fn process(&mut self) -> bool {
        if self.input.is_blank() || self.is_processing {
            return false;
        }

        let command = UiCommand::Humanize {
            text: self.input.text().to_string(),
            mode: self.mode,
            tone: self.tone,
        };
        if !self.send_command(command) {
            self.alert = Some(PROCESS_FAILED_ALERT.to_string());
            return false;
        }
        self.is_processing = true;
        true
    }

    pub fn on_humanize_finished(&mut self, result: Result<String, GenerationError>) {
        self.is_processing = false;
        match result {
            Ok(text) => self.output.set_text(text),
            Err(err) => {
                tracing::error!(error = %err, "Humanize failed");
                self.alert = Some(PROCESS_FAILED_ALERT.to_string());
            }
        }
    }

    // ========================================================================
    // Output actions
    // ========================================================================

    pub fn copy(&mut self) -> bool {
        self.copy_at(Instant::now())
    }

    /// Copy the output verbatim; the indicator expires `COPIED_INDICATOR` after `now`.
    pub fn copy_at(&mut self, now: Instant) -> bool {
        if self.output.is_empty() {
            return false;
        }
        match self.clipboard.set_text(self.output.text()) {
            Ok(()) => {
                self.copied_until = Some(now + COPIED_INDICATOR);
                true
            }
            Err(message) => {
                tracing::warn!(error = %message, "Copy failed");
                self.status = Some(message);
                false
            }
        }
    }

    /// Write the output to `humanized-text.txt` in the export directory.
    pub fn export(&mut self) -> Option<PathBuf> {
        if self.output.is_empty() {
            return None;
        }
        match export_text(&self.export_dir, self.output.text()) {
            Ok(path) => {
                self.status = Some(format!("Exported to {}", path.display()));
                Some(path)
            }
            Err(err) => {
                self.status = Some(err.to_string());
                None
            }
        }
    }

    // ========================================================================
    // Input actions
    // ========================================================================

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn open_import_dialog(&mut self) {
        dispatch_mvi!(self, import_dialog, ImportReducer, ImportIntent::Open);
    }

    pub fn dispatch_import(&mut self, intent: ImportIntent) {
        dispatch_mvi!(self, import_dialog, ImportReducer, intent);
    }

    /// Submit the path typed into the import dialog.
    pub fn submit_import(&mut self) -> bool {
        let Some(path) = self.import_dialog.path().map(|p| p.trim().to_string()) else {
            return false;
        };
        if path.is_empty() {
            return false;
        }
        self.dispatch_import(ImportIntent::Close);
        self.request_import(PathBuf::from(path))
    }

    pub fn request_import(&mut self, path: PathBuf) -> bool {
        self.send_command(UiCommand::Import { path })
    }

    /// Input is replaced only once the file has been read.
    pub fn on_import_finished(&mut self, result: Result<String, TextFileError>) {
        match result {
            Ok(text) => {
                self.input.set_text(text);
                self.status = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Import failed");
                self.status = Some(err.to_string());
            }
        }
    }

    // ========================================================================
    // Chat
    // ========================================================================

    pub fn dispatch_chat_panel(&mut self, intent: ChatPanelIntent) {
        dispatch_mvi!(self, chat_panel, ChatPanelReducer, intent);
        if self.chat_panel.is_expanded() {
            self.focus = Focus::Chat;
        } else if self.focus == Focus::Chat {
            self.focus = Focus::Input;
        }
    }

    /// Text the chat assistant sees as context: output if any, else input.
    pub fn chat_context(&self) -> &str {
        if self.output.is_empty() {
            self.input.text()
        } else {
            self.output.text()
        }
    }

    /// Send the chat draft.
    ///
    /// No-op when the draft is blank or no session is active. Sends are not
    /// serialized; several may be in flight.
    pub fn send_chat(&mut self) -> bool {
        if self.chat_draft.is_blank() || !self.chat_ready {
            return false;
        }

        let message = self.chat_draft.take();
        let prior_user_messages = self.chat_log.user_message_count();
        self.chat_log.push_user(message.clone());

        let command = UiCommand::ChatSend {
            message,
            context: self.chat_context().to_string(),
            prior_user_messages,
        };
        if !self.send_command(command) {
            self.chat_log.push_apology();
            return false;
        }
        self.chat_pending += 1;
        true
    }

    pub fn on_chat_reply(&mut self, result: Result<String, ChatError>) {
        self.chat_pending = self.chat_pending.saturating_sub(1);
        match result {
            Ok(text) => self.chat_log.push_model(text),
            Err(err) => {
                tracing::warn!(error = %err, "Chat reply failed");
                self.chat_log.push_apology();
            }
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Output,
            Focus::Output if self.chat_panel.is_expanded() => Focus::Chat,
            Focus::Output | Focus::Chat => Focus::Input,
        };
    }

    /// Buffer receiving keystrokes for the current focus.
    pub fn focused_buffer_mut(&mut self) -> &mut TextBuffer {
        match self.focus {
            Focus::Input => &mut self.input,
            Focus::Output => &mut self.output,
            Focus::Chat => &mut self.chat_draft,
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.alert.is_some() {
            return;
        }
        if self.import_dialog.is_visible() {
            self.dispatch_import(ImportIntent::Input(text.to_string()));
            return;
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.focused_buffer_mut().insert_str(&normalized);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!("No command sender attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Command send failed");
                self.status = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatRole, APOLOGY, GREETING};
    use crate::error::UpstreamError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), String> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn make_app() -> (App, mpsc::Receiver<UiCommand>, RecordingClipboard) {
        let clipboard = RecordingClipboard::default();
        let mut app = App::new(&Config::default(), Box::new(clipboard.clone()));
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        (app, rx, clipboard)
    }

    fn upstream_failure() -> GenerationError {
        GenerationError::Upstream(UpstreamError::Status {
            status: 500,
            message: "boom".to_string(),
        })
    }

    // -- process latch ----------------------------------------------------

    #[test]
    fn process_ignores_blank_input() {
        let (mut app, mut rx, _) = make_app();
        app.set_input_text("   \n ");
        assert!(!app.process());
        assert!(!app.is_processing());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn second_process_while_pending_issues_nothing() {
        let (mut app, mut rx, _) = make_app();
        app.set_input_text("Some AI text.");
        assert!(app.process());
        assert!(!app.process());

        assert!(matches!(rx.try_recv(), Ok(UiCommand::Humanize { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn process_sends_current_mode_and_tone() {
        let (mut app, mut rx, _) = make_app();
        app.set_input_text("text");
        app.toggle_mode();
        app.cycle_tone(true);
        app.process();
        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::Humanize {
                text: "text".to_string(),
                mode: ProcessingMode::Quality,
                tone: ToneStyle::Professional,
            }
        );
    }

    #[test]
    fn success_replaces_output_and_releases_latch() {
        let (mut app, _rx, _) = make_app();
        app.set_input_text("text");
        app.process();
        app.on_humanize_finished(Ok("rewritten".to_string()));
        assert_eq!(app.output().text(), "rewritten");
        assert!(!app.is_processing());
        assert!(app.process());
    }

    #[test]
    fn failure_keeps_output_and_raises_alert() {
        let (mut app, _rx, _) = make_app();
        app.set_input_text("text");
        app.process();
        app.on_humanize_finished(Ok("first result".to_string()));
        app.process();
        app.on_humanize_finished(Err(upstream_failure()));

        assert_eq!(app.output().text(), "first result");
        assert!(!app.is_processing());
        assert_eq!(app.alert(), Some(PROCESS_FAILED_ALERT));
    }

    #[test]
    fn process_without_runtime_alerts() {
        let mut app = App::new(&Config::default(), Box::new(RecordingClipboard::default()));
        app.set_input_text("text");
        assert!(!app.process());
        assert!(!app.is_processing());
        assert!(app.alert().is_some());
    }

    // -- copy / export ----------------------------------------------------

    #[test]
    fn copy_writes_output_and_indicator_expires() {
        let (mut app, _rx, clipboard) = make_app();
        app.on_humanize_finished(Ok("copy me".to_string()));

        let now = Instant::now();
        assert!(app.copy_at(now));
        assert_eq!(clipboard.0.lock().unwrap().as_slice(), ["copy me"]);
        assert!(app.is_copied());

        app.expire_indicators(now + Duration::from_millis(1999));
        assert!(app.is_copied());
        app.expire_indicators(now + COPIED_INDICATOR);
        assert!(!app.is_copied());
    }

    #[test]
    fn copy_with_empty_output_is_noop() {
        let (mut app, _rx, clipboard) = make_app();
        assert!(!app.copy());
        assert!(clipboard.0.lock().unwrap().is_empty());
    }

    // -- chat -------------------------------------------------------------

    fn type_chat(app: &mut App, text: &str) {
        app.dispatch_chat_panel(ChatPanelIntent::Toggle);
        app.focused_buffer_mut().insert_str(text);
    }

    #[test]
    fn chat_send_is_noop_without_session() {
        let (mut app, mut rx, _) = make_app();
        type_chat(&mut app, "hello");
        assert!(!app.send_chat());
        assert_eq!(app.chat_log().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn chat_send_appends_user_message_and_counts_prior_turns() {
        let (mut app, mut rx, _) = make_app();
        app.set_chat_ready(true);
        app.set_input_text("working text");

        type_chat(&mut app, "first");
        assert!(app.send_chat());
        app.focused_buffer_mut().insert_str("second");
        assert!(app.send_chat());

        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::ChatSend {
                message: "first".to_string(),
                context: "working text".to_string(),
                prior_user_messages: 0,
            }
        );
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiCommand::ChatSend { prior_user_messages: 1, .. }
        ));
        assert!(app.is_chat_typing());
        assert!(app.chat_draft().is_empty());
    }

    #[test]
    fn chat_context_prefers_output() {
        let (mut app, _rx, _) = make_app();
        app.set_input_text("input");
        assert_eq!(app.chat_context(), "input");
        app.on_humanize_finished(Ok("output".to_string()));
        assert_eq!(app.chat_context(), "output");
    }

    #[test]
    fn chat_failure_appends_single_apology() {
        let (mut app, _rx, _) = make_app();
        app.set_chat_ready(true);
        type_chat(&mut app, "question");
        app.send_chat();

        app.on_chat_reply(Err(ChatError::Remote(UpstreamError::Parse("x".to_string()))));

        let texts: Vec<&str> = app.chat_log().messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "question", APOLOGY]);
        assert_eq!(app.chat_log().messages()[2].role, ChatRole::Model);
        assert!(!app.is_chat_typing());
    }

    #[test]
    fn chat_panel_focus_follows_visibility() {
        let (mut app, _rx, _) = make_app();
        app.dispatch_chat_panel(ChatPanelIntent::Toggle);
        assert_eq!(app.focus(), Focus::Chat);
        app.dispatch_chat_panel(ChatPanelIntent::ToggleMinimized);
        assert_eq!(app.focus(), Focus::Input);
    }

    // -- import -----------------------------------------------------------

    #[test]
    fn import_dialog_submits_trimmed_path() {
        let (mut app, mut rx, _) = make_app();
        app.open_import_dialog();
        app.on_paste("  notes.txt \n");
        assert!(app.submit_import());
        assert!(!app.import_dialog().is_visible());
        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::Import {
                path: PathBuf::from("notes.txt")
            }
        );
    }

    #[test]
    fn import_result_replaces_input() {
        let (mut app, _rx, _) = make_app();
        app.set_input_text("old");
        app.on_import_finished(Ok("new contents".to_string()));
        assert_eq!(app.input().text(), "new contents");
    }
}
