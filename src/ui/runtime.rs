use crate::chat::ChatSessionManager;
use crate::clipboard::system_clipboard;
use crate::config::Config;
use crate::gemini::GenerativeBackend;
use crate::generation::Humanizer;
use crate::prompt::ModelTable;
use crate::text::import_text;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 32;

/// Backend-facing services shared by every UI command.
#[derive(Clone)]
pub struct Services {
    humanizer: Humanizer,
    chat: Arc<ChatSessionManager>,
}

impl Services {
    /// Opens the chat session immediately; a failure leaves chat inert.
    pub fn new(backend: Arc<dyn GenerativeBackend>, models: ModelTable) -> Self {
        let chat = ChatSessionManager::initialize(backend.as_ref(), &models);
        Self {
            humanizer: Humanizer::new(backend, models),
            chat: Arc::new(chat),
        }
    }

    pub fn chat_active(&self) -> bool {
        self.chat.is_active()
    }

    /// Run one command to completion and describe the result as an event.
    pub async fn execute(&self, command: UiCommand) -> AppEvent {
        match command {
            UiCommand::Humanize { text, mode, tone } => {
                AppEvent::HumanizeFinished(self.humanizer.humanize(&text, mode, tone).await)
            }
            UiCommand::ChatSend {
                message,
                context,
                prior_user_messages,
            } => AppEvent::ChatReply(
                self.chat
                    .send(&message, &context, prior_user_messages)
                    .await,
            ),
            UiCommand::Import { path } => AppEvent::ImportFinished(import_text(&path).await),
        }
    }
}

/// Forward commands to `services`, one task per command.
///
/// Results are posted back in completion order.
pub fn spawn_command_worker(
    runtime: &Handle,
    services: Services,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            let services = services.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = services.execute(command).await;
                if events.send(event).is_err() {
                    tracing::debug!("UI gone; dropping command result");
                }
            });
        }
    });
}

pub fn run(config: &Config, services: Services, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(config, system_clipboard());
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.set_command_sender(command_tx);
    app.set_chat_ready(services.chat_active());
    if !services.chat_active() {
        app.set_status("No API key configured; chat and rewrites are unavailable");
    }
    spawn_command_worker(runtime, services, command_rx, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::HumanizeFinished(result)) => app.on_humanize_finished(result),
            Ok(AppEvent::ChatReply(result)) => app.on_chat_reply(result),
            Ok(AppEvent::ImportFinished(result)) => app.on_import_finished(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
