use crate::error::ChatError;
use crate::gemini::{ChatHandle, GenerativeBackend, SessionConfig};
use crate::prompt::{build_chat_prompt, chat_system_instruction, quotes_context, ModelTable};

enum SessionState {
    Uninitialized,
    Active(Box<dyn ChatHandle>),
}

/// Owns the remote chat session.
///
/// Starts `Uninitialized`; [`ChatSessionManager::initialize`] moves it to
/// `Active` once. There is no transition back.
pub struct ChatSessionManager {
    state: SessionState,
}

impl Default for ChatSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSessionManager {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
        }
    }

    /// Open the session on `backend`.
    ///
    /// Failure is logged and leaves the manager `Uninitialized`, which makes
    /// the chat feature inert.
    pub fn initialize(backend: &dyn GenerativeBackend, models: &ModelTable) -> Self {
        let config = SessionConfig {
            model: models.chat().to_string(),
            system_instruction: chat_system_instruction().to_string(),
            temperature: None,
        };

        match backend.start_chat(config) {
            Ok(handle) => Self {
                state: SessionState::Active(handle),
            },
            Err(err) => {
                tracing::error!(backend = backend.name(), error = %err, "Failed to init chat");
                Self::new()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn session_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active(handle) => Some(handle.id()),
            SessionState::Uninitialized => None,
        }
    }

    /// Send one user turn.
    ///
    /// `context` is the text the user is working on; it is quoted into the
    /// prompt while `prior_user_messages` is below the context threshold.
    pub async fn send(
        &self,
        message: &str,
        context: &str,
        prior_user_messages: usize,
    ) -> Result<String, ChatError> {
        let SessionState::Active(handle) = &self.state else {
            return Err(ChatError::Inactive);
        };

        let prompt = build_chat_prompt(message, context, prior_user_messages);
        tracing::debug!(
            session_id = handle.id(),
            prior_user_messages,
            with_context = quotes_context(context, prior_user_messages),
            "Sending chat message"
        );
        handle.send_message(&prompt).await
    }
}
