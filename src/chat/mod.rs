//! Chat assistant: session lifecycle and the message log.

mod message;
mod session;

pub use message::{ChatLog, ChatMessage, ChatRole, APOLOGY, GREETING};
pub use session::ChatSessionManager;
