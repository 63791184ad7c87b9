//! Remote generative backend: the trait seam plus the Gemini implementation.

mod client;
mod types;

use async_trait::async_trait;

use crate::error::{ChatError, GenerationError};

pub use client::GeminiClient;
pub use types::{GenerateRequest, Role, Turn};

/// Settings fixed for the lifetime of a chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub model: String,
    pub system_instruction: String,
    pub temperature: Option<f32>,
}

/// A generative model service.
///
/// Implementations must check for a credential before issuing any request
/// and report its absence as `GenerationError::Configuration`.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Returns the name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Single request/response call. An empty string means the model
    /// produced no text.
    async fn generate(&self, request: GenerateRequest) -> Result<String, GenerationError>;

    /// Open a stateful conversation.
    fn start_chat(&self, config: SessionConfig) -> Result<Box<dyn ChatHandle>, GenerationError>;
}

/// Opaque handle to a remote conversation.
///
/// Holders send messages through it and never inspect its state.
#[async_trait]
pub trait ChatHandle: Send + Sync {
    /// Session id for log correlation.
    fn id(&self) -> &str;

    async fn send_message(&self, message: &str) -> Result<String, ChatError>;
}
