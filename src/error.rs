//! Error taxonomy for generation and chat calls.

use thiserror::Error;

/// Failure of a call to the remote generative API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The API answered 2xx but the body was not understood.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Network(err) if err.is_timeout())
    }
}

/// Errors from a one-shot rewrite.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No access credential is configured. Raised before any network call.
    #[error("API key not found")]
    Configuration,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The API returned no text.
    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// Errors from the chat assistant.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No session was opened; the chat feature is inert.
    #[error("Chat session is not initialized")]
    Inactive,

    /// Opening a session failed because no credential is configured.
    #[error("API key not found")]
    Configuration,

    #[error("Chat request failed: {0}")]
    Remote(#[from] UpstreamError),
}

impl From<GenerationError> for ChatError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Configuration => ChatError::Configuration,
            GenerationError::Upstream(inner) => ChatError::Remote(inner),
            GenerationError::EmptyResponse => {
                ChatError::Remote(UpstreamError::Parse("empty response".to_string()))
            }
        }
    }
}
