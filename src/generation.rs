//! One-shot "humanize" rewrites.

use std::sync::Arc;

use crate::error::GenerationError;
use crate::gemini::{GenerateRequest, GenerativeBackend, Turn};
use crate::prompt::{build_humanize_prompt, ModelTable, ProcessingMode, ToneStyle};

/// Returned in place of an empty model reply by [`Humanizer::humanize`].
pub const EMPTY_RESPONSE_FALLBACK: &str = "Failed to generate content.";

/// Rewrites text through a generative backend.
#[derive(Clone)]
pub struct Humanizer {
    backend: Arc<dyn GenerativeBackend>,
    models: ModelTable,
}

impl Humanizer {
    pub fn new(backend: Arc<dyn GenerativeBackend>, models: ModelTable) -> Self {
        Self { backend, models }
    }

    /// Rewrite `text`; an empty reply becomes [`EMPTY_RESPONSE_FALLBACK`].
    pub async fn humanize(
        &self,
        text: &str,
        mode: ProcessingMode,
        tone: ToneStyle,
    ) -> Result<String, GenerationError> {
        match self.humanize_strict(text, mode, tone).await {
            Err(GenerationError::EmptyResponse) => Ok(EMPTY_RESPONSE_FALLBACK.to_string()),
            other => other,
        }
    }

    /// Rewrite `text`; an empty reply is `GenerationError::EmptyResponse`.
    pub async fn humanize_strict(
        &self,
        text: &str,
        mode: ProcessingMode,
        tone: ToneStyle,
    ) -> Result<String, GenerationError> {
        let prompt = build_humanize_prompt(text, mode, tone, &self.models);
        tracing::info!(
            backend = self.backend.name(),
            %mode,
            %tone,
            model = %prompt.model,
            "Humanizing text"
        );

        let request = GenerateRequest {
            model: prompt.model,
            system_instruction: Some(prompt.system_instruction),
            contents: vec![Turn::user(prompt.contents)],
            temperature: Some(prompt.temperature),
        };

        let reply = self.backend.generate(request).await.map_err(|err| {
            tracing::error!(error = %err, "Humanize request failed");
            err
        })?;

        if reply.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(reply)
    }
}
