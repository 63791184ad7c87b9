//! HTTP client for the Generative Language API.

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::{Config, SecureString};
use crate::error::{ChatError, GenerationError, UpstreamError};

use super::types::{
    ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerateRequest, Turn,
};
use super::{ChatHandle, GenerativeBackend, SessionConfig};

/// Client for `models/{model}:generateContent`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl GeminiClient {
    /// Create a client with an explicit HTTP client.
    ///
    /// `api_key` may be `None`; every call then fails with
    /// `GenerationError::Configuration` before touching the network.
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<SecureString>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Build a client using the timeouts and base URL from `config`.
    pub fn from_config(
        config: &Config,
        api_key: Option<SecureString>,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.defaults.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                config.defaults.connect_timeout_seconds,
            )))
            .build()?;
        Ok(Self::new(http, config.api.base_url.clone(), api_key))
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn call(
        &self,
        api_key: &SecureString,
        request: &GenerateRequest,
    ) -> Result<String, UpstreamError> {
        let url = self.endpoint(&request.model);
        let body = GenerateContentRequest::from(request);

        tracing::debug!(
            url = %url,
            model = %request.model,
            turns = request.contents.len(),
            temperature = ?request.temperature,
            "Sending generateContent request"
        );

        let start = Instant::now();
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                let err = UpstreamError::from(err);
                tracing::error!(
                    url = %url,
                    timeout = err.is_timeout(),
                    error = %err,
                    "Gemini request failed"
                );
                err
            })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);

            tracing::error!(
                status = %status,
                latency_ms,
                error = %message,
                "Gemini API error"
            );

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| UpstreamError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        let text = parsed.text();
        if text.is_empty() {
            let finish_reason = parsed
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.clone());
            let block_reason = parsed
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone());
            tracing::warn!(
                latency_ms,
                finish_reason = ?finish_reason,
                block_reason = ?block_reason,
                "Gemini returned no text"
            );
        } else {
            tracing::debug!(latency_ms, chars = text.len(), "Gemini response received");
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, GenerationError> {
        let Some(api_key) = &self.api_key else {
            return Err(GenerationError::Configuration);
        };
        Ok(self.call(api_key, &request).await?)
    }

    fn start_chat(&self, config: SessionConfig) -> Result<Box<dyn ChatHandle>, GenerationError> {
        if self.api_key.is_none() {
            return Err(GenerationError::Configuration);
        }
        let session = GeminiChat {
            id: Uuid::new_v4().to_string(),
            client: self.clone(),
            config,
            history: Mutex::new(Vec::new()),
        };
        tracing::info!(session_id = %session.id, model = %session.config.model, "Chat session opened");
        Ok(Box::new(session))
    }
}

/// Multi-turn conversation over the stateless endpoint.
///
/// The full turn history is replayed on every call. Turns are recorded only
/// after a successful, non-empty reply; failed or empty sends leave history
/// untouched.
struct GeminiChat {
    id: String,
    client: GeminiClient,
    config: SessionConfig,
    history: Mutex<Vec<Turn>>,
}

#[async_trait]
impl ChatHandle for GeminiChat {
    fn id(&self) -> &str {
        &self.id
    }

    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let mut contents = self.history.lock().clone();
        contents.push(Turn::user(message));

        let request = GenerateRequest {
            model: self.config.model.clone(),
            system_instruction: Some(self.config.system_instruction.clone()),
            contents,
            temperature: self.config.temperature,
        };

        let reply = self.client.generate(request).await.map_err(|err| {
            tracing::error!(session_id = %self.id, error = %err, "Chat error");
            ChatError::from(err)
        })?;

        // The API rejects empty parts, so a textless reply drops the whole exchange.
        if reply.is_empty() {
            tracing::warn!(session_id = %self.id, "Empty chat reply; turn not recorded");
            return Ok(reply);
        }

        let mut history = self.history.lock();
        history.push(Turn::user(message));
        history.push(Turn::model(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> GeminiClient {
        GeminiClient::new(Client::new(), "http://127.0.0.1:9/v1beta/", None)
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = unconfigured();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn generate_without_key_is_configuration_error() {
        let client = unconfigured();
        let request = GenerateRequest {
            model: "m".to_string(),
            system_instruction: None,
            contents: vec![Turn::user("hi")],
            temperature: None,
        };
        assert!(matches!(
            client.generate(request).await,
            Err(GenerationError::Configuration)
        ));
    }

    #[test]
    fn start_chat_without_key_fails() {
        let client = unconfigured();
        let result = client.start_chat(SessionConfig {
            model: "m".to_string(),
            system_instruction: "s".to_string(),
            temperature: None,
        });
        assert!(matches!(result, Err(GenerationError::Configuration)));
    }
}
