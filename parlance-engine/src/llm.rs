//! The completion boundary: one request/response exchange with a
//! language-model backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use parlance_core::config::LlmConfig;
use parlance_core::error::HandlerError;

/// Generation parameters sent with every completion request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 256,
        }
    }
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Abstraction over text completion that the handlers use.
/// This decouples the turn executor from any specific backend or client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate text for `prompt`, or report a typed upstream failure.
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, HandlerError>;
}

// ── Wire types for the legacy /completions endpoint ───────────────────────────

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

fn extract_first_choice(response: CompletionResponse) -> Result<String, HandlerError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.text)
        .ok_or_else(|| HandlerError::UpstreamBadResponse {
            reason: "response is missing choices[0].text".into(),
        })
}

/// A [`CompletionClient`] that POSTs to an OpenAI-compatible completions
/// path on a configured inference server (e.g. a local LM Studio).
pub struct HttpCompletionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    request_timeout: Duration,
}

impl HttpCompletionClient {
    pub fn new(config: &LlmConfig) -> Result<Self, reqwest::Error> {
        let request_timeout = Duration::from_secs(config.request_timeout_secs);
        let http = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            request_timeout,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> HandlerError {
        if err.is_timeout() {
            return HandlerError::UpstreamTimeout {
                elapsed: self.request_timeout,
            };
        }
        HandlerError::UpstreamUnavailable {
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, HandlerError> {
        let url = format!("{}/completions", self.base_url);
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(url = %url, model = %self.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HandlerError::UpstreamUnavailable {
                reason: format!("completions endpoint returned {status}"),
            });
        }

        let body: CompletionResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                HandlerError::UpstreamTimeout {
                    elapsed: self.request_timeout,
                }
            } else {
                HandlerError::UpstreamBadResponse {
                    reason: err.to_string(),
                }
            }
        })?;

        extract_first_choice(body)
    }
}

/// A scripted completion client for testing.
pub struct ScriptedCompletionClient {
    responses: std::sync::Mutex<Vec<Result<String, HandlerError>>>,
}

impl ScriptedCompletionClient {
    pub fn new(responses: Vec<Result<String, HandlerError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, HandlerError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("No more scripted responses".into())
        } else {
            responses.remove(0)
        }
    }
}
