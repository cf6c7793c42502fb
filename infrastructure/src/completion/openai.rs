//! OpenAI-compatible chat completions adapter.
//!
//! Sends the system instruction and user content as two messages to
//! `{base_url}/chat/completions` and returns the first choice's text
//! unparsed.

use crate::config::FileCompletionConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use skillpath_application::{CompletionError, CompletionProvider};
use skillpath_domain::core::text::truncate;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Longest excerpt of an error body written to the debug log
const ERROR_BODY_CHARS: usize = 300;

/// Completion provider for OpenAI-compatible chat APIs
pub struct OpenAiCompletion {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompletion {
    /// Build the adapter, reading the API key from `config.api_key_env`.
    ///
    /// A missing key is not an error here; each call then fails with
    /// [`CompletionError::MissingApiKey`].
    pub fn new(config: &FileCompletionConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &FileCompletionConfig,
        api_key: Option<String>,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                CompletionError::Connection(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            api_key,
            api_key_env: config.api_key_env.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletion {
    async fn complete(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::MissingApiKey(self.api_key_env.clone()))?;

        let start = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&self.request_body(system_instruction, user_content))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(map_request_error)?;
        let text = extract_text(&body)?;
        debug!(
            "Model {} answered {} bytes in {}ms",
            self.model,
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn map_request_error(e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Connection(e.to_string())
    }
}

/// Map a non-success status to an error carrying only the status and its
/// category. The backend's body goes to the debug log, never into the error.
fn status_error(status: u16, body: &str) -> CompletionError {
    warn!("Completion request returned HTTP {}", status);
    debug!(
        "Completion error body (HTTP {}): {}",
        status,
        truncate(body.trim(), ERROR_BODY_CHARS)
    );

    let category = match status {
        429 => return CompletionError::RateLimited(format!("HTTP {}", status)),
        401 | 403 => "authentication rejected",
        404 => "model or endpoint not found",
        400..=499 => "request rejected",
        _ => "backend error",
    };
    CompletionError::RequestFailed(format!("HTTP {} ({})", status, category))
}

/// Pull the first choice's message text out of a chat completions body.
fn extract_text(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            CompletionError::MalformedResponse("response has no message content".to_string())
        })
}
