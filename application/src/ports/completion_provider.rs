//! Completion provider port
//!
//! Defines the interface for sending a system/user prompt pair to a
//! text-generation backend.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the completion backend
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion backend unreachable: {0}")]
    Connection(String),

    #[error("Completion backend rate limited the request: {0}")]
    RateLimited(String),

    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Completion request timed out")]
    Timeout,

    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),
}

/// Text generation backend
///
/// Returns the raw text of the completion. The provider does not parse or
/// enforce the "JSON only" instruction; agents normalize the text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_content: &str,
    ) -> Result<String, CompletionError>;

    /// Identifier of the backing model, for logs.
    fn model_id(&self) -> &str {
        "unknown"
    }
}
