//! Shared utilities for the agents.
//!
//! Contains the agent error type, the per-call timeout/cancellation guard
//! and the logged backend call helpers used by every agent.

use crate::ports::completion_provider::{CompletionError, CompletionProvider};
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use crate::ports::search_provider::{SearchError, SearchProvider};
use serde_json::json;
use skillpath_domain::core::text::truncate;
use skillpath_domain::{AgentResult, ParseError, SearchResult, ShapeError, Stage};
use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Longest excerpt of raw model output written to `tracing` logs
const RAW_EXCERPT_CHARS: usize = 500;

/// Errors that can occur inside an agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Backend call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,
}

impl AgentError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AgentError::Cancelled)
    }
}

/// Convert an agent failure into the uniform envelope, prefixed with the
/// name of the agent that owns `stage`.
pub(crate) fn into_agent_result<T>(stage: Stage, result: Result<T, AgentError>) -> AgentResult<T> {
    match result {
        Ok(data) => AgentResult::success(data),
        Err(e) => {
            warn!("{} failed: {}", stage.agent_name(), e);
            AgentResult::failure(format!("{} failed: {}", stage.agent_name(), e))
        }
    }
}

/// Timeout and cancellation applied to every backend call an agent makes.
#[derive(Debug, Clone, Default)]
pub struct CallPolicy {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl CallPolicy {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            cancellation: None,
        }
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Check if cancellation has been requested.
    pub fn check_cancelled(&self) -> Result<(), AgentError> {
        if let Some(token) = &self.cancellation
            && token.is_cancelled()
        {
            return Err(AgentError::Cancelled);
        }
        Ok(())
    }

    /// Resolves when cancellation is requested; never resolves without a token.
    pub async fn cancelled(&self) {
        match &self.cancellation {
            Some(token) => token.cancelled().await,
            None => std::future::pending().await,
        }
    }

    /// Run one backend call under the timeout and cancellation token.
    pub async fn run<T, E>(
        &self,
        call: impl Future<Output = Result<T, E>>,
    ) -> Result<T, AgentError>
    where
        AgentError: From<E>,
    {
        self.check_cancelled()?;

        let timed = async move {
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result.map_err(AgentError::from),
                    Err(_) => Err(AgentError::Timeout(limit)),
                },
                None => call.await.map_err(AgentError::from),
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(AgentError::Cancelled),
            result = timed => result,
        }
    }
}

/// Run a search query with logging, timeout and cancellation.
pub(crate) async fn logged_search<S: SearchProvider + ?Sized>(
    stage: Stage,
    search: &S,
    logger: &dyn ExchangeLogger,
    policy: &CallPolicy,
    query: &str,
) -> Result<Vec<SearchResult>, AgentError> {
    let start = Instant::now();
    logger.log(ExchangeEvent::new(
        "search_request",
        stage,
        json!({ "query": query }),
    ));

    match policy.run(search.search(query)).await {
        Ok(results) => {
            debug!(
                "Search '{}' returned {} results in {}ms",
                query,
                results.len(),
                start.elapsed().as_millis()
            );
            logger.log(ExchangeEvent::new(
                "search_response",
                stage,
                json!({ "query": query, "results": results }),
            ));
            Ok(results)
        }
        Err(e) => {
            logger.log(ExchangeEvent::new(
                "search_error",
                stage,
                json!({ "query": query, "error": e.to_string() }),
            ));
            Err(e)
        }
    }
}

/// Send one completion request with logging, timeout and cancellation.
pub(crate) async fn logged_completion<C: CompletionProvider + ?Sized>(
    stage: Stage,
    completion: &C,
    logger: &dyn ExchangeLogger,
    policy: &CallPolicy,
    system: &str,
    user: &str,
) -> Result<String, AgentError> {
    let start = Instant::now();
    logger.log(ExchangeEvent::new(
        "completion_request",
        stage,
        json!({ "model": completion.model_id(), "system": system, "user": user }),
    ));

    match policy.run(completion.complete(system, user)).await {
        Ok(text) => {
            let elapsed = start.elapsed();
            debug!(
                "{} completion: {} bytes in {}ms",
                stage,
                text.len(),
                elapsed.as_millis()
            );
            logger.log(ExchangeEvent::new(
                "completion_response",
                stage,
                json!({
                    "model": completion.model_id(),
                    "duration_ms": elapsed.as_millis() as u64,
                    "text": text,
                }),
            ));
            Ok(text)
        }
        Err(e) => {
            logger.log(ExchangeEvent::new(
                "completion_error",
                stage,
                json!({ "model": completion.model_id(), "error": e.to_string() }),
            ));
            Err(e)
        }
    }
}

/// Record a model response that could not be turned into entities.
pub(crate) fn log_rejected_output(
    stage: Stage,
    logger: &dyn ExchangeLogger,
    raw: &str,
    error: &AgentError,
) {
    debug!(
        "{} rejected model output ({}): {}",
        stage,
        error,
        truncate(raw, RAW_EXCERPT_CHARS)
    );
    logger.log(ExchangeEvent::new(
        "rejected_output",
        stage,
        json!({ "error": error.to_string(), "raw": raw }),
    ));
}
