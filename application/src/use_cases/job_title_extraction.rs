//! Job title extraction agent
//!
//! Turns raw search snippets into clean `{title, description}` jobs.

use crate::ports::completion_provider::CompletionProvider;
use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::use_cases::shared::{
    AgentError, CallPolicy, into_agent_result, log_rejected_output, logged_completion,
};
use serde_json::Value;
use skillpath_domain::{AgentResult, Job, PromptTemplate, SearchResult, Stage, normalize, validate_jobs};
use std::sync::Arc;
use tracing::{debug, info};

/// Agent extracting job records from search snippets
pub struct JobTitleExtractionAgent<C: CompletionProvider + ?Sized> {
    completion: Arc<C>,
    policy: CallPolicy,
    logger: Arc<dyn ExchangeLogger>,
}

impl<C: CompletionProvider + ?Sized> JobTitleExtractionAgent<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self {
            completion,
            policy: CallPolicy::default(),
            logger: Arc::new(NoExchangeLogger),
        }
    }

    pub fn with_call_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Extract jobs from typed search results.
    ///
    /// An empty snippet list yields an empty job list without a model call.
    pub async fn run(&self, results: &[SearchResult]) -> AgentResult<Vec<Job>> {
        if results.is_empty() {
            info!("No search results to extract jobs from");
            return AgentResult::success(Vec::new());
        }
        let user = PromptTemplate::job_extraction_user(results);
        into_agent_result(Stage::TitleExtraction, self.extract(&user).await)
    }

    /// Extract jobs from a raw search payload of unknown shape.
    pub async fn run_raw(&self, payload: &Value) -> AgentResult<Vec<Job>> {
        let user = match payload {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        into_agent_result(Stage::TitleExtraction, self.extract(&user).await)
    }

    async fn extract(&self, user: &str) -> Result<Vec<Job>, AgentError> {
        let raw = logged_completion(
            Stage::TitleExtraction,
            self.completion.as_ref(),
            self.logger.as_ref(),
            &self.policy,
            PromptTemplate::job_extraction_system(),
            user,
        )
        .await?;

        let extracted = normalize(&raw)
            .map_err(AgentError::from)
            .and_then(|value| validate_jobs(&value).map_err(AgentError::from))
            .inspect_err(|e| log_rejected_output(Stage::TitleExtraction, self.logger.as_ref(), &raw, e))?;

        if !extracted.skipped.is_empty() {
            debug!("Skipped aggregate listings: {:?}", extracted.skipped);
        }
        info!(
            "Extracted {} jobs ({} aggregate listings skipped)",
            extracted.jobs.len(),
            extracted.skipped.len()
        );
        Ok(extracted.jobs)
    }
}
