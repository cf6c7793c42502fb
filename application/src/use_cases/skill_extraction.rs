//! Skill extraction agent
//!
//! Asks the completion backend for the key skills of a job, optionally
//! grounded with a supplementary web search.

use crate::ports::completion_provider::CompletionProvider;
use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::ports::search_provider::SearchProvider;
use crate::use_cases::shared::{
    AgentError, CallPolicy, into_agent_result, log_rejected_output, logged_completion,
    logged_search,
};
use skillpath_domain::{
    AgentResult, Job, PromptTemplate, SearchQuery, Skill, SkillCountPolicy, Stage, normalize,
    validate_skills,
};
use std::sync::Arc;
use tracing::info;

/// Agent extracting skills from a job description
pub struct SkillExtractionAgent<C: CompletionProvider + ?Sized> {
    completion: Arc<C>,
    grounding: Option<Arc<dyn SearchProvider>>,
    count: SkillCountPolicy,
    policy: CallPolicy,
    logger: Arc<dyn ExchangeLogger>,
}

impl<C: CompletionProvider + ?Sized> SkillExtractionAgent<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self {
            completion,
            grounding: None,
            count: SkillCountPolicy::default(),
            policy: CallPolicy::default(),
            logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Run a `key skills for ...` search first and embed its results in the prompt.
    pub fn with_grounding(mut self, search: Arc<dyn SearchProvider>) -> Self {
        self.grounding = Some(search);
        self
    }

    pub fn with_skill_count(mut self, count: SkillCountPolicy) -> Self {
        self.count = count;
        self
    }

    pub fn with_call_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Extract skills from a free-text job description.
    pub async fn run(&self, job_description: &str) -> AgentResult<Vec<Skill>> {
        into_agent_result(Stage::SkillExtraction, self.extract(job_description).await)
    }

    /// Extract skills for a job, describing it by title and description.
    pub async fn run_for_job(&self, job: &Job) -> AgentResult<Vec<Skill>> {
        let description = format!("{}: {}", job.title, job.description);
        self.run(&description).await
    }

    async fn extract(&self, job_description: &str) -> Result<Vec<Skill>, AgentError> {
        let job_description = job_description.trim();
        if job_description.is_empty() {
            return Err(AgentError::InvalidInput(
                "Job description must not be empty".to_string(),
            ));
        }

        let grounding = match &self.grounding {
            Some(search) => Some(
                logged_search(
                    Stage::SkillExtraction,
                    search.as_ref(),
                    self.logger.as_ref(),
                    &self.policy,
                    &SearchQuery::key_skills(job_description),
                )
                .await?,
            ),
            None => None,
        };

        let raw = logged_completion(
            Stage::SkillExtraction,
            self.completion.as_ref(),
            self.logger.as_ref(),
            &self.policy,
            &PromptTemplate::skill_extraction_system(self.count),
            &PromptTemplate::skill_extraction_user(job_description, grounding.as_deref()),
        )
        .await?;

        let skills = normalize(&raw)
            .map_err(AgentError::from)
            .and_then(|value| validate_skills(&value, self.count).map_err(AgentError::from))
            .inspect_err(|e| log_rejected_output(Stage::SkillExtraction, self.logger.as_ref(), &raw, e))?;

        info!("Extracted {} skills", skills.len());
        Ok(skills)
    }
}
