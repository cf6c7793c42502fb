//! Roadmap generation agent
//!
//! Produces a short learning roadmap for one skill. Resource links are
//! rebuilt from the step and skill names; model-supplied links are dropped.

use crate::ports::completion_provider::CompletionProvider;
use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::use_cases::shared::{
    AgentError, CallPolicy, into_agent_result, log_rejected_output, logged_completion,
};
use skillpath_domain::{
    AgentResult, PromptTemplate, ResourceLinkTemplate, RoadmapStep, Stage, normalize,
    validate_roadmap,
};
use std::sync::Arc;
use tracing::info;

/// Agent generating a learning roadmap for a skill
pub struct RoadmapGenerationAgent<C: CompletionProvider + ?Sized> {
    completion: Arc<C>,
    links: ResourceLinkTemplate,
    policy: CallPolicy,
    logger: Arc<dyn ExchangeLogger>,
}

impl<C: CompletionProvider + ?Sized> RoadmapGenerationAgent<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self {
            completion,
            links: ResourceLinkTemplate::default(),
            policy: CallPolicy::default(),
            logger: Arc::new(NoExchangeLogger),
        }
    }

    pub fn with_link_template(mut self, links: ResourceLinkTemplate) -> Self {
        self.links = links;
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

    pub async fn run(&self, skill_name: &str) -> AgentResult<Vec<RoadmapStep>> {
        into_agent_result(Stage::RoadmapGeneration, self.generate(skill_name).await)
    }

    async fn generate(&self, skill_name: &str) -> Result<Vec<RoadmapStep>, AgentError> {
        let skill_name = skill_name.trim();
        if skill_name.is_empty() {
            return Err(AgentError::InvalidInput(
                "Skill name must not be empty".to_string(),
            ));
        }

        let raw = logged_completion(
            Stage::RoadmapGeneration,
            self.completion.as_ref(),
            self.logger.as_ref(),
            &self.policy,
            &PromptTemplate::roadmap_system(&self.links),
            &PromptTemplate::roadmap_user(skill_name),
        )
        .await?;

        let outline = normalize(&raw)
            .map_err(AgentError::from)
            .and_then(|value| validate_roadmap(&value).map_err(AgentError::from))
            .inspect_err(|e| log_rejected_output(Stage::RoadmapGeneration, self.logger.as_ref(), &raw, e))?;

        let steps: Vec<RoadmapStep> = outline
            .into_iter()
            .map(|step| {
                let link = self.links.link_for(&step.name, skill_name);
                RoadmapStep::new(step.name, step.description, vec![link])
            })
            .collect();

        info!("Generated {} roadmap steps for '{}'", steps.len(), skill_name);
        Ok(steps)
    }
}
