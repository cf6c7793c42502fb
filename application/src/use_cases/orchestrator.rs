//! Pipeline orchestrator
//!
//! Sequences the agents into the two user-facing chains:
//!
//! 1. **Find jobs**: search for a location, then extract clean jobs.
//! 2. **Plan for a job**: extract skills, then generate one roadmap per
//!    skill concurrently.
//!
//! The first failing stage ends a chain and its error is surfaced as-is.
//! Nothing is retried.

use crate::config::PipelineParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::ports::progress::{NoProgress, PipelineProgress};
use crate::ports::search_provider::SearchProvider;
use crate::use_cases::job_search::JobSearchAgent;
use crate::use_cases::job_title_extraction::JobTitleExtractionAgent;
use crate::use_cases::roadmap_generation::RoadmapGenerationAgent;
use crate::use_cases::shared::{AgentError, CallPolicy};
use crate::use_cases::skill_extraction::SkillExtractionAgent;
use skillpath_domain::{AgentResult, CareerPlan, Job, RoadmapStep, Skill, Stage};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Runs the agents in order, sharing providers, parameters and cancellation.
pub struct PipelineOrchestrator<S, C>
where
    S: SearchProvider + 'static,
    C: CompletionProvider + ?Sized + 'static,
{
    search: Arc<S>,
    completion: Arc<C>,
    params: PipelineParams,
    cancellation: Option<CancellationToken>,
    logger: Arc<dyn ExchangeLogger>,
    progress: Arc<dyn PipelineProgress>,
}

impl<S, C> PipelineOrchestrator<S, C>
where
    S: SearchProvider + 'static,
    C: CompletionProvider + ?Sized + 'static,
{
    pub fn new(search: Arc<S>, completion: Arc<C>, params: PipelineParams) -> Self {
        Self {
            search,
            completion,
            params,
            cancellation: None,
            logger: Arc::new(NoExchangeLogger),
            progress: Arc::new(NoProgress),
        }
    }

    /// Set a cancellation token checked around every backend call
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn PipelineProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    // ==================== Chain 1 ====================

    /// Search `location` (optionally per sector) and extract the jobs found.
    pub async fn find_jobs(&self, location: &str, sectors: &[String]) -> AgentResult<Vec<Job>> {
        info!("Finding jobs in '{}' ({} sectors)", location, sectors.len());

        let results = self
            .staged(Stage::JobSearch, location, self.job_search_agent().run(location, sectors))
            .await;
        let results = match results.into_result() {
            Ok(results) => results,
            Err(error) => return AgentResult::failure(error),
        };

        self.staged(
            Stage::TitleExtraction,
            location,
            self.title_extraction_agent().run(&results),
        )
        .await
    }

    // ==================== Chain 2 ====================

    /// Extract skills for `job`, then generate a roadmap for each skill.
    pub async fn plan_for_job(&self, job: &Job) -> AgentResult<CareerPlan> {
        info!("Planning for job '{}'", job.title);

        let skills = self
            .staged(
                Stage::SkillExtraction,
                &job.title,
                self.skill_extraction_agent().run_for_job(job),
            )
            .await;
        let skills = match skills.into_result() {
            Ok(skills) => skills,
            Err(error) => return AgentResult::failure(error),
        };

        self.roadmaps_for_skills(&skills)
            .await
            .map(|roadmaps| CareerPlan::new(job.clone(), skills, roadmaps))
    }

    /// Generate one roadmap per skill concurrently.
    ///
    /// `roadmaps[i]` belongs to `skills[i]` regardless of completion order.
    /// The first failure (or a cancellation) aborts the remaining tasks and
    /// fails the whole batch; no partial roadmaps are returned.
    pub async fn roadmaps_for_skills(&self, skills: &[Skill]) -> AgentResult<Vec<Vec<RoadmapStep>>> {
        let stage = Stage::RoadmapGeneration;
        self.progress.on_stage_start(stage, skills.len());
        info!("Generating {} roadmaps", skills.len());

        let agent = Arc::new(self.roadmap_agent());
        let mut join_set = JoinSet::new();
        for (index, skill) in skills.iter().enumerate() {
            let agent = Arc::clone(&agent);
            let skill_name = skill.skill_name.clone();
            join_set.spawn(async move {
                let outcome = agent.run(&skill_name).await;
                (index, skill_name, outcome)
            });
        }

        let policy = self.call_policy();
        let mut slots: Vec<Option<Vec<RoadmapStep>>> = vec![None; skills.len()];
        loop {
            let joined = tokio::select! {
                biased;
                _ = policy.cancelled() => {
                    join_set.abort_all();
                    return self.fail_stage(stage, AgentError::Cancelled.to_string());
                }
                joined = join_set.join_next() => joined,
            };

            let Some(joined) = joined else { break };
            match joined {
                Ok((index, skill_name, outcome)) => match outcome.into_result() {
                    Ok(steps) => {
                        self.progress.on_task_complete(stage, &skill_name, true);
                        slots[index] = Some(steps);
                    }
                    Err(error) => {
                        self.progress.on_task_complete(stage, &skill_name, false);
                        join_set.abort_all();
                        self.progress.on_stage_complete(stage, false);
                        return AgentResult::failure(error);
                    }
                },
                Err(e) => {
                    warn!("Roadmap task join error: {}", e);
                    join_set.abort_all();
                    return self.fail_stage(stage, format!("roadmap task failed: {}", e));
                }
            }
        }

        self.progress.on_stage_complete(stage, true);
        // Every slot is filled once the join set drains without failure
        AgentResult::success(slots.into_iter().flatten().collect())
    }

    // ==================== Single-agent entry points ====================

    pub async fn extract_skills(&self, job_description: &str) -> AgentResult<Vec<Skill>> {
        self.staged(
            Stage::SkillExtraction,
            job_description,
            self.skill_extraction_agent().run(job_description),
        )
        .await
    }

    pub async fn generate_roadmap(&self, skill_name: &str) -> AgentResult<Vec<RoadmapStep>> {
        self.staged(
            Stage::RoadmapGeneration,
            skill_name,
            self.roadmap_agent().run(skill_name),
        )
        .await
    }

    // ==================== Helpers ====================

    /// Run a single-task stage with progress notifications.
    async fn staged<T>(
        &self,
        stage: Stage,
        label: &str,
        run: impl Future<Output = AgentResult<T>>,
    ) -> AgentResult<T> {
        self.progress.on_stage_start(stage, 1);
        let outcome = run.await;
        self.progress
            .on_task_complete(stage, label, outcome.is_success());
        self.progress.on_stage_complete(stage, outcome.is_success());
        outcome
    }

    fn fail_stage<T>(&self, stage: Stage, reason: String) -> AgentResult<T> {
        warn!("{} failed: {}", stage.agent_name(), reason);
        self.progress.on_stage_complete(stage, false);
        AgentResult::failure(format!("{} failed: {}", stage.agent_name(), reason))
    }

    fn call_policy(&self) -> CallPolicy {
        let policy = CallPolicy::new(self.params.call_timeout);
        match &self.cancellation {
            Some(token) => policy.with_cancellation(token.clone()),
            None => policy,
        }
    }

    fn job_search_agent(&self) -> JobSearchAgent<S> {
        JobSearchAgent::new(Arc::clone(&self.search))
            .with_call_policy(self.call_policy())
            .with_exchange_logger(Arc::clone(&self.logger))
    }

    fn title_extraction_agent(&self) -> JobTitleExtractionAgent<C> {
        JobTitleExtractionAgent::new(Arc::clone(&self.completion))
            .with_call_policy(self.call_policy())
            .with_exchange_logger(Arc::clone(&self.logger))
    }

    fn skill_extraction_agent(&self) -> SkillExtractionAgent<C> {
        let agent = SkillExtractionAgent::new(Arc::clone(&self.completion))
            .with_skill_count(self.params.skill_count)
            .with_call_policy(self.call_policy())
            .with_exchange_logger(Arc::clone(&self.logger));
        if self.params.skill_search {
            let search: Arc<dyn SearchProvider> = self.search.clone();
            agent.with_grounding(search)
        } else {
            agent
        }
    }

    fn roadmap_agent(&self) -> RoadmapGenerationAgent<C> {
        RoadmapGenerationAgent::new(Arc::clone(&self.completion))
            .with_link_template(self.params.link_template.clone())
            .with_call_policy(self.call_policy())
            .with_exchange_logger(Arc::clone(&self.logger))
    }
}
