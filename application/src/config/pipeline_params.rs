//! Pipeline parameters (agent behavior knobs).
//!
//! [`PipelineParams`] groups the static parameters the agents and the
//! [`PipelineOrchestrator`](crate::use_cases::orchestrator::PipelineOrchestrator)
//! read. They are application-layer concerns; the infrastructure config
//! loader converts the TOML file into this type.

use skillpath_domain::{ResourceLinkTemplate, SkillCountPolicy};
use std::time::Duration;

/// Agent behavior parameters.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Timeout applied to every search and completion call. `None` waits forever.
    pub call_timeout: Option<Duration>,
    /// How many skills a skill extraction must return.
    pub skill_count: SkillCountPolicy,
    /// Run a supplementary "key skills for ..." search before skill extraction.
    pub skill_search: bool,
    /// Format of roadmap resource links.
    pub link_template: ResourceLinkTemplate,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            call_timeout: Some(Duration::from_secs(60)),
            skill_count: SkillCountPolicy::default(),
            skill_search: false,
            link_template: ResourceLinkTemplate::default(),
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_skill_count(mut self, policy: SkillCountPolicy) -> Self {
        self.skill_count = policy;
        self
    }

    pub fn with_skill_search(mut self, enabled: bool) -> Self {
        self.skill_search = enabled;
        self
    }

    pub fn with_link_template(mut self, template: ResourceLinkTemplate) -> Self {
        self.link_template = template;
        self
    }
}
