//! Stages of the agent pipeline

use serde::{Deserialize, Serialize};

/// One stage of the pipeline. Each stage is owned by exactly one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Web search for job snippets
    JobSearch,
    /// Snippets to `{title, description}` jobs
    TitleExtraction,
    /// Job to skills
    SkillExtraction,
    /// Skill to learning roadmap
    RoadmapGeneration,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::JobSearch => "job_search",
            Stage::TitleExtraction => "title_extraction",
            Stage::SkillExtraction => "skill_extraction",
            Stage::RoadmapGeneration => "roadmap_generation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::JobSearch => "Job Search",
            Stage::TitleExtraction => "Job Title Extraction",
            Stage::SkillExtraction => "Skill Extraction",
            Stage::RoadmapGeneration => "Roadmap Generation",
        }
    }

    /// Name of the agent that owns this stage, used as the error prefix.
    pub fn agent_name(&self) -> &'static str {
        match self {
            Stage::JobSearch => "JobSearchAgent",
            Stage::TitleExtraction => "JobTitleExtractionAgent",
            Stage::SkillExtraction => "SkillExtractionAgent",
            Stage::RoadmapGeneration => "RoadmapGenerationAgent",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
