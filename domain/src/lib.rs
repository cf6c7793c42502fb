//! Domain layer for skillpath
//!
//! This crate contains the entities, the model-output normalizer and the
//! shape validation that protect every agent from an unreliable text
//! generator. It has no I/O and no dependencies on the outer layers.
//!
//! # Core Concepts
//!
//! ## Pipeline
//!
//! - **Chain 1**: location (+ sectors) → search snippets → jobs
//! - **Chain 2**: job → skills → one learning roadmap per skill
//!
//! ## Normalization
//!
//! Model output is decoded in two steps: [`normalize()`] repairs and parses
//! the text into an untyped JSON tree ([`ParseError`] on failure), then the
//! [`validation`] functions check it field by field into entities
//! ([`ShapeError`] on failure).

pub mod career;
pub mod core;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod validation;

// Re-export commonly used types
pub use career::{
    CareerPlan, Importance, Job, ResourceLinkTemplate, RoadmapStep, SearchQuery, SearchResult,
    Skill, is_aggregate_listing,
};
pub use core::{
    agent_result::AgentResult,
    error::{ParseError, ShapeError},
};
pub use normalize::normalize;
pub use pipeline::Stage;
pub use prompt::PromptTemplate;
pub use validation::{
    ExtractedJobs, MAX_DESCRIPTION_WORDS, MAX_ROADMAP_STEPS, REFINED_SKILL_COUNT,
    SkillCountPolicy, StepOutline, validate_jobs, validate_roadmap, validate_skills,
};
