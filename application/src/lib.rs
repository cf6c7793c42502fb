//! Application layer for skillpath
//!
//! This crate contains the agents, the pipeline orchestrator, the port
//! definitions for the search and completion backends, and the pipeline
//! parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    completion_provider::{CompletionError, CompletionProvider},
    exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger},
    progress::{NoProgress, PipelineProgress},
    search_provider::{SearchError, SearchProvider},
};
pub use use_cases::{
    AgentError, CallPolicy, job_search::JobSearchAgent,
    job_title_extraction::JobTitleExtractionAgent, orchestrator::PipelineOrchestrator,
    roadmap_generation::RoadmapGenerationAgent, skill_extraction::SkillExtractionAgent,
};
