//! Application-level configuration.
//!
//! - [`PipelineParams`]: per-call timeout, skill count policy, grounding
//!   search and resource link format used by the agents

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
