//! Use cases
//!
//! One agent per pipeline stage plus the orchestrator chaining them.

pub mod job_search;
pub mod job_title_extraction;
pub mod orchestrator;
pub mod roadmap_generation;
pub(crate) mod shared;
pub mod skill_extraction;

#[cfg(test)]
mod test_support;

pub use shared::{AgentError, CallPolicy};
