//! Core domain concepts shared across all subdomains.
//!
//! - [`agent_result::AgentResult`]: the uniform envelope every agent returns
//! - [`error::ParseError`] / [`error::ShapeError`]: model-output failures
//! - [`text`]: small text helpers (word counting, truncation)

pub mod agent_result;
pub mod error;
pub mod text;
