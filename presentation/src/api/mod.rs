//! HTTP boundary handlers
//!
//! Framework-agnostic request handlers for the three JSON endpoints. Each
//! handler takes a raw request body and returns an [`ApiResponse`] (status
//! code plus JSON body) that any HTTP server, or the `skillpath api`
//! subcommand, can send as-is.

mod handlers;
mod types;

pub use handlers::ApiHandlers;
pub use types::{
    ApiEndpoint, ApiResponse, JobSearchRequest, RoadmapRequest, SkillExtractionRequest,
};
