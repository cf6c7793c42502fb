//! Search provider port
//!
//! Defines the interface for querying a web search backend.

use async_trait::async_trait;
use skillpath_domain::SearchResult;
use thiserror::Error;

/// Errors that can occur while talking to the search backend
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search backend unreachable: {0}")]
    Connection(String),

    #[error("Search backend returned HTTP {0}")]
    Status(u16),

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Search request timed out")]
    Timeout,
}

/// Keyword search against a web search backend
///
/// Implementations return results in backend order. An empty vector is a
/// valid answer; backend failures are reported as [`SearchError`], never
/// as an empty result. No retry happens at this layer.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
