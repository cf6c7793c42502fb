//! Job search agent
//!
//! Gathers raw job snippets for a location from the search backend.

use crate::ports::exchange_logger::{ExchangeLogger, NoExchangeLogger};
use crate::ports::search_provider::SearchProvider;
use crate::use_cases::shared::{AgentError, CallPolicy, into_agent_result, logged_search};
use skillpath_domain::{AgentResult, SearchQuery, SearchResult, Stage};
use std::sync::Arc;
use tracing::info;

/// Agent issuing one search per sector (or one for the whole location)
pub struct JobSearchAgent<S: SearchProvider + ?Sized> {
    search: Arc<S>,
    policy: CallPolicy,
    logger: Arc<dyn ExchangeLogger>,
}

impl<S: SearchProvider + ?Sized> JobSearchAgent<S> {
    pub fn new(search: Arc<S>) -> Self {
        Self {
            search,
            policy: CallPolicy::default(),
            logger: Arc::new(NoExchangeLogger),
        }
    }

    pub fn with_call_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_exchange_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Search for openings in `location`, optionally split by sector.
    ///
    /// Without sectors a single `jobs in {location}` query is issued. With
    /// sectors, one query per sector is issued in order and the result
    /// sequences are concatenated as-is: duplicates across sectors are kept.
    /// Any failed query fails the whole call.
    pub async fn run(&self, location: &str, sectors: &[String]) -> AgentResult<Vec<SearchResult>> {
        into_agent_result(Stage::JobSearch, self.search_all(location, sectors).await)
    }

    async fn search_all(
        &self,
        location: &str,
        sectors: &[String],
    ) -> Result<Vec<SearchResult>, AgentError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AgentError::InvalidInput(
                "Location must not be empty".to_string(),
            ));
        }

        let queries = Self::queries(location, sectors);
        info!("Searching for jobs with {} queries", queries.len());

        let mut results = Vec::new();
        for query in &queries {
            let batch = logged_search(
                Stage::JobSearch,
                self.search.as_ref(),
                self.logger.as_ref(),
                &self.policy,
                query,
            )
            .await?;
            info!("'{}' returned {} results", query, batch.len());
            results.extend(batch);
        }

        Ok(results)
    }

    /// Build the query list. Blank sectors are ignored.
    fn queries(location: &str, sectors: &[String]) -> Vec<String> {
        let sectors: Vec<&str> = sectors
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        if sectors.is_empty() {
            vec![SearchQuery::jobs(location, None)]
        } else {
            sectors
                .into_iter()
                .map(|sector| SearchQuery::jobs(location, Some(sector)))
                .collect()
        }
    }
}
