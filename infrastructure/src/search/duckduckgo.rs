//! DuckDuckGo HTML search adapter.
//!
//! Queries the no-JavaScript results page and scrapes result blocks with
//! `scraper`. No API key is required. Result links on that page go through
//! a `//duckduckgo.com/l/?uddg=<target>` redirect; the target is unwrapped
//! so callers see the real URL.

use crate::config::FileSearchConfig;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use skillpath_application::{SearchError, SearchProvider};
use skillpath_domain::SearchResult;
use skillpath_domain::career::resource_link::query_param;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Status DuckDuckGo answers with when it throttles automated queries
const THROTTLED_STATUS: u16 = 202;

/// Origin that relative result links resolve against
const LINK_ORIGIN: &str = "https://duckduckgo.com/";

/// Search provider scraping DuckDuckGo's HTML endpoint
pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
    max_results: usize,
}

impl DuckDuckGoSearch {
    pub fn new(config: &FileSearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            max_results: config.max_results,
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() || status.as_u16() == THROTTLED_STATUS {
            warn!("Search for '{}' returned HTTP {}", query, status.as_u16());
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else {
                SearchError::MalformedResponse(format!("Failed to read body: {}", e))
            }
        })?;

        let results = parse_results(&body, self.max_results)?;
        debug!(
            "Search '{}' parsed {} results in {}ms",
            query,
            results.len(),
            start.elapsed().as_millis()
        );
        Ok(results)
    }
}

fn map_request_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Connection(e.to_string())
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css)
        .map_err(|e| SearchError::MalformedResponse(format!("Invalid selector '{}': {}", css, e)))
}

/// Extract up to `max_results` organic results from a results page.
///
/// Ads are skipped, as are blocks without a title or link. A page with no
/// result blocks yields an empty vector.
fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError> {
    let result_selector = selector("div.result:not(.result--ad)")?;
    let title_selector = selector("a.result__a")?;
    let snippet_selector = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let results = document
        .select(&result_selector)
        .filter_map(|block| {
            let anchor = block.select(&title_selector).next()?;
            let title = element_text(anchor);
            let url = resolve_link(anchor.value().attr("href")?)?;
            if title.is_empty() {
                return None;
            }
            let snippet = block
                .select(&snippet_selector)
                .next()
                .map(element_text)
                .unwrap_or_default();
            Some(SearchResult::new(title, snippet, url))
        })
        .take(max_results)
        .collect();

    Ok(results)
}

/// Visible text of an element with whitespace collapsed
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turn a result href into an absolute target URL.
///
/// Protocol-relative and relative hrefs resolve against DuckDuckGo's
/// origin; `/l/?uddg=<target>` redirect links are unwrapped to the target.
fn resolve_link(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => Url::parse(LINK_ORIGIN).ok()?.join(href).ok()?,
    };

    let redirect_target = Some(&url)
        .filter(|url| url.path().ends_with("/l/"))
        .and_then(|url| query_param(url.as_str(), "uddg"));

    Some(redirect_target.unwrap_or_else(|| url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
<html><body>
<div class="result results_links result--ad">
  <h2 class="result__title"><a class="result__a" href="https://ads.example/">Sponsored jobs</a></h2>
  <a class="result__snippet">Ad text</a>
</div>
<div class="result results_links results_links_deep web-result">
  <h2 class="result__title">
    <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fjobs.example%2Fberlin%2F42&amp;rut=abc">Backend   <b>Engineer</b></a>
  </h2>
  <a class="result__snippet" href="//duckduckgo.com/l/?uddg=x">Build <b>APIs</b> in
     Berlin.</a>
</div>
<div class="result results_links web-result">
  <h2 class="result__title"><a class="result__a" href="https://careers.example/nurse">Nurse</a></h2>
</div>
<div class="result results_links web-result">
  <h2 class="result__title"><a class="result__a" href="">No link</a></h2>
</div>
</body></html>
"#;

    #[test]
    fn test_parse_results() {
        let results = parse_results(RESULTS_PAGE, 10).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Backend Engineer");
        assert_eq!(results[0].snippet_text, "Build APIs in Berlin.");
        assert_eq!(results[0].url, "https://jobs.example/berlin/42");
        assert_eq!(results[1].title, "Nurse");
        assert_eq!(results[1].snippet_text, "");
        assert_eq!(results[1].url, "https://careers.example/nurse");
    }

    #[test]
    fn test_parse_results_respects_limit() {
        let results = parse_results(RESULTS_PAGE, 1).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_parse_results_empty_page() {
        let results = parse_results("<html><body><div class=\"no-results\"></div></body></html>", 10)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_resolve_link() {
        assert_eq!(
            resolve_link("//duckduckgo.com/l/?uddg=https%3A%2F%2Fa.example%2F%3Fid%3D1&rut=x")
                .as_deref(),
            Some("https://a.example/?id=1")
        );
        assert_eq!(
            resolve_link("https://b.example/path").as_deref(),
            Some("https://b.example/path")
        );
        assert_eq!(
            resolve_link("//c.example/page").as_deref(),
            Some("https://c.example/page")
        );
        assert_eq!(
            resolve_link("/l/?uddg=https%3A%2F%2Fd.example%2Fjob%20one").as_deref(),
            Some("https://d.example/job one")
        );
        assert_eq!(resolve_link("  "), None);
    }

    #[test]
    fn test_new_from_default_config() {
        let search = DuckDuckGoSearch::new(&FileSearchConfig::default()).unwrap();
        assert_eq!(search.max_results, 10);
        assert!(search.endpoint.starts_with("https://"));
    }
}
