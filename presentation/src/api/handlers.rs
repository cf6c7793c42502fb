//! Endpoint handlers backed by the pipeline orchestrator

use super::types::{
    ApiEndpoint, ApiResponse, JobSearchRequest, RoadmapRequest, SkillExtractionRequest, required,
};
use serde::de::DeserializeOwned;
use skillpath_application::{CompletionProvider, PipelineOrchestrator, SearchProvider};
use std::sync::Arc;
use tracing::{info, warn};

/// Handlers for the job search, skill extraction and roadmap endpoints
pub struct ApiHandlers<S, C>
where
    S: SearchProvider + 'static,
    C: CompletionProvider + ?Sized + 'static,
{
    orchestrator: Arc<PipelineOrchestrator<S, C>>,
}

impl<S, C> ApiHandlers<S, C>
where
    S: SearchProvider + 'static,
    C: CompletionProvider + ?Sized + 'static,
{
    pub fn new(orchestrator: Arc<PipelineOrchestrator<S, C>>) -> Self {
        Self { orchestrator }
    }

    /// Dispatch a raw body to the handler of `endpoint`
    pub async fn handle(&self, endpoint: ApiEndpoint, body: &str) -> ApiResponse {
        info!("Handling {:?} request", endpoint);
        let response = match endpoint {
            ApiEndpoint::Jobs => self.job_search(body).await,
            ApiEndpoint::Skills => self.skill_extraction(body).await,
            ApiEndpoint::Roadmap => self.roadmap(body).await,
        };
        if !response.is_success() {
            warn!("{:?} request failed with status {}", endpoint, response.status);
        }
        response
    }

    /// `{ location, sectors? }` -> `{ data: Job[] }`
    pub async fn job_search(&self, body: &str) -> ApiResponse {
        let request: JobSearchRequest = match parse_body(body) {
            Ok(request) => request,
            Err(response) => return response,
        };
        let Some(location) = required(request.location) else {
            return ApiResponse::missing_field("location");
        };
        let sectors = request.sectors.unwrap_or_default();

        ApiResponse::from_agent_result(self.orchestrator.find_jobs(&location, &sectors).await)
    }

    /// `{ jobDescription }` -> `{ data: Skill[] }`
    pub async fn skill_extraction(&self, body: &str) -> ApiResponse {
        let request: SkillExtractionRequest = match parse_body(body) {
            Ok(request) => request,
            Err(response) => return response,
        };
        let Some(job_description) = required(request.job_description) else {
            return ApiResponse::missing_field("jobDescription");
        };

        ApiResponse::from_agent_result(self.orchestrator.extract_skills(&job_description).await)
    }

    /// `{ skillName }` -> `{ data: RoadmapStep[] }`
    pub async fn roadmap(&self, body: &str) -> ApiResponse {
        let request: RoadmapRequest = match parse_body(body) {
            Ok(request) => request,
            Err(response) => return response,
        };
        let Some(skill_name) = required(request.skill_name) else {
            return ApiResponse::missing_field("skillName");
        };

        ApiResponse::from_agent_result(self.orchestrator.generate_roadmap(&skill_name).await)
    }
}

/// Decode a request body; an undecodable body is a 500.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiResponse> {
    serde_json::from_str(body).map_err(|e| {
        warn!("Unreadable request body: {}", e);
        ApiResponse::internal_error(format!("Failed to process request: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use skillpath_application::{CompletionError, PipelineParams, SearchError};
    use skillpath_domain::SearchResult;
    use std::sync::Mutex;

    struct FakeSearch {
        fail: bool,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(SearchError::Status(503));
            }
            Ok(vec![SearchResult::new(
                "Software Engineer",
                "Build APIs",
                "https://jobs.example/1",
            )])
        }
    }

    /// Answers each stage by looking at the system instruction
    struct FakeCompletion;

    #[async_trait]
    impl CompletionProvider for FakeCompletion {
        async fn complete(&self, system: &str, _user: &str) -> Result<String, CompletionError> {
            let text = if system.contains("extracting job information") {
                r#"[{"title": "Software Engineer", "description": "Build APIs"}]"#
            } else if system.contains("extracting skills") {
                r#"[
                    {"skillName": "Go", "description": "Services", "importance": "High"},
                    {"skillName": "SQL", "description": "Queries", "importance": "High"},
                    {"skillName": "Docker", "description": "Containers", "importance": "Medium"},
                    {"skillName": "Git", "description": "Versioning", "importance": "Low"},
                    {"skillName": "Testing", "description": "Quality", "importance": "Medium"}
                ]"#
            } else {
                r#"[{"name": "Basics", "description": "Learn the syntax."}]"#
            };
            Ok(text.to_string())
        }
    }

    fn handlers(fail_search: bool) -> (ApiHandlers<FakeSearch, FakeCompletion>, Arc<FakeSearch>) {
        let search = Arc::new(FakeSearch {
            fail: fail_search,
            queries: Mutex::new(Vec::new()),
        });
        let orchestrator = PipelineOrchestrator::new(
            Arc::clone(&search),
            Arc::new(FakeCompletion),
            PipelineParams::default(),
        );
        (ApiHandlers::new(Arc::new(orchestrator)), search)
    }

    #[tokio::test]
    async fn test_job_search_success() {
        let (api, search) = handlers(false);

        let response = api
            .handle(ApiEndpoint::Jobs, r#"{"location": "Berlin"}"#)
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body["data"][0]["title"], "Software Engineer");
        assert_eq!(*search.queries.lock().unwrap(), vec!["jobs in Berlin"]);
    }

    #[tokio::test]
    async fn test_job_search_with_sectors() {
        let (api, search) = handlers(false);

        api.job_search(r#"{"location": "London", "sectors": ["Technology", "Finance"]}"#)
            .await;

        assert_eq!(search.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_fields_are_400() {
        let (api, search) = handlers(false);

        let cases = [
            (ApiEndpoint::Jobs, "{}", "location"),
            (ApiEndpoint::Jobs, r#"{"location": ""}"#, "location"),
            (ApiEndpoint::Skills, r#"{"jobDescription": null}"#, "jobDescription"),
            (ApiEndpoint::Roadmap, r#"{"skill": "Rust"}"#, "skillName"),
        ];
        for (endpoint, body, field) in cases {
            let response = api.handle(endpoint, body).await;
            assert_eq!(response.status, 400);
            assert_eq!(
                response.body,
                json!({"error": format!("Missing {} in the request body", field)})
            );
        }
        assert!(search.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_agent_failure_is_500_with_verbatim_error() {
        let (api, _) = handlers(true);

        let response = api.job_search(r#"{"location": "Berlin"}"#).await;

        assert_eq!(response.status, 500);
        assert_eq!(
            response.body,
            json!({"error": "JobSearchAgent failed: Search backend returned HTTP 503"})
        );
    }

    #[tokio::test]
    async fn test_unreadable_body_is_500() {
        let (api, _) = handlers(false);

        let response = api.roadmap("not json").await;

        assert_eq!(response.status, 500);
        assert!(
            response.body["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to process request: ")
        );
    }

    #[tokio::test]
    async fn test_skill_extraction_and_roadmap() {
        let (api, _) = handlers(false);

        let skills = api
            .skill_extraction(r#"{"jobDescription": "Backend developer"}"#)
            .await;
        assert_eq!(skills.status, 200);
        assert_eq!(skills.body["data"].as_array().unwrap().len(), 5);
        assert_eq!(skills.body["data"][0]["skillName"], "Go");

        let roadmap = api.roadmap(r#"{"skillName": "Go"}"#).await;
        assert_eq!(roadmap.status, 200);
        assert_eq!(
            roadmap.body["data"][0]["resourceLinks"][0],
            "https://duckduckgo.com/?q=free+online+resources+for+Basics+in+Go"
        );
    }
}
