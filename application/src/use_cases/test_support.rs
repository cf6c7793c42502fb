//! Scripted providers shared by the agent and orchestrator tests.

use crate::ports::completion_provider::{CompletionError, CompletionProvider};
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use crate::ports::search_provider::{SearchError, SearchProvider};
use async_trait::async_trait;
use skillpath_domain::SearchResult;
use std::sync::Mutex;
use std::time::Duration;

type SearchScript = Box<dyn Fn(&str) -> Result<Vec<SearchResult>, SearchError> + Send + Sync>;
type CompletionScript =
    Box<dyn Fn(&str, &str) -> Result<String, CompletionError> + Send + Sync>;

/// Search provider answering from a closure and recording every query
pub struct ScriptedSearch {
    script: SearchScript,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub fn new(
        script: impl Fn(&str) -> Result<Vec<SearchResult>, SearchError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Answers every query with the same results
    pub fn returning(results: Vec<SearchResult>) -> Self {
        Self::new(move |_| Ok(results.clone()))
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        (self.script)(query)
    }
}

/// Completion provider answering from a closure over (system, user)
pub struct ScriptedCompletion {
    script: CompletionScript,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedCompletion {
    pub fn new(
        script: impl Fn(&str, &str) -> Result<String, CompletionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with the same text
    pub fn returning(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_, _| Ok(text.clone()))
    }

    /// Sleep before answering, to exercise timeouts and cancellation
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.script)(system, user)
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}

/// Exchange logger keeping event types in memory
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl ExchangeLogger for RecordingLogger {
    fn log(&self, event: ExchangeEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

pub fn result(title: &str, snippet: &str) -> SearchResult {
    SearchResult::new(title, snippet, format!("https://jobs.example/{}", title.len()))
}

/// Five well-formed skills as model output
pub fn five_skills_json() -> String {
    r#"[
        {"skillName": "Python", "description": "Scripting", "importance": "High"},
        {"skillName": "SQL", "description": "Queries", "importance": "High"},
        {"skillName": "Statistics", "description": "Inference", "importance": "Medium"},
        {"skillName": "Tableau", "description": "Dashboards", "importance": "Low"},
        {"skillName": "Communication", "description": "Stakeholders", "importance": "Medium"}
    ]"#
    .to_string()
}

/// A two-step roadmap as model output
pub fn roadmap_json(skill: &str) -> String {
    format!(
        r#"[
            {{"name": "{skill} Fundamentals", "description": "Core concepts of {skill}.", "resourceLinks": ["https://example.com/made-up"]}},
            {{"name": "Applied {skill}", "description": "Build a project with {skill}."}}
        ]"#
    )
}
