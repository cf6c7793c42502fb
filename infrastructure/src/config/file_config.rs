//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use skillpath_application::PipelineParams;
use skillpath_domain::{ResourceLinkTemplate, SkillCountPolicy};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("completion.model cannot be empty")]
    EmptyModelName,

    #[error("pipeline.skill_count cannot be 0")]
    ZeroSkillCount,

    #[error("search.max_results cannot be 0")]
    ZeroMaxResults,

    #[error("{field} must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}

/// Raw search backend configuration (`[search]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// HTML search endpoint queried for job and skill snippets
    pub endpoint: String,
    /// User-Agent header sent with every search
    pub user_agent: String,
    /// HTTP timeout for one search request
    pub timeout_seconds: u64,
    /// Maximum results kept per query
    pub max_results: usize,
    /// Search page that roadmap resource links point at
    pub link_base: String,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://html.duckduckgo.com/html/".to_string(),
            user_agent: concat!("skillpath/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
            max_results: 10,
            link_base: skillpath_domain::career::resource_link::DEFAULT_LINK_BASE.to_string(),
        }
    }
}

/// Raw completion backend configuration (`[completion]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// HTTP timeout for one completion request
    pub timeout_seconds: u64,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.2,
            max_tokens: 2048,
            timeout_seconds: 120,
        }
    }
}

/// Raw pipeline configuration (`[pipeline]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Timeout wrapped around every backend call
    pub call_timeout_seconds: u64,
    /// `{ exactly = 5 }` or `"unbounded"`
    pub skill_count: SkillCountPolicy,
    /// Ground skill extraction with a supplementary search
    pub skill_search: bool,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            call_timeout_seconds: 60,
            skill_count: SkillCountPolicy::default(),
            skill_search: false,
        }
    }
}

/// Raw logging configuration (`[logging]`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every backend exchange
    pub exchange_log: Option<PathBuf>,
    /// Directory for daily rolling `tracing` log files
    pub dir: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub search: FileSearchConfig,
    pub completion: FileCompletionConfig,
    pub pipeline: FilePipelineConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.search.timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout("search.timeout_seconds"));
        }
        if self.completion.timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout(
                "completion.timeout_seconds",
            ));
        }
        if self.pipeline.call_timeout_seconds == 0 {
            return Err(ConfigValidationError::ZeroTimeout(
                "pipeline.call_timeout_seconds",
            ));
        }

        if self.completion.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.pipeline.skill_count == SkillCountPolicy::Exactly(0) {
            return Err(ConfigValidationError::ZeroSkillCount);
        }

        if self.search.max_results == 0 {
            return Err(ConfigValidationError::ZeroMaxResults);
        }

        for (field, value) in [
            ("search.endpoint", &self.search.endpoint),
            ("search.link_base", &self.search.link_base),
            ("completion.base_url", &self.completion.base_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigValidationError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Convert to the agent parameters used by the application layer
    pub fn to_pipeline_params(&self) -> PipelineParams {
        PipelineParams::default()
            .with_call_timeout(Some(Duration::from_secs(
                self.pipeline.call_timeout_seconds,
            )))
            .with_skill_count(self.pipeline.skill_count)
            .with_skill_search(self.pipeline.skill_search)
            .with_link_template(ResourceLinkTemplate::new(&self.search.link_base))
    }
}
