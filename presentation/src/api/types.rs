//! Request and response types of the HTTP boundary

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use skillpath_domain::AgentResult;

/// The three JSON endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApiEndpoint {
    /// `{ location, sectors? }` -> `{ data: Job[] }`
    Jobs,
    /// `{ jobDescription }` -> `{ data: Skill[] }`
    Skills,
    /// `{ skillName }` -> `{ data: RoadmapStep[] }`
    Roadmap,
}

/// Body of the job search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchRequest {
    pub location: Option<String>,
    #[serde(default)]
    pub sectors: Option<Vec<String>>,
}

/// Body of the skill extraction endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillExtractionRequest {
    pub job_description: Option<String>,
}

/// Body of the roadmap generation endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub skill_name: Option<String>,
}

/// Status code and JSON body of a handled request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with `{ data }`
    pub fn ok(data: Value) -> Self {
        Self {
            status: 200,
            body: json!({ "data": data }),
        }
    }

    /// 400 naming the missing field
    pub fn missing_field(field: &str) -> Self {
        Self {
            status: 400,
            body: json!({ "error": format!("Missing {} in the request body", field) }),
        }
    }

    /// 500 with `{ error }`
    pub fn internal_error(error: impl Into<String>) -> Self {
        Self {
            status: 500,
            body: json!({ "error": error.into() }),
        }
    }

    /// 200 for a successful agent result, 500 carrying its error otherwise
    pub fn from_agent_result<T: Serialize>(result: AgentResult<T>) -> Self {
        match result.into_result() {
            Ok(data) => match serde_json::to_value(data) {
                Ok(data) => Self::ok(data),
                Err(e) => Self::internal_error(format!("Failed to process request: {}", e)),
            },
            Err(error) => Self::internal_error(error),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A required string field: absent, `null` and `""` all count as missing.
pub(super) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
