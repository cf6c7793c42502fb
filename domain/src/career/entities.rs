//! Career domain entities
//!
//! Every entity is created once by the agent that owns its stage and never
//! mutated afterwards. Serialized field names follow the JSON contract
//! (`snippetText`, `skillName`, `resourceLinks`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw hit from the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub snippet_text: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        snippet_text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet_text: snippet_text.into(),
            url: url.into(),
        }
    }
}

/// A single job opening extracted from search snippets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub description: String,
}

impl Job {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// How much a skill matters for a job. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is outside the [`Importance`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownImportance(pub String);

impl fmt::Display for UnknownImportance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown importance '{}'", self.0)
    }
}

impl std::error::Error for UnknownImportance {}

impl FromStr for Importance {
    type Err = UnknownImportance;

    /// Exact tokens only (surrounding whitespace ignored). "high" or
    /// "Critical" are rejected rather than coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High" => Ok(Importance::High),
            "Medium" => Ok(Importance::Medium),
            "Low" => Ok(Importance::Low),
            other => Err(UnknownImportance(other.to_string())),
        }
    }
}

/// A skill demanded by a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub description: String,
    pub importance: Importance,
}

impl Skill {
    pub fn new(
        skill_name: impl Into<String>,
        description: impl Into<String>,
        importance: Importance,
    ) -> Self {
        Self {
            skill_name: skill_name.into(),
            description: description.into(),
            importance,
        }
    }
}

/// One step of a learning roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub name: String,
    pub description: String,
    pub resource_links: Vec<String>,
}

impl RoadmapStep {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        resource_links: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            resource_links,
        }
    }
}

/// Skills for a selected job with one roadmap per skill.
///
/// `roadmaps[i]` always belongs to `skills[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPlan {
    pub job: Job,
    pub skills: Vec<Skill>,
    pub roadmaps: Vec<Vec<RoadmapStep>>,
}

impl CareerPlan {
    pub fn new(job: Job, skills: Vec<Skill>, roadmaps: Vec<Vec<RoadmapStep>>) -> Self {
        debug_assert_eq!(skills.len(), roadmaps.len());
        Self {
            job,
            skills,
            roadmaps,
        }
    }

    /// Iterate skills together with their roadmap.
    pub fn entries(&self) -> impl Iterator<Item = (&Skill, &[RoadmapStep])> {
        self.skills
            .iter()
            .zip(self.roadmaps.iter().map(|r| r.as_slice()))
    }
}
