//! Uniform result envelope returned by every agent operation.

use serde::{Deserialize, Serialize};

/// Outcome of a single agent operation.
///
/// `success == true` implies `data` is present and `error` absent;
/// `success == false` implies the reverse. Fields are private so the only
/// way to build one is through [`AgentResult::success`] and
/// [`AgentResult::failure`], which keeps that invariant intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> AgentResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Collapse the envelope into a `Result`.
    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) if self.success => Ok(data),
            (_, Some(error)) => Err(error),
            // Only reachable through deserialization of an inconsistent envelope
            _ => Err("Agent returned an inconsistent result".to_string()),
        }
    }

    /// Transform the payload of a successful result.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AgentResult<U> {
        match self.into_result() {
            Ok(data) => AgentResult::success(f(data)),
            Err(error) => AgentResult::failure(error),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for AgentResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => AgentResult::success(data),
            Err(e) => AgentResult::failure(e.to_string()),
        }
    }
}
