//! Errors raised while turning model output into domain entities.
//!
//! [`ParseError`] means the text could not be repaired into JSON at all.
//! [`ShapeError`] means it was valid JSON of the wrong shape.

use thiserror::Error;

/// Text repair or strict JSON parsing failed.
///
/// Carries the original raw text for diagnostics. The raw text is not part
/// of the `Display` output so it never leaks into user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse model output: {reason}")]
pub struct ParseError {
    reason: String,
    raw: String,
}

impl ParseError {
    pub fn new(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// Why repair or parsing failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The text exactly as the backend returned it.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Decoded JSON does not match the expected schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Item {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Item {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Item {index} field '{field}' must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("Item {index} field '{field}' is empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("Expected {expected} items, got {actual}")]
    WrongLength { expected: String, actual: usize },

    #[error("Item {index} has importance '{value}', expected High, Medium or Low")]
    UnknownImportance { index: usize, value: String },

    #[error("Item {index} description has {words} words (max {max})")]
    DescriptionTooLong {
        index: usize,
        words: usize,
        max: usize,
    },
}

/// Human-readable name of a JSON value's type, for [`ShapeError::NotAnArray`].
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
