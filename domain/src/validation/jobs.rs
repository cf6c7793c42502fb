//! Validation of job extraction output.

use super::fields::{require_array, require_object, require_text};
use crate::career::{Job, is_aggregate_listing};
use crate::core::error::ShapeError;
use serde_json::Value;

/// Jobs decoded from model output, with the aggregate listings that were
/// dropped before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedJobs {
    pub jobs: Vec<Job>,
    pub skipped: Vec<String>,
}

/// Validate a JSON array of `{title, description}` objects.
///
/// Every item must be well-formed even if it is later skipped as an
/// aggregate listing; one malformed item fails the whole batch.
pub fn validate_jobs(value: &Value) -> Result<ExtractedJobs, ShapeError> {
    let items = require_array(value)?;

    let mut jobs = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let object = require_object(item, index)?;
        let title = require_text(object, index, "title")?;
        let description = require_text(object, index, "description")?;

        if is_aggregate_listing(&title) {
            skipped.push(title);
        } else {
            jobs.push(Job::new(title, description));
        }
    }

    Ok(ExtractedJobs { jobs, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_jobs() {
        let value = json!([
            {"title": "Software Engineer", "description": "Build APIs"},
            {"title": "Data Scientist", "description": "Model churn"}
        ]);
        let extracted = validate_jobs(&value).unwrap();
        assert_eq!(extracted.jobs.len(), 2);
        assert_eq!(extracted.jobs[0], Job::new("Software Engineer", "Build APIs"));
        assert!(extracted.skipped.is_empty());
    }

    #[test]
    fn test_aggregate_titles_are_skipped() {
        let value = json!([
            {"title": "100+ jobs in London", "description": "Browse all openings"},
            {"title": "Software Engineer", "description": "Build APIs"}
        ]);
        let extracted = validate_jobs(&value).unwrap();
        assert_eq!(extracted.jobs, vec![Job::new("Software Engineer", "Build APIs")]);
        assert_eq!(extracted.skipped, vec!["100+ jobs in London".to_string()]);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let extracted = validate_jobs(&json!([])).unwrap();
        assert!(extracted.jobs.is_empty());
    }

    #[test]
    fn test_object_instead_of_array() {
        let error = validate_jobs(&json!({"jobs": []})).unwrap_err();
        assert_eq!(error, ShapeError::NotAnArray { found: "an object" });
    }

    #[test]
    fn test_wrong_field_type() {
        let value = json!([{"title": ["Engineer"], "description": "x"}]);
        assert!(matches!(
            validate_jobs(&value),
            Err(ShapeError::WrongType { index: 0, field: "title", .. })
        ));
    }

    #[test]
    fn test_missing_description_fails_even_for_aggregate() {
        let value = json!([{"title": "100+ jobs in London"}]);
        assert_eq!(
            validate_jobs(&value).unwrap_err(),
            ShapeError::MissingField { index: 0, field: "description" }
        );
    }

    #[test]
    fn test_non_object_item() {
        let value = json!([{"title": "A", "description": "B"}, "Welder"]);
        assert_eq!(validate_jobs(&value).unwrap_err(), ShapeError::NotAnObject { index: 1 });
    }
}
