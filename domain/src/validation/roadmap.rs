//! Validation of roadmap generation output.

use super::fields::{optional_string_list, require_array, require_object, require_text};
use crate::core::error::ShapeError;
use crate::core::text::word_count;
use serde_json::Value;

/// Maximum number of steps in a roadmap
pub const MAX_ROADMAP_STEPS: usize = 4;

/// Maximum words in a step description (fixed-page rendering constraint)
pub const MAX_DESCRIPTION_WORDS: usize = 200;

/// A validated step before its resource links are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutline {
    pub name: String,
    pub description: String,
}

/// Validate a JSON array of `{name, description, resourceLinks}` objects.
///
/// `resourceLinks` must be an array of strings when present. Its contents
/// are not returned: links are rebuilt from the step and skill names.
pub fn validate_roadmap(value: &Value) -> Result<Vec<StepOutline>, ShapeError> {
    let items = require_array(value)?;
    if items.is_empty() || items.len() > MAX_ROADMAP_STEPS {
        return Err(ShapeError::WrongLength {
            expected: format!("1 to {}", MAX_ROADMAP_STEPS),
            actual: items.len(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<StepOutline, ShapeError> {
            let object = require_object(item, index)?;
            let name = require_text(object, index, "name")?;
            let description = require_text(object, index, "description")?;
            optional_string_list(object, index, "resourceLinks")?;

            let words = word_count(&description);
            if words > MAX_DESCRIPTION_WORDS {
                return Err(ShapeError::DescriptionTooLong {
                    index,
                    words,
                    max: MAX_DESCRIPTION_WORDS,
                });
            }
            Ok(StepOutline { name, description })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_roadmap() {
        let value = json!([
            {"name": "Introduction to Python", "description": "Syntax and types", "resourceLinks": ["https://x"]},
            {"name": "Data Structures", "description": "Lists and dicts"}
        ]);
        let steps = validate_roadmap(&value).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "Introduction to Python");
        assert_eq!(steps[1].description, "Lists and dicts");
    }

    #[test]
    fn test_more_than_four_steps_fails() {
        let step = json!({"name": "Step", "description": "Do it"});
        let value = Value::Array(vec![step; 5]);
        assert_eq!(
            validate_roadmap(&value).unwrap_err(),
            ShapeError::WrongLength {
                expected: "1 to 4".to_string(),
                actual: 5
            }
        );
    }

    #[test]
    fn test_empty_roadmap_fails() {
        assert!(validate_roadmap(&json!([])).is_err());
    }

    #[test]
    fn test_description_word_limit() {
        let long = vec!["word"; MAX_DESCRIPTION_WORDS + 1].join(" ");
        let value = json!([{"name": "Basics", "description": long}]);
        assert_eq!(
            validate_roadmap(&value).unwrap_err(),
            ShapeError::DescriptionTooLong {
                index: 0,
                words: 201,
                max: 200
            }
        );

        let at_limit = vec!["word"; MAX_DESCRIPTION_WORDS].join(" ");
        assert!(validate_roadmap(&json!([{"name": "Basics", "description": at_limit}])).is_ok());
    }

    #[test]
    fn test_resource_links_must_be_strings() {
        let value = json!([{"name": "Basics", "description": "d", "resourceLinks": "https://x"}]);
        assert!(matches!(
            validate_roadmap(&value),
            Err(ShapeError::WrongType { field: "resourceLinks", .. })
        ));
    }

    #[test]
    fn test_missing_name() {
        let value = json!([{"title": "Basics", "description": "d"}]);
        assert_eq!(
            validate_roadmap(&value).unwrap_err(),
            ShapeError::MissingField { index: 0, field: "name" }
        );
    }
}
