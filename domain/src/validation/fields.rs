//! Shared field accessors for validation.

use crate::core::error::{ShapeError, json_type_name};
use crate::core::text::is_blank;
use serde_json::{Map, Value};

/// Require `value` to be an array.
pub(super) fn require_array(value: &Value) -> Result<&Vec<Value>, ShapeError> {
    value.as_array().ok_or(ShapeError::NotAnArray {
        found: json_type_name(value),
    })
}

/// Require item `index` to be an object.
pub(super) fn require_object(value: &Value, index: usize) -> Result<&Map<String, Value>, ShapeError> {
    value.as_object().ok_or(ShapeError::NotAnObject { index })
}

/// Require a non-blank string field, returned trimmed.
pub(super) fn require_text(
    object: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ShapeError> {
    let value = object
        .get(field)
        .ok_or(ShapeError::MissingField { index, field })?;
    let text = value.as_str().ok_or(ShapeError::WrongType {
        index,
        field,
        expected: "a string",
    })?;
    if is_blank(text) {
        return Err(ShapeError::EmptyField { index, field });
    }
    Ok(text.trim().to_string())
}

/// Optional array-of-strings field. Absent or `null` yields an empty vector.
pub(super) fn optional_string_list(
    object: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Vec<String>, ShapeError> {
    let wrong_type = ShapeError::WrongType {
        index,
        field,
        expected: "an array of strings",
    };
    match object.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or(wrong_type.clone()))
            .collect(),
        Some(_) => Err(wrong_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_text_trims() {
        let value = json!({"title": "  Welder  "});
        let object = value.as_object().unwrap();
        assert_eq!(require_text(object, 0, "title").unwrap(), "Welder");
    }

    #[test]
    fn test_require_text_errors() {
        let value = json!({"title": 3, "description": " "});
        let object = value.as_object().unwrap();
        assert!(matches!(
            require_text(object, 1, "title"),
            Err(ShapeError::WrongType { index: 1, field: "title", .. })
        ));
        assert_eq!(
            require_text(object, 1, "description"),
            Err(ShapeError::EmptyField { index: 1, field: "description" })
        );
        assert_eq!(
            require_text(object, 1, "missing"),
            Err(ShapeError::MissingField { index: 1, field: "missing" })
        );
    }

    #[test]
    fn test_optional_string_list() {
        let value = json!({"links": ["a", "b"], "bad": [1], "none": null});
        let object = value.as_object().unwrap();
        assert_eq!(optional_string_list(object, 0, "links").unwrap(), vec!["a", "b"]);
        assert!(optional_string_list(object, 0, "none").unwrap().is_empty());
        assert!(optional_string_list(object, 0, "absent").unwrap().is_empty());
        assert!(optional_string_list(object, 0, "bad").is_err());
    }
}
