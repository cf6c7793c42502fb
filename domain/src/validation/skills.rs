//! Validation of skill extraction output.

use super::fields::{require_array, require_object, require_text};
use crate::career::{Importance, Skill};
use crate::core::error::ShapeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of skills requested in the refined variant
pub const REFINED_SKILL_COUNT: usize = 5;

/// How many skills an extraction must return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCountPolicy {
    /// Exactly this many skills (refined variant)
    Exactly(usize),
    /// Any non-zero number of skills (basic variant)
    Unbounded,
}

impl Default for SkillCountPolicy {
    fn default() -> Self {
        SkillCountPolicy::Exactly(REFINED_SKILL_COUNT)
    }
}

impl SkillCountPolicy {
    fn check(&self, actual: usize) -> Result<(), ShapeError> {
        match *self {
            SkillCountPolicy::Exactly(expected) if actual != expected => {
                Err(ShapeError::WrongLength {
                    expected: format!("exactly {}", expected),
                    actual,
                })
            }
            SkillCountPolicy::Unbounded if actual == 0 => Err(ShapeError::WrongLength {
                expected: "at least 1".to_string(),
                actual,
            }),
            _ => Ok(()),
        }
    }
}

/// Validate a JSON array of `{skillName, description, importance}` objects.
pub fn validate_skills(value: &Value, policy: SkillCountPolicy) -> Result<Vec<Skill>, ShapeError> {
    let items = require_array(value)?;
    policy.check(items.len())?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Skill, ShapeError> {
            let object = require_object(item, index)?;
            let skill_name = require_text(object, index, "skillName")?;
            let description = require_text(object, index, "description")?;
            let importance = object
                .get("importance")
                .ok_or(ShapeError::MissingField {
                    index,
                    field: "importance",
                })?
                .as_str()
                .ok_or(ShapeError::WrongType {
                    index,
                    field: "importance",
                    expected: "a string",
                })?
                .parse::<Importance>()
                .map_err(|e| ShapeError::UnknownImportance { index, value: e.0 })?;
            Ok(Skill::new(skill_name, description, importance))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn skills_json(importances: &[&str]) -> Value {
        Value::Array(
            importances
                .iter()
                .enumerate()
                .map(|(i, importance)| {
                    json!({
                        "skillName": format!("Skill {}", i + 1),
                        "description": "Useful",
                        "importance": importance
                    })
                })
                .collect(),
        )
    }

    #[test]
    fn test_exactly_five_skills() {
        let value = skills_json(&["High", "High", "Medium", "Low", "Medium"]);
        let skills = validate_skills(&value, SkillCountPolicy::default()).unwrap();
        assert_eq!(skills.len(), 5);
        assert_eq!(skills[3].importance, Importance::Low);
        assert_eq!(skills[0].skill_name, "Skill 1");
    }

    #[test]
    fn test_wrong_length_is_not_truncated_or_padded() {
        let six = skills_json(&["High"; 6]);
        assert_eq!(
            validate_skills(&six, SkillCountPolicy::default()).unwrap_err(),
            ShapeError::WrongLength {
                expected: "exactly 5".to_string(),
                actual: 6
            }
        );

        let four = skills_json(&["High"; 4]);
        assert!(matches!(
            validate_skills(&four, SkillCountPolicy::default()),
            Err(ShapeError::WrongLength { actual: 4, .. })
        ));
    }

    #[test]
    fn test_importance_outside_closed_set() {
        let value = skills_json(&["High", "High", "Critical", "Low", "Low"]);
        assert_eq!(
            validate_skills(&value, SkillCountPolicy::default()).unwrap_err(),
            ShapeError::UnknownImportance {
                index: 2,
                value: "Critical".to_string()
            }
        );

        let lowercase = skills_json(&["high", "High", "High", "Low", "Low"]);
        assert!(validate_skills(&lowercase, SkillCountPolicy::default()).is_err());
    }

    #[test]
    fn test_numeric_importance_is_wrong_type() {
        let value = json!([{"skillName": "SQL", "description": "Queries", "importance": 1}]);
        assert!(matches!(
            validate_skills(&value, SkillCountPolicy::Unbounded),
            Err(ShapeError::WrongType { field: "importance", .. })
        ));
    }

    #[test]
    fn test_unbounded_policy() {
        let value = skills_json(&["Low", "Medium"]);
        assert_eq!(validate_skills(&value, SkillCountPolicy::Unbounded).unwrap().len(), 2);
        assert!(validate_skills(&json!([]), SkillCountPolicy::Unbounded).is_err());
    }

    #[test]
    fn test_missing_skill_name() {
        let value = json!([{"name": "SQL", "description": "Queries", "importance": "High"}]);
        assert_eq!(
            validate_skills(&value, SkillCountPolicy::Unbounded).unwrap_err(),
            ShapeError::MissingField { index: 0, field: "skillName" }
        );
    }
}
