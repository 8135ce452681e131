//! Projection of entities down to their comparable level-encoded attributes.

use crate::core::Structure;
use serde_json::Value;

/// Key prefix marking a level-encoded attribute.
pub const LEVEL_PREFIX: &str = "Level_";

/// Project an attribute mapping down to its level-encoded entries.
///
/// Returns the sub-mapping of entries whose key begins with `Level_`, values
/// preserved unchanged. Pure; empty input yields empty output.
pub fn level_structure(attributes: &Structure) -> Structure {
    attributes
        .iter()
        .filter(|(key, _)| key.starts_with(LEVEL_PREFIX))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Project an arbitrary JSON value. Non-objects yield the empty structure.
pub fn level_structure_of(value: &Value) -> Structure {
    value.as_object().map(level_structure).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structure_of(value: Value) -> Structure {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_level_structure_keeps_only_prefixed_keys() {
        let attributes = structure_of(json!({
            "Level_1": {"value": 1},
            "name": "beam",
            "Level_2": {"value": 2},
            "level_3": {"value": 3}
        }));

        let projected = level_structure(&attributes);

        assert_eq!(projected.len(), 2);
        assert_eq!(projected["Level_1"], json!({"value": 1}));
        assert_eq!(projected["Level_2"], json!({"value": 2}));
    }

    #[test]
    fn test_level_structure_preserves_values_unchanged() {
        let attributes = structure_of(json!({
            "Level_1": {"value": 1, "unit": "mm"}
        }));

        let projected = level_structure(&attributes);

        assert_eq!(projected["Level_1"], json!({"value": 1, "unit": "mm"}));
    }

    #[test]
    fn test_level_structure_empty_input() {
        assert!(level_structure(&Structure::new()).is_empty());
    }

    #[test]
    fn test_level_structure_of_non_object() {
        assert!(level_structure_of(&json!([1, 2, 3])).is_empty());
        assert!(level_structure_of(&json!(null)).is_empty());
        assert!(level_structure_of(&json!("Level_1")).is_empty());
    }

    #[test]
    fn test_level_structure_preserves_insertion_order() {
        let attributes = structure_of(json!({
            "Level_9": {"value": 9},
            "Level_1": {"value": 1}
        }));

        let projected = level_structure(&attributes);
        let keys: Vec<&String> = projected.keys().collect();
        assert_eq!(keys, vec!["Level_9", "Level_1"]);
    }
}
