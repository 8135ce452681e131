//! Structure-similarity scoring.
//!
//! The score is a symmetric Jaccard index over level-key sets: it measures
//! whether two entities reference the same set of level attributes, not
//! whether the attribute values agree. Value equality is intentionally
//! ignored here; only the fallback pattern matcher compares values.

use crate::core::Structure;
use serde_json::Value;
use std::collections::HashSet;

/// Numeric value of a level descriptor, defaulting to 0 when the `value`
/// field is absent or not a number. Malformed descriptors thus count as
/// present keys with value 0 rather than failing.
pub fn numeric_value(descriptor: &Value) -> f64 {
    descriptor
        .get("value")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Similarity in [0, 1] between two projected structures.
///
/// `|keys(fragment) ∩ keys(class)| / |keys(fragment) ∪ keys(class)|`, defined
/// as 0 when the union is empty. Symmetric in its arguments.
pub fn structure_score(fragment_structure: &Structure, class_structure: &Structure) -> f64 {
    let fragment_keys: HashSet<&str> = fragment_structure.keys().map(String::as_str).collect();
    let class_keys: HashSet<&str> = class_structure.keys().map(String::as_str).collect();

    let union = fragment_keys.union(&class_keys).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = fragment_keys.intersection(&class_keys).count();
    intersection as f64 / union as f64
}
