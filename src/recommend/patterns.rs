//! Fallback pattern catalog.
//!
//! A side file of `{class, structure}` pairs consulted only when a cluster
//! pool yields no candidates. Loaded once at startup and injected into the
//! recommender; never re-read per invocation.

use super::scoring::numeric_value;
use crate::core::{Error, PatternEntry, Recommendation, Result, Structure};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Group key attached to fallback recommendations.
pub const PATTERN_GROUP_KEY: &str = "patterns";

/// Load the pattern catalog from a JSON array of `{class, structure}`
/// records. An unreadable or unparsable file is fatal to startup; individual
/// malformed entries degrade to empty defaults.
pub fn load_pattern_catalog(path: &Path) -> Result<Vec<PatternEntry>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::catalog(format!("failed to read catalog: {e}"), path))?;
    let root: Value = serde_json::from_str(&raw)
        .map_err(|e| Error::catalog(format!("catalog is not valid JSON: {e}"), path))?;

    let entries = match root.as_array() {
        Some(items) => items.iter().map(pattern_from_value).collect(),
        None => {
            return Err(Error::catalog(
                "catalog root must be a JSON array",
                path,
            ))
        }
    };

    Ok(entries)
}

fn pattern_from_value(value: &Value) -> PatternEntry {
    PatternEntry {
        class: value
            .get("class")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        structure: value
            .get("structure")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Overlap between a fragment structure and a pattern structure: the count of
/// keys present in both sides with equal numeric values, divided by the
/// fragment's key count. 0 when the fragment has no keys.
pub fn pattern_overlap(fragment_structure: &Structure, pattern_structure: &Structure) -> f64 {
    if fragment_structure.is_empty() {
        return 0.0;
    }

    let matching = fragment_structure
        .iter()
        .filter(|(key, descriptor)| {
            pattern_structure
                .get(*key)
                .map(|other| numeric_value(other) == numeric_value(descriptor))
                .unwrap_or(false)
        })
        .count();

    matching as f64 / fragment_structure.len() as f64
}

/// Pick the single best pattern match for a fragment, or nothing when the
/// catalog is empty. Ties keep the first maximum encountered.
pub fn best_pattern_match(
    fragment_structure: &Structure,
    patterns: &[PatternEntry],
) -> Option<Recommendation> {
    let mut best: Option<(f64, &PatternEntry)> = None;

    for entry in patterns {
        let score = pattern_overlap(fragment_structure, &entry.structure);
        let replace = match best {
            Some((best_score, _)) => score > best_score,
            None => true,
        };
        if replace {
            best = Some((score, entry));
        }
    }

    best.map(|(score, entry)| Recommendation {
        class: entry.class.clone(),
        structure: entry.structure.clone(),
        structure_score: score,
        group_key: PATTERN_GROUP_KEY.to_string(),
    })
}
