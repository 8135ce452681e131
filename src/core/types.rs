//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An open-ended attribute mapping, in JSON insertion order.
///
/// Level-encoded entries map a `Level_*` key to a descriptor object of the
/// form `{"value": scalar}`; other entries are carried but ignored by the
/// matching engine.
pub type Structure = serde_json::Map<String, Value>;

/// An unclassified structural element awaiting class assignment.
///
/// Fragments are immutable input: constructed once from the upload JSON and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    /// Opaque identifier, preserved verbatim from the input.
    pub fragment_id: Option<Value>,
    /// Element type tag used for candidate pool selection.
    pub element_type: Option<String>,
    /// Remaining attributes, including the `Level_*` descriptors.
    pub attributes: Structure,
}

impl Fragment {
    pub fn new(
        fragment_id: Option<Value>,
        element_type: Option<String>,
        attributes: Structure,
    ) -> Self {
        Self {
            fragment_id,
            element_type,
            attributes,
        }
    }
}

/// The candidate pool for one cluster key.
///
/// Maps class name to the class's raw structure object. Names are unique
/// within a pool; iteration follows the JSON insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterEntry {
    pub classes: Structure,
}

impl ClusterEntry {
    pub fn new(classes: Structure) -> Self {
        Self { classes }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

/// Read-only catalog of candidate pools, keyed by
/// `cluster_<element_type_lowercase>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterCatalog {
    clusters: HashMap<String, ClusterEntry>,
}

impl ClusterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: ClusterEntry) {
        self.clusters.insert(key.into(), entry);
    }

    /// Resolve the candidate pool for a cluster key, if one exists.
    pub fn pool(&self, key: &str) -> Option<&ClusterEntry> {
        self.clusters.get(key)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of candidate classes across all pools.
    pub fn candidate_count(&self) -> usize {
        self.clusters.values().map(ClusterEntry::len).sum()
    }
}

/// A fallback `{class, structure}` pair from the pattern catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub structure: Structure,
}

/// One scored candidate match for a fragment. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub class: String,
    pub structure: Structure,
    pub structure_score: f64,
    pub group_key: String,
}

/// The ranked recommendation list for one fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentRecommendationResult {
    pub fragment_id: Option<Value>,
    pub element_type: Option<String>,
    pub fragment_structure: Structure,
    pub recommendations: Vec<Recommendation>,
}
