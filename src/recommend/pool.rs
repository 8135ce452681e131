//! Candidate pool selection by element type.

use crate::core::{ClusterCatalog, ClusterEntry};

/// Prefix of every cluster catalog key.
pub const CLUSTER_KEY_PREFIX: &str = "cluster_";

/// Element type substituted when a fragment carries none. The resulting
/// degenerate key (`cluster_none`) simply misses the catalog.
const MISSING_ELEMENT_TYPE: &str = "none";

/// Derive the catalog lookup key for an element type.
///
/// Case-insensitive on the type name, exact-match on the rest of the key.
pub fn cluster_key(element_type: Option<&str>) -> String {
    let tag = element_type.unwrap_or(MISSING_ELEMENT_TYPE).to_lowercase();
    format!("{CLUSTER_KEY_PREFIX}{tag}")
}

/// Resolve the candidate pool for an element type, if the catalog has one.
pub fn candidate_pool<'a>(
    catalog: &'a ClusterCatalog,
    element_type: Option<&str>,
) -> (String, Option<&'a ClusterEntry>) {
    let key = cluster_key(element_type);
    let pool = catalog.pool(&key);
    (key, pool)
}
