//! Lenient parsing of the upload JSON.
//!
//! The top-level blob must be valid JSON; everything below that degrades
//! gracefully. Missing or mistyped `noise`/`clusters` sections, fragments,
//! cluster entries, and class structures all collapse to empty defaults so
//! one malformed record never aborts the batch.

use crate::core::{ClusterCatalog, ClusterEntry, Fragment, Result, Structure};
use serde_json::Value;

/// The two data structures the matching engine consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadData {
    pub noise: Vec<Fragment>,
    pub clusters: ClusterCatalog,
}

/// Parse an upload blob. Fails only when the blob is not JSON at all.
pub fn parse_upload(raw: &str) -> Result<UploadData> {
    let root: Value = serde_json::from_str(raw)?;
    Ok(upload_from_value(&root))
}

/// Build the upload model from an already-parsed JSON value.
pub fn upload_from_value(root: &Value) -> UploadData {
    let noise = root
        .get("noise")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(fragment_from_value).collect())
        .unwrap_or_default();

    let clusters = root
        .get("clusters")
        .and_then(Value::as_object)
        .map(catalog_from_object)
        .unwrap_or_default();

    UploadData { noise, clusters }
}

fn fragment_from_value(value: &Value) -> Fragment {
    let object = match value.as_object() {
        Some(object) => object,
        None => return Fragment::new(None, None, Structure::new()),
    };

    let fragment_id = object.get("fragment_id").cloned();
    let element_type = object
        .get("element_type")
        .and_then(Value::as_str)
        .map(str::to_string);
    let attributes = object
        .iter()
        .filter(|(key, _)| key.as_str() != "fragment_id" && key.as_str() != "element_type")
        .map(|(key, v)| (key.clone(), v.clone()))
        .collect();

    Fragment::new(fragment_id, element_type, attributes)
}

fn catalog_from_object(clusters: &Structure) -> ClusterCatalog {
    let mut catalog = ClusterCatalog::new();
    for (key, value) in clusters {
        let classes = value
            .get("classes")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        catalog.insert(key.clone(), ClusterEntry::new(classes));
    }
    catalog
}
