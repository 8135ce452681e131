//! Core data model shared by the matching engine and the I/O layer.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    ClusterCatalog, ClusterEntry, Fragment, FragmentRecommendationResult, PatternEntry,
    Recommendation, Structure,
};
