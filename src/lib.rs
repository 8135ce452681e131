// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod recommend;

// Re-export commonly used types
pub use crate::core::{
    ClusterCatalog, ClusterEntry, Error, Fragment, FragmentRecommendationResult, PatternEntry,
    Recommendation, Structure,
};

pub use crate::recommend::{
    best_pattern_match, cluster_key, level_structure, load_pattern_catalog, structure_score,
    LogObserver, NoopObserver, RecommendObserver, Recommender,
};

pub use crate::io::{
    input::{parse_upload, upload_from_value, UploadData},
    output::{create_writer, OutputFormat, OutputWriter},
};
