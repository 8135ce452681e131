//! Structure-similarity matching and recommendation engine.
//!
//! For each fragment the recommender resolves a candidate pool by element
//! type, scores every candidate's projected structure against the fragment's,
//! deduplicates by class name, sorts by descending score, and falls back to a
//! global pattern catalog when the pool yields nothing.
//!
//! Similarity is symmetric Jaccard over level-key sets, dedup is per
//! fragment via an explicit seen-set, and results are grouped per fragment,
//! one entry per input fragment in input order.

mod observer;
mod patterns;
mod pool;
mod scoring;
mod structure;

pub use observer::{LogObserver, NoopObserver, RecommendObserver};
pub use patterns::{
    best_pattern_match, load_pattern_catalog, pattern_overlap, PATTERN_GROUP_KEY,
};
pub use pool::{candidate_pool, cluster_key, CLUSTER_KEY_PREFIX};
pub use scoring::{numeric_value, structure_score};
pub use structure::{level_structure, level_structure_of, LEVEL_PREFIX};

use crate::core::{
    ClusterCatalog, ClusterEntry, Fragment, FragmentRecommendationResult, PatternEntry,
    Recommendation, Structure,
};
use std::collections::HashSet;

/// Recommendation orchestrator.
///
/// Holds the immutable fallback pattern catalog; all other state is scoped to
/// a single `recommend` call.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    patterns: Vec<PatternEntry>,
}

impl Recommender {
    /// Recommender without a fallback catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommender with a pre-loaded fallback pattern catalog.
    pub fn with_patterns(patterns: Vec<PatternEntry>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }

    /// Produce one ranked recommendation list per fragment, in input order.
    pub fn recommend(
        &self,
        fragments: &[Fragment],
        catalog: &ClusterCatalog,
        observer: &dyn RecommendObserver,
    ) -> Vec<FragmentRecommendationResult> {
        fragments
            .iter()
            .map(|fragment| self.recommend_fragment(fragment, catalog, observer))
            .collect()
    }

    fn recommend_fragment(
        &self,
        fragment: &Fragment,
        catalog: &ClusterCatalog,
        observer: &dyn RecommendObserver,
    ) -> FragmentRecommendationResult {
        let fragment_structure = level_structure(&fragment.attributes);
        let (group_key, pool) = candidate_pool(catalog, fragment.element_type.as_deref());

        // Dedup is per fragment: a fresh seen-set each time, passed
        // explicitly rather than threaded through the whole run.
        let mut seen_classes = HashSet::new();
        let mut recommendations = match pool {
            Some(entry) => score_pool(
                fragment,
                &fragment_structure,
                entry,
                &group_key,
                &mut seen_classes,
                observer,
            ),
            None => Vec::new(),
        };

        if recommendations.is_empty() {
            if let Some(fallback) = best_pattern_match(&fragment_structure, &self.patterns) {
                observer.fallback_applied(fragment, &fallback.class, fallback.structure_score);
                recommendations.push(fallback);
            }
        }

        // Stable: ties keep first-encountered order.
        recommendations.sort_by(|a, b| b.structure_score.total_cmp(&a.structure_score));

        FragmentRecommendationResult {
            fragment_id: fragment.fragment_id.clone(),
            element_type: fragment.element_type.clone(),
            fragment_structure,
            recommendations,
        }
    }
}

/// Score every candidate in a pool against a fragment, skipping class names
/// already emitted for this fragment.
fn score_pool(
    fragment: &Fragment,
    fragment_structure: &Structure,
    pool: &ClusterEntry,
    group_key: &str,
    seen_classes: &mut HashSet<String>,
    observer: &dyn RecommendObserver,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(pool.len());

    for (class_name, raw_structure) in &pool.classes {
        if !seen_classes.insert(class_name.clone()) {
            continue;
        }

        let class_structure = level_structure_of(raw_structure);
        let score = structure_score(fragment_structure, &class_structure);
        observer.candidate_scored(fragment, class_name, score);

        recommendations.push(Recommendation {
            class: class_name.clone(),
            structure: class_structure,
            structure_score: score,
            group_key: group_key.to_string(),
        });
    }

    recommendations
}
