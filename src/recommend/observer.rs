//! Observation hooks for the recommendation run.
//!
//! Diagnostics are decoupled from the scoring algorithm: the recommender
//! notifies an injected observer at defined extension points (post-score,
//! post-fallback) instead of logging inline.

use crate::core::Fragment;

/// Extension points invoked by the recommender. All hooks default to no-ops.
pub trait RecommendObserver {
    /// Called after a candidate class has been scored against a fragment.
    fn candidate_scored(&self, _fragment: &Fragment, _class: &str, _score: f64) {}

    /// Called after the fallback pattern catalog supplied a recommendation.
    fn fallback_applied(&self, _fragment: &Fragment, _class: &str, _score: f64) {}
}

/// Silent observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RecommendObserver for NoopObserver {}

/// Observer routing diagnostics through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RecommendObserver for LogObserver {
    fn candidate_scored(&self, fragment: &Fragment, class: &str, score: f64) {
        log::debug!(
            "scored class {} against fragment {:?}: {:.3}",
            class,
            fragment.fragment_id,
            score
        );
    }

    fn fallback_applied(&self, fragment: &Fragment, class: &str, score: f64) {
        log::info!(
            "fallback pattern {} applied to fragment {:?} (overlap {:.3})",
            class,
            fragment.fragment_id,
            score
        );
    }
}
