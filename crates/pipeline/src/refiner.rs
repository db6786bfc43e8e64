//! The ResultRefiner turns a ranked service response into the display list.
//!
//! Refinement runs three steps, strictly in order:
//! 1. Distance filter (missing coordinates pass)
//! 2. Dietary tag filter (vegan, vegetarian, gluten_free)
//! 3. Truncation to the display limit
//!
//! None of the steps reorder, so the result is always a subsequence of the
//! service's ranking. The refiner is pure: same input, same output.

use std::num::NonZeroUsize;

use data_loader::{Candidate, RefinementRequest};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{DietaryTagFilter, DistanceFilter};

/// Default number of restaurants shown to the user.
pub const DEFAULT_DISPLAY_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Applies the local filters and the display limit to a ranked response.
pub struct ResultRefiner {
    pipeline: FilterPipeline,
}

impl ResultRefiner {
    /// Create a refiner with the standard distance-then-dietary filter chain.
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::new()
                .add_filter(DistanceFilter)
                .add_filter(DietaryTagFilter),
        }
    }

    /// Refine a ranked candidate list for display.
    ///
    /// # Arguments
    /// * `candidates` - Service response, highest relevance first (not re-checked)
    /// * `request` - Preference snapshot taken when the search started
    /// * `display_limit` - Maximum number of candidates to return
    ///
    /// # Returns
    /// The first `display_limit` surviving candidates in their original
    /// relative order. An empty input yields an empty output.
    pub fn refine(
        &self,
        candidates: Vec<Candidate>,
        request: RefinementRequest,
        display_limit: NonZeroUsize,
    ) -> Vec<Candidate> {
        let received = candidates.len();

        let mut refined = self.pipeline.apply(candidates, &request);
        let surviving = refined.len();
        refined.truncate(display_limit.get());

        tracing::debug!(
            "Refined {} candidates through {:?}: {} passed filters, {} kept for display",
            received,
            self.pipeline.filter_names(),
            surviving,
            refined.len()
        );
        refined
    }
}

impl Default for ResultRefiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Refine with the standard filter chain.
///
/// Convenience for callers that do not hold a [`ResultRefiner`].
pub fn refine(
    candidates: Vec<Candidate>,
    request: RefinementRequest,
    display_limit: NonZeroUsize,
) -> Vec<Candidate> {
    ResultRefiner::new().refine(candidates, request, display_limit)
}
