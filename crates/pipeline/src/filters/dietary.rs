//! Filter to enforce soft dietary signals as hard tag requirements.
//!
//! The service only ranks on these signals, so a vegan search can still
//! return restaurants without a vegan tag. This filter removes them.

use crate::traits::Filter;
use data_loader::{Candidate, RefinementRequest, SoftSignals};

/// Tag required when the vegan signal is set.
pub const VEGAN_TAG: &str = "vegan";

/// Tag required when the vegetarian signal is set.
pub const VEGETARIAN_TAG: &str = "vegetarian";

/// Canonical gluten-free tag. The space spelling is only a query token.
pub const GLUTEN_FREE_TAG: &str = "gluten_free";

/// Tags a candidate must carry for the given signals.
pub fn required_tags(signals: &SoftSignals) -> Vec<&'static str> {
    [
        (signals.vegan, VEGAN_TAG),
        (signals.vegetarian, VEGETARIAN_TAG),
        (signals.gluten_free, GLUTEN_FREE_TAG),
    ]
    .into_iter()
    .filter_map(|(set, tag)| set.then_some(tag))
    .collect()
}

/// Keeps only candidates carrying every tag the active soft signals require.
///
/// ## Algorithm
/// 1. Collect the required tag for each active signal
/// 2. Keep a candidate only if it has all of them
///
/// Each signal is checked against its own tag. Halal is not checked here;
/// the service already enforces it.
pub struct DietaryTagFilter;

impl Filter for DietaryTagFilter {
    fn name(&self) -> &str {
        "DietaryTagFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, request: &RefinementRequest) -> Vec<Candidate> {
        let signals = &request.preferences.soft;
        if !signals.any() {
            return candidates;
        }
        let required = required_tags(signals);

        candidates
            .into_iter()
            .filter(|candidate| required.iter().all(|tag| candidate.has_tag(tag)))
            .collect()
    }
}
