//! Core traits for the refinement pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a ranked candidate list.

use data_loader::{Candidate, RefinementRequest};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Contract
/// - A filter only removes candidates; it never reorders or inserts them,
///   so its output is always a subsequence of its input
/// - Filtering cannot fail: bad input is a caller bug, not a runtime error
/// - `Send + Sync` allows filters to be shared across async tasks
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter, in service ranking order (takes ownership)
    /// * `request` - The preference snapshot for this search
    fn apply(&self, candidates: Vec<Candidate>, request: &RefinementRequest) -> Vec<Candidate>;
}
