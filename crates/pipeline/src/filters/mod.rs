//! Filter implementations for the refinement pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod dietary;
pub mod distance;

// Re-export for convenience
pub use dietary::DietaryTagFilter;
pub use distance::DistanceFilter;
