//! Result refinement pipeline for restaurant recommendations.
//!
//! This crate provides:
//! - `distance_miles` for great-circle distance
//! - `build_query` for folding soft dietary signals into the query text
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - ResultRefiner for turning a ranked service response into the display list
//!
//! ## Architecture
//! Everything here is pure and synchronous. A search flows as:
//! 1. `build_query` produces the outgoing query text
//! 2. The recommendation service returns a ranked candidate list
//! 3. `ResultRefiner` drops out-of-range and tag-mismatched candidates
//! 4. The survivors are truncated to the display limit, order untouched
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{build_query, ResultRefiner, DEFAULT_DISPLAY_LIMIT};
//!
//! let query = build_query("boba", &prefs.soft);
//! let candidates = client.recommend(&request).await?;
//! let shown = ResultRefiner::new().refine(candidates, refinement, DEFAULT_DISPLAY_LIMIT);
//! ```

pub mod distance;
pub mod query;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod refiner;

// Re-export main types
pub use distance::{distance_miles, EARTH_RADIUS_MILES};
pub use query::build_query;
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use refiner::{refine, ResultRefiner, DEFAULT_DISPLAY_LIMIT};
