//! # Data Loader Crate
//!
//! Domain types shared by every crate in the workspace, plus loading and
//! validation of restaurant catalog files.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Coordinate, DietaryPreferences, Candidate, RefinementRequest)
//! - **parser**: Read a catalog JSON file into raw records
//! - **validate**: Schema checks over catalog records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_catalog, validate_catalog};
//! use std::path::Path;
//!
//! let records = load_catalog(Path::new("data/restaurants.json"))?;
//! for issue in validate_catalog(&records) {
//!     eprintln!("ERROR: {issue}");
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{load_catalog, parse_catalog};
pub use types::{
    // Type aliases
    RestaurantId,
    // Core types
    Candidate,
    Coordinate,
    DietaryPreferences,
    HardFilters,
    RefinementRequest,
    SoftSignals,
};
pub use validate::{validate_catalog, ValidationIssue};
