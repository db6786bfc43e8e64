//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while reading a restaurant catalog file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents were not valid JSON
    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON was well-formed but not a list of restaurants
    #[error("Top-level must be a list OR an object with 'restaurants' list. Got {found}")]
    UnexpectedShape { found: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
