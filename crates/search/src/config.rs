//! Settings shared by every search in a session.

use std::num::NonZeroUsize;

use data_loader::Coordinate;
use pipeline::DEFAULT_DISPLAY_LIMIT;
use rec_client::{RecClientConfig, MAX_TOP_K};
use thiserror::Error;

/// Candidates requested from the service per search.
///
/// Higher than the display limit so local filtering has headroom.
pub const DEFAULT_TOP_K: u32 = 20;

/// Radius used when the user has not picked one.
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 1.0;

/// Errors from an inconsistent [`SearchConfig`]
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Reference coordinate ({lat}, {lng}) is out of range")]
    InvalidReference { lat: f64, lng: f64 },

    #[error("top_k must be between 1 and {max}, got {top_k}")]
    TopKOutOfRange { top_k: u32, max: u32 },
}

/// Session-wide search settings.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How to reach the recommendation service
    pub service: RecClientConfig,
    /// Fixed anchor all distances are measured from
    pub reference: Coordinate,
    /// Candidates requested from the service
    pub top_k: u32,
    /// Candidates shown after refinement
    pub display_limit: NonZeroUsize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            service: RecClientConfig::default(),
            reference: Coordinate::UCI_CAMPUS,
            top_k: DEFAULT_TOP_K,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Check the settings before any request is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference.is_valid() {
            return Err(ConfigError::InvalidReference {
                lat: self.reference.lat,
                lng: self.reference.lng,
            });
        }
        if self.top_k == 0 || self.top_k > MAX_TOP_K {
            return Err(ConfigError::TopKOutOfRange {
                top_k: self.top_k,
                max: MAX_TOP_K,
            });
        }
        if (self.top_k as usize) < self.display_limit.get() {
            tracing::warn!(
                "top_k ({}) is below the display limit ({}); results will be short",
                self.top_k,
                self.display_limit
            );
        }
        Ok(())
    }
}
