//! JSON bodies exchanged with the recommendation service.
//!
//! Request:
//! ```json
//! {"halal": true, "top_k": 20, "query": "boba vegan"}
//! ```
//! `query` is omitted entirely when there is no text signal.
//!
//! Response: a JSON array, highest relevance first. Fields the client does
//! not use (`score_components`, `menu_text`, `phone`, ...) are ignored.

use data_loader::{Candidate, Coordinate, HardFilters};
use serde::{Deserialize, Serialize};

use crate::RecClientError;

/// Smallest `top_k` the service accepts.
pub const MIN_TOP_K: u32 = 1;

/// Largest `top_k` the service accepts.
pub const MAX_TOP_K: u32 = 50;

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Enforced server-side as a true filter
    pub halal: bool,
    /// Number of ranked candidates to return
    pub top_k: u32,
    /// Free text plus soft dietary tokens; `None` means no text bias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl RecommendRequest {
    /// Build a request, clamping `top_k` into the range the service accepts.
    pub fn new(hard: HardFilters, top_k: u32, query: Option<String>) -> Self {
        Self {
            halal: hard.halal,
            top_k: top_k.clamp(MIN_TOP_K, MAX_TOP_K),
            query,
        }
    }
}

/// One element of the `POST /recommend` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    /// The service passes through whatever the catalog has, including null
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub why: Vec<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hours_text: Option<String>,
}

impl TryFrom<RecommendationItem> for Candidate {
    type Error = RecClientError;

    /// Fails on a coordinate outside the valid lat/lng range.
    fn try_from(item: RecommendationItem) -> Result<Self, Self::Error> {
        // A half-geocoded entry is treated as not geocoded at all
        let coordinate = match (item.lat, item.lng) {
            (Some(lat), Some(lng)) => {
                let coordinate = Coordinate::new(lat, lng);
                if !coordinate.is_valid() {
                    return Err(RecClientError::InvalidResponse(format!(
                        "restaurant '{}' has out-of-range coordinate ({lat}, {lng})",
                        item.id
                    )));
                }
                Some(coordinate)
            }
            _ => None,
        };

        Ok(Candidate {
            id: item.id,
            name: item.name.unwrap_or_default(),
            dietary_tags: item.dietary_tags,
            rating: item.rating,
            review_count: item.review_count,
            relevance: item.score,
            coordinate,
            why: item.why,
            price_level: item.price_level,
            address: item.address,
            hours_text: item.hours_text,
        })
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    /// Restaurants currently loaded by the service
    #[serde(default)]
    pub count: u64,
}

/// Body of `POST /refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshStatus {
    pub ok: bool,
    #[serde(default)]
    pub count: u64,
    /// Path the service reloaded its catalog from
    #[serde(default)]
    pub reloaded_from: Option<String>,
}
