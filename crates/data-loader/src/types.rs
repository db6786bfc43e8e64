//! Core domain types for restaurant search.
//!
//! This module defines the values that flow through a search:
//! - `Coordinate` for geographic points
//! - `HardFilters` / `SoftSignals` for the two categories of dietary preference
//! - `Candidate` for one ranked restaurant returned by the recommendation service
//! - `RefinementRequest` for the immutable snapshot a search is refined against

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a restaurant, unique within one service response
pub type RestaurantId = String;

// =============================================================================
// Geography
// =============================================================================

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Approximate center of the UC Irvine campus.
    pub const UCI_CAMPUS: Coordinate = Coordinate {
        lat: 33.6405,
        lng: -117.8443,
    };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

// =============================================================================
// Dietary Preferences
// =============================================================================

/// Preferences the service enforces as true filters.
///
/// These travel as structured fields on the outgoing request and are never
/// folded into the query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardFilters {
    pub halal: bool,
}

/// Preferences that only bias ranking on the service side.
///
/// Each flag becomes one or more query tokens, and is re-checked locally
/// against the candidate's dietary tags after the response arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSignals {
    pub vegan: bool,
    pub vegetarian: bool,
    pub gluten_free: bool,
}

impl SoftSignals {
    pub fn any(&self) -> bool {
        self.vegan || self.vegetarian || self.gluten_free
    }
}

/// Snapshot of every dietary toggle at the moment a search starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryPreferences {
    pub hard: HardFilters,
    pub soft: SoftSignals,
}

impl DietaryPreferences {
    /// Build a snapshot from the four user-facing toggles.
    pub fn from_flags(halal: bool, vegan: bool, vegetarian: bool, gluten_free: bool) -> Self {
        Self {
            hard: HardFilters { halal },
            soft: SoftSignals {
                vegan,
                vegetarian,
                gluten_free,
            },
        }
    }
}

// =============================================================================
// Candidates
// =============================================================================

/// One restaurant returned by the recommendation service, already ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: RestaurantId,
    pub name: String,
    /// Tags from an open vocabulary, in the order the service sent them
    pub dietary_tags: Vec<String>,
    /// Average rating, expected in [0, 5]
    pub rating: f64,
    pub review_count: Option<u32>,
    /// Service-assigned score; non-increasing across a response
    pub relevance: f64,
    /// Not every entry is geocoded
    pub coordinate: Option<Coordinate>,
    /// Human-readable reasons for the match, order-significant
    pub why: Vec<String>,
    pub price_level: Option<u8>,
    pub address: Option<String>,
    pub hours_text: Option<String>,
}

impl Candidate {
    /// Create a candidate with only the identifying fields set.
    pub fn new(id: impl Into<RestaurantId>, name: impl Into<String>, relevance: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dietary_tags: Vec::new(),
            rating: 0.0,
            review_count: None,
            relevance,
            coordinate: None,
            why: Vec::new(),
            price_level: None,
            address: None,
            hours_text: None,
        }
    }

    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// Refinement
// =============================================================================

/// Immutable inputs to one refinement pass.
///
/// Built once when a search is triggered and passed by value into the
/// refiner, so no toggle changes can leak into an in-flight search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinementRequest {
    pub preferences: DietaryPreferences,
    /// Upper bound on distance from `reference`, inclusive
    pub max_distance_miles: f64,
    pub reference: Coordinate,
}

impl RefinementRequest {
    pub fn new(
        preferences: DietaryPreferences,
        max_distance_miles: f64,
        reference: Coordinate,
    ) -> Self {
        debug_assert!(
            max_distance_miles.is_finite() && max_distance_miles >= 0.0,
            "max distance must be a finite, non-negative number of miles"
        );
        Self {
            preferences,
            max_distance_miles,
            reference,
        }
    }
}
