//! # Search Orchestrator
//!
//! This module coordinates one restaurant search:
//! 1. Snapshot the user's preferences into a `RefinementRequest`
//! 2. Build the outgoing query text from the soft signals
//! 3. Make exactly one call to the recommendation service
//! 4. Refine the ranked response for display
//!
//! If the service call fails the refiner never runs, so stale or partial
//! results are never shown.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use data_loader::{Candidate, DietaryPreferences, RefinementRequest};
use pipeline::{build_query, ResultRefiner};
use rec_client::{RecClientError, RecommendRequest, RecommendationClient};

use crate::config::{SearchConfig, DEFAULT_MAX_DISTANCE_MILES};

/// Everything the user entered for one search.
///
/// Taken by value so later edits to the form cannot reach a search in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInput {
    pub free_text: String,
    pub preferences: DietaryPreferences,
    pub max_distance_miles: f64,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            preferences: DietaryPreferences::default(),
            max_distance_miles: DEFAULT_MAX_DISTANCE_MILES,
        }
    }
}

/// Main orchestrator that coordinates the search pipeline
#[derive(Clone)]
pub struct SearchOrchestrator {
    client: RecommendationClient,
    refiner: Arc<ResultRefiner>,
    config: SearchConfig,
}

impl SearchOrchestrator {
    /// Create a new orchestrator with all components initialized
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate().context("Invalid search configuration")?;
        let client = RecommendationClient::new(config.service.clone())
            .context("Failed to create recommendation client")?;
        Ok(Self::with_client(client, config))
    }

    /// Create an orchestrator around an existing client.
    pub fn with_client(client: RecommendationClient, config: SearchConfig) -> Self {
        Self {
            client,
            refiner: Arc::new(ResultRefiner::new()),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Freeze the inputs the refiner will see for this search.
    pub fn refinement_request(&self, input: &SearchInput) -> RefinementRequest {
        RefinementRequest::new(
            input.preferences,
            input.max_distance_miles,
            self.config.reference,
        )
    }

    /// Main entry point: run one search
    ///
    /// # Returns
    /// At most `config.display_limit` restaurants in the service's ranking
    /// order. Service failures are returned unchanged.
    pub async fn search(&self, input: SearchInput) -> Result<Vec<Candidate>, RecClientError> {
        let start_time = Instant::now();

        let refinement = self.refinement_request(&input);
        let query = build_query(&input.free_text, &refinement.preferences.soft);
        let request = RecommendRequest::new(refinement.preferences.hard, self.config.top_k, query);
        info!(
            "Searching (halal: {}, query: {:?}, within {:.1} mi)",
            request.halal, request.query, refinement.max_distance_miles
        );

        let candidates = self.client.recommend(&request).await.map_err(|e| {
            warn!("Search failed, nothing will be refined: {}", e);
            e
        })?;
        let fetched = candidates.len();

        let restaurants = self
            .refiner
            .refine(candidates, refinement, self.config.display_limit);

        info!(
            "Search returned {} of {} candidates in {:.2?}",
            restaurants.len(),
            fetched,
            start_time.elapsed()
        );
        Ok(restaurants)
    }
}
