//! HTTP client for the restaurant recommendation service.
//!
//! This crate provides a Rust client for the external ranking service.
//! It handles:
//! - Building the `POST /recommend` body from hard filters and query text
//! - Parsing the ranked response into `Candidate`s, order preserved
//! - Service health checks and catalog refresh
//! - Mapping every transport problem to a single error type
//!
//! There is no retry policy. One call issues exactly one request; timeouts
//! are configured on the client and enforced by the HTTP transport.

use std::time::Duration;

use data_loader::Candidate;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

pub mod wire;

pub use wire::{HealthStatus, RecommendRequest, RecommendationItem, RefreshStatus, MAX_TOP_K};

/// Default address of a locally running service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default user agent for service requests.
pub const DEFAULT_USER_AGENT: &str = "campus-eats/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when interacting with the recommendation service
#[derive(Error, Debug)]
pub enum RecClientError {
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to reach recommendation service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Recommendation service returned status {status}")]
    Status { status: u16 },

    #[error("Invalid response from recommendation service: {0}")]
    InvalidResponse(String),
}

/// Configuration for [`RecommendationClient`].
#[derive(Debug, Clone)]
pub struct RecClientConfig {
    /// Base URL of the service (e.g., `"http://127.0.0.1:8000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for RecClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RecClientConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Client for the recommendation service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: Client,
    base_url: Url,
}

impl RecommendationClient {
    /// Create a client for the service at `config.base_url`.
    ///
    /// No request is made here; an unreachable service is only reported
    /// by the first call.
    pub fn new(config: RecClientConfig) -> Result<Self, RecClientError> {
        let mut base_url =
            Url::parse(&config.base_url).map_err(|e| RecClientError::InvalidUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(RecClientError::InvalidUrl {
                url: config.base_url,
                reason: "not a base URL".to_string(),
            });
        }
        // Url::join replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(RecClientError::ClientBuild)?;

        info!("Recommendation service at {}", base_url);
        Ok(Self { client, base_url })
    }

    /// Get the address of the service this client talks to.
    pub fn service_address(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch ranked candidates for a request.
    ///
    /// # Returns
    /// Candidates in the service's ranking order, highest relevance first.
    ///
    /// Error handling:
    /// - Connection failures and timeouts become `Transport`
    /// - Any status other than 200 becomes `Status`
    /// - A body that is not a JSON list of restaurants becomes `InvalidResponse`,
    ///   as does any restaurant with an out-of-range coordinate
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Candidate>, RecClientError> {
        debug!(
            "Requesting {} candidates (halal: {}, query: {:?})",
            request.top_k, request.halal, request.query
        );
        let url = self.endpoint("recommend")?;
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Transport error while requesting recommendations: {}", e);
                RecClientError::Transport(e)
            })?;

        let items: Vec<RecommendationItem> = Self::decode(response).await?;
        debug!("Service returned {} candidates", items.len());
        items.into_iter().map(Candidate::try_from).collect()
    }

    /// Check that the service is up and has restaurants loaded.
    pub async fn health(&self) -> Result<HealthStatus, RecClientError> {
        let url = self.endpoint("health")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RecClientError::Transport)?;
        Self::decode(response).await
    }

    /// Ask the service to reload its restaurant catalog and rebuild its index.
    pub async fn refresh(&self) -> Result<RefreshStatus, RecClientError> {
        let url = self.endpoint("refresh")?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(RecClientError::Transport)?;
        let status: RefreshStatus = Self::decode(response).await?;
        info!("Service reloaded {} restaurants", status.count);
        Ok(status)
    }

    fn endpoint(&self, path: &str) -> Result<Url, RecClientError> {
        self.base_url
            .join(path)
            .map_err(|e| RecClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    /// Check for a 200 and parse the JSON body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RecClientError> {
        let status = response.status();
        if status != StatusCode::OK {
            error!("Recommendation service returned status {}", status);
            return Err(RecClientError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(RecClientError::Transport)?;
        serde_json::from_slice(&body).map_err(|e| {
            error!("Malformed response body: {}", e);
            RecClientError::InvalidResponse(e.to_string())
        })
    }
}
