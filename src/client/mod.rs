//! GitHub REST API client

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod github;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use models::{GithubRepo, GithubUser, RepoOwner};
pub use pagination::{MAX_STAR_PAGES, STAR_PAGE_SIZE, StarPageParams};
pub use rate_limit::RateLimit;

/// Upstream GitHub API surface.
///
/// Implementations issue exactly one GET per call and hand back the raw
/// exchange. Status interpretation belongs to the caller, and there are no
/// retries at this layer.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// GET `path` (relative to the API base) with the given query parameters
    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<UpstreamResponse, ApiError>;
}

/// One raw upstream HTTP exchange
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers (rate-limit telemetry lives here)
    pub headers: HeaderMap,

    /// Raw response body
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}
