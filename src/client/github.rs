//! GitHub API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, HeaderMap, HeaderValue};

use super::{GitHubApi, UpstreamResponse};
use crate::config::Config;
use crate::error::ApiError;

/// Media type pinned on every request
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("starscan/", env!("CARGO_PKG_VERSION"));

/// Settings injected into the client at construction
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL without trailing slash
    pub base_url: String,

    /// Optional bearer credential
    pub token: Option<String>,

    pub timeout: Duration,

    /// Freshness hint in seconds; `None` sends no hint
    pub cache_max_age: Option<u64>,

    /// Client-side pacing; `None` disables it
    pub requests_per_second: Option<NonZeroU32>,
}

impl ClientOptions {
    /// Build client options from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.api_host.clone(),
            token: config.github_token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(config.http.timeout_secs),
            cache_max_age: Some(config.http.cache_max_age_secs).filter(|s| *s > 0),
            requests_per_second: NonZeroU32::new(config.http.requests_per_second),
        }
    }
}

/// GitHub REST API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Option<Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>>,
}

impl GitHubClient {
    /// Create a new GitHub API client
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let headers = default_headers(&options)?;

        let http = HttpClient::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate_limiter = options
            .requests_per_second
            .map(|rps| Arc::new(RateLimiter::direct(Quota::per_second(rps))));

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(ClientOptions::from_config(config))
    }

    /// The API base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Headers sent on every request: fixed Accept, optional bearer, optional cache hint
fn default_headers(options: &ClientOptions) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    if let Some(ref token) = options.token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::Network("GitHub token contains invalid characters".into()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    if let Some(max_age) = options.cache_max_age {
        let value = HeaderValue::from_str(&format!("max-age={}", max_age))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        headers.insert(CACHE_CONTROL, value);
    }

    Ok(headers)
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<UpstreamResponse, ApiError> {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.url_for(path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ApiError::from)?.to_vec();

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ClientOptions {
        ClientOptions {
            base_url: "https://api.github.com/".to_string(),
            token: None,
            timeout: Duration::from_secs(5),
            cache_max_age: Some(300),
            requests_per_second: None,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(options()).unwrap();
        assert_eq!(client.base_url(), "https://api.github.com");
        assert!(client.rate_limiter.is_none());
    }

    #[test]
    fn test_url_for_joins_paths() {
        let client = GitHubClient::new(options()).unwrap();
        assert_eq!(
            client.url_for("/users/octocat"),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.url_for("users/octocat/starred"),
            "https://api.github.com/users/octocat/starred"
        );
    }

    #[test]
    fn test_default_headers_without_token() {
        let headers = default_headers(&options()).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), GITHUB_ACCEPT);
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "max-age=300");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_default_headers_with_token() {
        let opts = ClientOptions {
            token: Some("ghp_secret".to_string()),
            cache_max_age: None,
            ..options()
        };
        let headers = default_headers(&opts).unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer ghp_secret");
        assert!(auth.is_sensitive());
        assert!(headers.get(CACHE_CONTROL).is_none());
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let opts = ClientOptions {
            token: Some("bad\ntoken".to_string()),
            ..options()
        };
        assert!(GitHubClient::new(opts).is_err());
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.github_token = Some(String::new());
        config.http.cache_max_age_secs = 0;
        config.http.requests_per_second = 0;

        let opts = ClientOptions::from_config(&config);
        assert!(opts.token.is_none());
        assert!(opts.cache_max_age.is_none());
        assert!(opts.requests_per_second.is_none());
        assert_eq!(opts.base_url, "https://api.github.com");

        let config = Config {
            github_token: Some("ghp_x".to_string()),
            ..Config::default()
        };
        let opts = ClientOptions::from_config(&config);
        assert_eq!(opts.token.as_deref(), Some("ghp_x"));
        assert_eq!(opts.cache_max_age, Some(300));
        assert_eq!(opts.requests_per_second.map(|r| r.get()), Some(10));
    }
}
