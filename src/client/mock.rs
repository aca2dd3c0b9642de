//! Mock GitHub API client for testing
//!
//! Scripts upstream replies per route so the pipeline can be exercised
//! without network access.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Mutex;

use super::models::{GithubRepo, GithubUser};
use super::{GitHubApi, STAR_PAGE_SIZE, UpstreamResponse};
use crate::error::ApiError;

/// Scripted reply for one route
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Status, JSON body and extra headers
    Http {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },
    /// Transport-level failure
    Transport(String),
}

impl MockReply {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        MockReply::Http {
            status,
            body: body.into(),
            headers: Vec::new(),
        }
    }

    pub fn status(status: u16) -> Self {
        MockReply::json(status, r#"{"message":"error"}"#)
    }

    /// Attach a response header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let MockReply::Http { ref mut headers, .. } = self {
            headers.push((name.to_string(), value.to_string()));
        }
        self
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub path: String,
    /// `page` query parameter, if present
    pub page: Option<u32>,
    pub query: Vec<(String, String)>,
}

/// Mock API client for testing.
///
/// Unscripted profile lookups return 404; unscripted star pages return `[]`
/// unless [`MockGitHubClient::with_endless_stars`] is set.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_user(UserBuilder::new("octocat").build())
///     .with_star_page(1, fixtures::repos(1, 20));
/// ```
#[derive(Default, Clone)]
pub struct MockGitHubClient {
    user: Arc<std::sync::Mutex<Option<MockReply>>>,
    star_pages: Arc<std::sync::Mutex<HashMap<u32, MockReply>>>,
    endless_stars: Arc<std::sync::Mutex<bool>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to the profile lookup with this user.
    pub fn with_user(self, user: GithubUser) -> Self {
        let body = serde_json::to_string(&user).unwrap();
        self.with_user_reply(MockReply::json(200, body))
    }

    /// Reply to the profile lookup with an arbitrary scripted reply.
    pub fn with_user_reply(self, reply: MockReply) -> Self {
        *self.user.lock().unwrap() = Some(reply);
        self
    }

    /// Reply to star page `page` (1-indexed) with these repositories.
    pub fn with_star_page(self, page: u32, repos: Vec<GithubRepo>) -> Self {
        let body = serde_json::to_string(&repos).unwrap();
        self.with_star_reply(page, MockReply::json(200, body))
    }

    /// Reply to star page `page` with an arbitrary scripted reply.
    pub fn with_star_reply(self, page: u32, reply: MockReply) -> Self {
        self.star_pages.lock().unwrap().insert(page, reply);
        self
    }

    /// Spread `total` repositories over full pages, as the upstream would.
    pub fn with_starred_total(mut self, total: usize) -> Self {
        let all = super::fixtures::repos(1, total);
        for (index, chunk) in all.chunks(STAR_PAGE_SIZE).enumerate() {
            self = self.with_star_page(index as u32 + 1, chunk.to_vec());
        }
        self
    }

    /// Every unscripted star page returns a full page.
    pub fn with_endless_stars(self) -> Self {
        *self.endless_stars.lock().unwrap() = true;
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of star-page requests issued.
    pub async fn star_page_calls(&self) -> usize {
        self.captured_requests()
            .await
            .iter()
            .filter(|r| r.path.ends_with("/starred"))
            .count()
    }

    /// Total number of upstream requests issued.
    pub async fn total_calls(&self) -> usize {
        self.captured_requests.lock().await.len()
    }

    fn reply_for(&self, path: &str, page: Option<u32>) -> MockReply {
        if path.ends_with("/starred") {
            let page = page.unwrap_or(1);
            if let Some(reply) = self.star_pages.lock().unwrap().get(&page) {
                return reply.clone();
            }
            if *self.endless_stars.lock().unwrap() {
                let first_id = (page as u64 - 1) * STAR_PAGE_SIZE as u64 + 1;
                let repos = super::fixtures::repos(first_id, STAR_PAGE_SIZE);
                return MockReply::json(200, serde_json::to_string(&repos).unwrap());
            }
            return MockReply::json(200, "[]");
        }

        self.user
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| MockReply::status(404))
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<UpstreamResponse, ApiError> {
        let page = query
            .iter()
            .find(|(k, _)| *k == "page")
            .and_then(|(_, v)| v.parse().ok());

        self.captured_requests.lock().await.push(CapturedRequest {
            path: path.to_string(),
            page,
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });

        match self.reply_for(path, page) {
            MockReply::Transport(msg) => Err(ApiError::Network(msg)),
            MockReply::Http {
                status,
                body,
                headers,
            } => {
                let mut map = HeaderMap::new();
                for (name, value) in headers {
                    map.insert(
                        HeaderName::from_bytes(name.as_bytes()).unwrap(),
                        HeaderValue::from_str(&value).unwrap(),
                    );
                }
                Ok(UpstreamResponse {
                    status,
                    headers: map,
                    body: body.into_bytes(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::UserBuilder;

    #[tokio::test]
    async fn test_unscripted_user_is_not_found() {
        let mock = MockGitHubClient::new();
        let response = mock.get("users/ghost", &[]).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(mock.total_calls().await, 1);
    }

    #[tokio::test]
    async fn test_scripted_user_and_pages() {
        let mock = MockGitHubClient::new()
            .with_user(UserBuilder::new("octocat").build())
            .with_starred_total(150);

        let user = mock.get("users/octocat", &[]).await.unwrap();
        let user: GithubUser = user.json().unwrap();
        assert_eq!(user.login, "octocat");

        let page2 = mock
            .get("users/octocat/starred", &[("page", "2".to_string())])
            .await
            .unwrap();
        let repos: Vec<GithubRepo> = page2.json().unwrap();
        assert_eq!(repos.len(), 50);
        assert_eq!(repos[0].id, 101);

        assert_eq!(mock.star_page_calls().await, 1);
        let captured = mock.captured_requests().await;
        assert_eq!(captured[1].page, Some(2));
    }

    #[tokio::test]
    async fn test_reply_headers_and_transport_errors() {
        let mock = MockGitHubClient::new()
            .with_user_reply(MockReply::status(403).header("x-ratelimit-remaining", "0"))
            .with_star_reply(1, MockReply::Transport("connection reset".to_string()));

        let response = mock.get("users/octocat", &[]).await.unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(response.headers.get("x-ratelimit-remaining").unwrap(), "0");

        let err = mock
            .get("users/octocat/starred", &[("page", "1".to_string())])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
