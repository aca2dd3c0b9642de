//! Scan orchestration

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::aggregate::aggregate;
use super::classify;
use super::collector::collect_starred;
use crate::client::pagination::user_path;
use crate::client::{GitHubApi, GitHubClient, GithubRepo, GithubUser, RateLimit};
use crate::config::Config;
use crate::error::{ApiError, ScanError};

/// Fallback for `mostUsedLanguage` when no repository declares a language
pub const DEFAULT_MOST_USED_FALLBACK: &str = "N/A";

/// Successful scan payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub username: String,
    pub user: GithubUser,
    /// Starred repositories, newest star first
    pub repos: Vec<GithubRepo>,
    pub total_stars: u64,
    pub most_used_language: String,
    pub rate_limit: RateLimit,
}

impl ScanReport {
    /// Treat an empty collection as [`ScanError::NoStarredRepos`]
    pub fn require_stars(self) -> Result<Self, ScanError> {
        classify::require_stars(&self.repos)?;
        Ok(self)
    }
}

/// Runs scans against one upstream.
///
/// Holds no per-scan state, so one instance can serve concurrent scans.
#[derive(Clone)]
pub struct Scanner {
    api: Arc<dyn GitHubApi>,
    most_used_fallback: String,
}

impl Scanner {
    pub fn new(api: Arc<dyn GitHubApi>) -> Self {
        Self {
            api,
            most_used_fallback: DEFAULT_MOST_USED_FALLBACK.to_string(),
        }
    }

    /// Build a scanner over the reqwest client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = GitHubClient::from_config(config)?;
        Ok(Self::new(Arc::new(client))
            .with_most_used_fallback(config.labels.most_used_fallback.clone()))
    }

    pub fn with_most_used_fallback(mut self, label: impl Into<String>) -> Self {
        self.most_used_fallback = label.into();
        self
    }

    /// Scan `username`: resolve the profile, collect stars, aggregate.
    ///
    /// A missing or empty username fails before any upstream request.
    /// An empty star collection is a successful scan; see
    /// [`ScanReport::require_stars`].
    pub async fn scan(&self, username: Option<&str>) -> Result<ScanReport, ScanError> {
        let username = match username {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ScanError::MissingUsername),
        };

        let profile = self.api.get(&user_path(username), &[]).await?;
        if !profile.is_success() {
            debug!("Profile lookup for {} returned {}", username, profile.status);
            return Err(classify::profile_failure(profile.status));
        }
        let user: GithubUser = profile.json()?;

        let collection = collect_starred(self.api.as_ref(), username).await?;

        let headers = collection.last_headers.as_ref().unwrap_or(&profile.headers);
        let rate_limit = RateLimit::from_headers(headers);
        let stats = aggregate(&collection.repos, &self.most_used_fallback);

        info!(
            "Scanned {}: {} repositories over {} pages, {} stars",
            username,
            collection.repos.len(),
            collection.pages_fetched,
            stats.total_stars
        );

        Ok(ScanReport {
            username: username.to_string(),
            user,
            repos: collection.repos,
            total_stars: stats.total_stars,
            most_used_language: stats.most_used_language,
            rate_limit,
        })
    }
}
