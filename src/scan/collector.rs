//! Starred-repository pagination
//!
//! Pages are fetched strictly in sequence: whether to continue depends on
//! the size of the previous page.

use log::{debug, warn};
use reqwest::header::HeaderMap;

use super::classify;
use crate::client::pagination::starred_path;
use crate::client::{GitHubApi, GithubRepo, MAX_STAR_PAGES, StarPageParams};
use crate::error::ScanError;

/// Why pagination stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page came back empty
    EmptyPage,
    /// A page came back with fewer records than the page size
    ShortPage,
    /// The page safety bound was reached
    SafetyBound,
    /// A page failed after some records were already collected
    PageFailed { page: u32, status: u16 },
}

/// Result of paginating a user's stars
#[derive(Debug, Clone)]
pub struct StarCollection {
    /// Records in upstream order, page by page
    pub repos: Vec<GithubRepo>,

    /// Number of page requests issued
    pub pages_fetched: u32,

    pub stop_reason: StopReason,

    /// Headers of the last page response, for rate-limit telemetry
    pub last_headers: Option<HeaderMap>,
}

impl StarCollection {
    /// Whether collection was cut short by a failed page
    pub fn is_partial(&self) -> bool {
        matches!(self.stop_reason, StopReason::PageFailed { .. })
    }
}

/// Collect every starred repository of `username`, up to [`MAX_STAR_PAGES`] pages.
///
/// A failed page ends collection with what was gathered so far. Only when
/// nothing has been gathered does it become a `StarHistoryFailure`. Transport
/// and decode failures always abort.
pub async fn collect_starred(
    api: &dyn GitHubApi,
    username: &str,
) -> Result<StarCollection, ScanError> {
    let path = starred_path(username);
    let mut repos: Vec<GithubRepo> = Vec::new();
    let mut last_headers = None;
    let mut pages_fetched = 0;
    let mut stop_reason = StopReason::SafetyBound;

    for page in 1..=MAX_STAR_PAGES {
        let params = StarPageParams::page(page);
        let response = api.get(&path, &params.to_query_params()).await?;
        pages_fetched = page;
        last_headers = Some(response.headers.clone());

        if !response.is_success() {
            if repos.is_empty() {
                return Err(classify::star_page_failure(response.status));
            }
            warn!(
                "Star page {} for {} failed with {}; keeping {} repositories",
                page,
                username,
                response.status,
                repos.len()
            );
            stop_reason = StopReason::PageFailed {
                page,
                status: response.status,
            };
            break;
        }

        let page_repos: Vec<GithubRepo> = response.json()?;
        let count = page_repos.len();
        debug!("Star page {} for {}: {} repositories", page, username, count);

        if count == 0 {
            stop_reason = StopReason::EmptyPage;
            break;
        }

        repos.extend(page_repos);

        if count < params.per_page {
            stop_reason = StopReason::ShortPage;
            break;
        }
    }

    if stop_reason == StopReason::SafetyBound {
        warn!(
            "Stopped collecting stars for {} at the {}-page safety bound",
            username, MAX_STAR_PAGES
        );
    }

    Ok(StarCollection {
        repos,
        pages_fetched,
        stop_reason,
        last_headers,
    })
}
