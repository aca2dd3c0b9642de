//! Upstream failure classification
//!
//! Transport and decode failures are not handled here; they convert into
//! `UnexpectedFailure` through `From<ApiError> for ScanError`.

use crate::client::GithubRepo;
use crate::error::ScanError;

/// Classify a non-2xx profile lookup
pub fn profile_failure(status: u16) -> ScanError {
    match status {
        404 => ScanError::NotFound,
        403 => ScanError::RateLimited,
        status => ScanError::UpstreamFailure { status },
    }
}

/// Classify a non-2xx star page when nothing has been collected yet
pub fn star_page_failure(status: u16) -> ScanError {
    ScanError::StarHistoryFailure { status }
}

/// An empty collection is a client-visible error, not a transport failure
pub fn require_stars(repos: &[GithubRepo]) -> Result<(), ScanError> {
    if repos.is_empty() {
        Err(ScanError::NoStarredRepos)
    } else {
        Ok(())
    }
}
