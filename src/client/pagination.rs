//! Pagination parameters for the starred-repositories listing

/// Maximum page size supported by the GitHub API.
/// Using it minimizes API calls.
pub const STAR_PAGE_SIZE: usize = 100;

/// Safety bound on pages fetched per scan (3,000 repositories)
pub const MAX_STAR_PAGES: u32 = 30;

/// Query parameters for one page of `users/{username}/starred`.
///
/// Sorted by star creation time, newest first, at the maximum page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarPageParams {
    /// Page number (1-indexed)
    pub page: u32,
    pub per_page: usize,
}

impl StarPageParams {
    /// Parameters for the given 1-indexed page
    pub fn page(page: u32) -> Self {
        Self {
            page,
            per_page: STAR_PAGE_SIZE,
        }
    }

    /// Convert to query string parameters
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sort", "created".to_string()),
            ("direction", "desc".to_string()),
        ]
    }
}

/// Upstream path of a user's starred repositories
pub fn starred_path(username: &str) -> String {
    format!("users/{}/starred", username)
}

/// Upstream path of a user's profile
pub fn user_path(username: &str) -> String {
    format!("users/{}", username)
}
