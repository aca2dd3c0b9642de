//! Error types for starscan

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for starscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Upstream transport and decoding errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to GitHub API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Stable identifier for each client-facing scan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanErrorKind {
    MissingUsername,
    NotFound,
    RateLimited,
    UpstreamFailure,
    StarHistoryFailure,
    NoStarredRepos,
    UnexpectedFailure,
}

/// Client-facing scan failures.
///
/// Every failure of a scan resolves to exactly one of these. The message is what
/// the caller sees; [`ScanError::suggested_status`] is the HTTP status to surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Username is required")]
    MissingUsername,

    #[error("User not found in GitHub registry.")]
    NotFound,

    #[error("GitHub API rate limit reached. Try again later.")]
    RateLimited,

    #[error("Failed to fetch user data from GitHub.")]
    UpstreamFailure { status: u16 },

    #[error("Failed to retrieve star history.")]
    StarHistoryFailure { status: u16 },

    #[error("This user has no public starred repositories.")]
    NoStarredRepos,

    #[error("An unexpected error occurred while fetching GitHub data.")]
    UnexpectedFailure { detail: String },
}

impl ScanError {
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            Self::MissingUsername => ScanErrorKind::MissingUsername,
            Self::NotFound => ScanErrorKind::NotFound,
            Self::RateLimited => ScanErrorKind::RateLimited,
            Self::UpstreamFailure { .. } => ScanErrorKind::UpstreamFailure,
            Self::StarHistoryFailure { .. } => ScanErrorKind::StarHistoryFailure,
            Self::NoStarredRepos => ScanErrorKind::NoStarredRepos,
            Self::UnexpectedFailure { .. } => ScanErrorKind::UnexpectedFailure,
        }
    }

    /// Suggested HTTP status for this failure.
    ///
    /// Upstream statuses are passed through as-is, even when they are not valid
    /// HTTP statuses; see [`ResponseError::status_code`] for the rendered one.
    pub fn suggested_status(&self) -> u16 {
        match self {
            Self::MissingUsername => 400,
            Self::NotFound => 404,
            Self::RateLimited => 429,
            Self::UpstreamFailure { status } | Self::StarHistoryFailure { status } => *status,
            Self::NoStarredRepos => 200,
            Self::UnexpectedFailure { .. } => 500,
        }
    }
}

impl From<ApiError> for ScanError {
    fn from(err: ApiError) -> Self {
        ScanError::UnexpectedFailure {
            detail: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ScanError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.suggested_status()).unwrap_or(StatusCode::BAD_GATEWAY)
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &message })
    }
}
