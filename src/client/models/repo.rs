//! Starred repository model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository record from `GET /users/{username}/starred`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    /// Numeric repository ID
    pub id: u64,

    /// Short name
    pub name: String,

    /// `owner/name`
    pub full_name: String,

    /// Owning account
    pub owner: RepoOwner,

    /// Web URL
    pub html_url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    /// Primary language, absent when GitHub could not detect one
    #[serde(default)]
    pub language: Option<String>,

    /// Last metadata update
    pub updated_at: DateTime<Utc>,

    /// Last push; null for repositories that were never pushed to
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// Owner reference embedded in a repository record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
}
