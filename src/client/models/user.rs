//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub user profile (`GET /users/{username}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubUser {
    /// Login handle
    pub login: String,

    /// Numeric account ID
    pub id: u64,

    /// Avatar image URL
    pub avatar_url: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Profile bio
    #[serde(default)]
    pub bio: Option<String>,

    /// Number of public repositories owned
    #[serde(default)]
    pub public_repos: u64,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub following: u64,

    /// Account creation time
    pub created_at: DateTime<Utc>,
}
