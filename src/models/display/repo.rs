//! Starred repository display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY, format_count, format_date, truncate_string};
use crate::client::GithubRepo;

const DESCRIPTION_WIDTH: usize = 60;

/// Starred repository row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    /// Owner/name
    #[tabled(rename = "REPOSITORY")]
    pub full_name: String,

    /// Primary language
    #[tabled(rename = "LANGUAGE")]
    pub language: String,

    /// Stargazer count
    #[tabled(rename = "STARS")]
    pub stars: String,

    /// Last push date
    #[tabled(rename = "PUSHED")]
    pub pushed: String,

    /// Truncated description
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&GithubRepo> for RepoDisplay {
    fn from(repo: &GithubRepo) -> Self {
        Self {
            full_name: repo.full_name.clone(),
            language: repo.language.clone().unwrap_or_else(|| EMPTY.to_string()),
            stars: format_count(repo.stargazers_count),
            pushed: repo
                .pushed_at
                .as_ref()
                .map(format_date)
                .unwrap_or_else(|| EMPTY.to_string()),
            description: repo
                .description
                .as_deref()
                .map(|d| truncate_string(d.trim(), DESCRIPTION_WIDTH))
                .unwrap_or_else(|| EMPTY.to_string()),
        }
    }
}
