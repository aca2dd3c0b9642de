//! View helpers over a collected star set: filter, sort, group and summarize.
//!
//! These use the display sentinels from [`Labels`], which differ from the
//! aggregate endpoint's fallback.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Serialize;

use super::aggregate::{LanguageTally, total_stars};
use crate::client::GithubRepo;
use crate::config::Labels;

/// Language filter value that keeps every repository
pub const ALL_LANGUAGES: &str = "All";

/// Sort order for a repository listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Most stars first
    #[default]
    Stars,
    /// Alphabetical by name
    Name,
    /// Most recently pushed first
    Recent,
}

/// Filter and sort settings for a listing
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    /// Exact language to keep; `None` or "All" keeps everything
    pub language: Option<String>,
    /// Case-insensitive term matched against name and description
    pub search: Option<String>,
    pub sort: SortOption,
}

impl ViewQuery {
    /// Filter then stably sort `repos`
    pub fn apply<'a>(&self, repos: &'a [GithubRepo]) -> Vec<&'a GithubRepo> {
        let language = self
            .language
            .as_deref()
            .filter(|l| *l != ALL_LANGUAGES);
        let term = self
            .search
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        let mut result: Vec<&GithubRepo> = repos
            .iter()
            .filter(|r| language.is_none_or(|l| r.language.as_deref() == Some(l)))
            .filter(|r| term.as_deref().is_none_or(|t| matches_term(r, t)))
            .collect();

        match self.sort {
            SortOption::Stars => {
                result.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count))
            }
            SortOption::Name => result.sort_by(|a, b| compare_labels(&a.name, &b.name)),
            SortOption::Recent => result.sort_by(|a, b| match (a.pushed_at, b.pushed_at) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
        }

        result
    }
}

fn matches_term(repo: &GithubRepo, lowered: &str) -> bool {
    repo.name.to_lowercase().contains(lowered)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(lowered))
}

/// Case-insensitive ordering with a byte-order tiebreak
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// "All" followed by the distinct declared languages, sorted
pub fn language_options(repos: &[GithubRepo]) -> Vec<String> {
    let mut languages: Vec<String> = repos
        .iter()
        .filter_map(|r| r.language.clone())
        .collect();
    languages.sort();
    languages.dedup();

    let mut options = Vec::with_capacity(languages.len() + 1);
    options.push(ALL_LANGUAGES.to_string());
    options.extend(languages);
    options
}

/// Repositories sharing one language label
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageGroup<'a> {
    pub language: String,
    pub repos: Vec<&'a GithubRepo>,
}

/// Group repositories by language, keeping input order inside each group.
///
/// Repositories without a language go under `bucket`, which is always last.
/// Other groups are ordered by label, case-insensitively.
pub fn group_by_language<'a>(repos: &[&'a GithubRepo], bucket: &str) -> Vec<LanguageGroup<'a>> {
    let mut groups: Vec<LanguageGroup<'a>> = Vec::new();

    for &repo in repos {
        let label = repo.language.as_deref().unwrap_or(bucket);
        match groups.iter_mut().find(|g| g.language == label) {
            Some(group) => group.repos.push(repo),
            None => groups.push(LanguageGroup {
                language: label.to_string(),
                repos: vec![repo],
            }),
        }
    }

    groups.sort_by(|a, b| match (a.language == bucket, b.language == bucket) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => compare_labels(&a.language, &b.language),
    });
    groups
}

/// Summary figures for a listing header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStats {
    pub total_repos: usize,
    pub total_stars: u64,
    pub top_language: String,
}

/// Summary over the whole collected set.
///
/// Unlike the aggregate endpoint, repositories without a language are
/// counted under `labels.unknown_language`.
pub fn display_stats(repos: &[GithubRepo], labels: &Labels) -> DisplayStats {
    let mut tally = LanguageTally::new();
    for repo in repos {
        tally.add(
            repo.language
                .as_deref()
                .unwrap_or(labels.unknown_language.as_str()),
        );
    }

    DisplayStats {
        total_repos: repos.len(),
        total_stars: total_stars(repos),
        top_language: tally
            .dominant()
            .unwrap_or(labels.top_language_fallback.as_str())
            .to_string(),
    }
}
