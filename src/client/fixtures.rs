//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

use chrono::{DateTime, TimeZone, Utc};

use super::models::{GithubRepo, GithubUser, RepoOwner};

fn timestamp(days_after_epoch_2020: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        + chrono::Duration::days(days_after_epoch_2020)
}

// ============================================================================
// RepoBuilder
// ============================================================================

/// Builder for creating test GithubRepo instances.
///
/// # Example
/// ```ignore
/// let repo = RepoBuilder::new(42)
///     .name("ripgrep")
///     .language("Rust")
///     .stars(40_000)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RepoBuilder {
    repo: GithubRepo,
}

impl RepoBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: u64) -> Self {
        let name = format!("repo-{}", id);
        Self {
            repo: GithubRepo {
                id,
                full_name: format!("owner/{}", name),
                html_url: format!("https://github.com/owner/{}", name),
                name,
                owner: RepoOwner {
                    login: "owner".to_string(),
                    avatar_url: "https://avatars.example/owner.png".to_string(),
                },
                description: None,
                stargazers_count: 0,
                language: None,
                updated_at: timestamp(0),
                pushed_at: Some(timestamp(0)),
                topics: None,
            },
        }
    }

    /// Set the short name (and derived full name / URL).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.repo.full_name = format!("{}/{}", self.repo.owner.login, name);
        self.repo.html_url = format!("https://github.com/{}", self.repo.full_name);
        self.repo.name = name;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.repo.description = Some(description.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.repo.language = Some(language.into());
        self
    }

    pub fn stars(mut self, stars: u64) -> Self {
        self.repo.stargazers_count = stars;
        self
    }

    /// Set `pushed_at` to N days after 2020-01-01.
    pub fn pushed_days(mut self, days: i64) -> Self {
        self.repo.pushed_at = Some(timestamp(days));
        self
    }

    pub fn never_pushed(mut self) -> Self {
        self.repo.pushed_at = None;
        self
    }

    pub fn build(self) -> GithubRepo {
        self.repo
    }
}

/// `count` repositories with consecutive IDs starting at `first_id`.
pub fn repos(first_id: u64, count: usize) -> Vec<GithubRepo> {
    (0..count as u64)
        .map(|i| RepoBuilder::new(first_id + i).stars(1).build())
        .collect()
}

/// Repositories with the given languages, one star each, IDs from 1.
pub fn repos_with_languages(languages: &[Option<&str>]) -> Vec<GithubRepo> {
    languages
        .iter()
        .enumerate()
        .map(|(i, lang)| {
            let builder = RepoBuilder::new(i as u64 + 1).stars(1);
            match lang {
                Some(l) => builder.language(*l).build(),
                None => builder.build(),
            }
        })
        .collect()
}

// ============================================================================
// UserBuilder
// ============================================================================

/// Builder for creating test GithubUser instances.
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: GithubUser,
}

impl UserBuilder {
    pub fn new(login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            user: GithubUser {
                avatar_url: format!("https://avatars.example/{}.png", login),
                login,
                id: 1,
                name: None,
                bio: None,
                public_repos: 0,
                followers: 0,
                following: 0,
                created_at: timestamp(0),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = Some(name.into());
        self
    }

    pub fn followers(mut self, followers: u64) -> Self {
        self.user.followers = followers;
        self
    }

    pub fn build(self) -> GithubUser {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_builder_defaults() {
        let repo = RepoBuilder::new(7).build();
        assert_eq!(repo.id, 7);
        assert_eq!(repo.name, "repo-7");
        assert_eq!(repo.full_name, "owner/repo-7");
        assert!(repo.language.is_none());
    }

    #[test]
    fn test_repo_builder_name_updates_full_name() {
        let repo = RepoBuilder::new(1).name("ripgrep").language("Rust").build();
        assert_eq!(repo.full_name, "owner/ripgrep");
        assert_eq!(repo.html_url, "https://github.com/owner/ripgrep");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_repos_helper_ids_are_consecutive() {
        let batch = repos(101, 3);
        let ids: Vec<u64> = batch.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
    }
}
