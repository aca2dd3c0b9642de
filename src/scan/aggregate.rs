//! Star totals and language tallies

use std::collections::HashMap;

use serde::Serialize;

use crate::client::GithubRepo;

/// Occurrence counts per language, in first-seen order.
///
/// Ties in [`LanguageTally::dominant`] go to the language seen first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `language`
    pub fn add(&mut self, language: &str) {
        match self.index.get(language) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(language.to_string(), self.entries.len());
                self.entries.push((language.to_string(), 1));
            }
        }
    }

    pub fn count(&self, language: &str) -> usize {
        self.index
            .get(language)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Language with the highest count; earliest seen wins ties
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (language, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((language, count));
            }
        }
        best.map(|(language, _)| language)
    }
}

/// Aggregates over a collected star set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_stars: u64,
    pub most_used_language: String,
    #[serde(skip)]
    pub languages: LanguageTally,
}

/// Sum of stargazer counts
pub fn total_stars(repos: &[GithubRepo]) -> u64 {
    repos.iter().map(|r| r.stargazers_count).sum()
}

/// Tally declared languages. Repositories without one are skipped.
pub fn language_tally(repos: &[GithubRepo]) -> LanguageTally {
    let mut tally = LanguageTally::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        tally.add(language);
    }
    tally
}

/// Total stars and most-used language, with `fallback` when no repository
/// declares a language.
pub fn aggregate(repos: &[GithubRepo], fallback: &str) -> AggregateStats {
    let languages = language_tally(repos);
    let most_used_language = languages.dominant().unwrap_or(fallback).to_string();

    AggregateStats {
        total_stars: total_stars(repos),
        most_used_language,
        languages,
    }
}
