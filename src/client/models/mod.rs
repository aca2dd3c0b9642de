//! GitHub API data models
//!
//! Field names mirror the upstream JSON so records pass through to callers unchanged.

mod repo;
mod user;

pub use repo::{GithubRepo, RepoOwner};
pub use user::GithubUser;
