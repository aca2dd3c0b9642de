//! Display model implementations for table and JSON output
//!
//! Display models transform API records into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod repo;

pub use common::{format_count, format_date, truncate_string};
pub use repo::RepoDisplay;
