//! Display models for CLI output
//!
//! Converts API records into CLI-friendly table rows.

pub mod display;

pub use display::{RepoDisplay, format_count};
