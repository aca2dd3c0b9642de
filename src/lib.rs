//! starscan - scan, aggregate and browse the starred repositories of a GitHub user
//!
//! The library holds the scan pipeline ([`scan`]), the upstream client
//! ([`client`]), the inbound HTTP service ([`server`]) and the formatting
//! used by the `starscan` binary.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod scan;
pub mod server;

pub use client::{GitHubApi, GitHubClient};
pub use config::Config;
pub use error::{Error, Result, ScanError};
pub use scan::{ScanReport, Scanner};
