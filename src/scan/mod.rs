//! Star-aggregation pipeline
//!
//! validate → resolve user → collect stars → aggregate → extract telemetry,
//! with every failure classified into a [`ScanError`](crate::error::ScanError).

pub mod aggregate;
pub mod classify;
pub mod collector;
pub mod display;
pub mod scanner;

pub use aggregate::{AggregateStats, LanguageTally, aggregate, total_stars};
pub use collector::{StarCollection, StopReason, collect_starred};
pub use display::{
    DisplayStats, LanguageGroup, SortOption, ViewQuery, display_stats, group_by_language,
    language_options,
};
pub use scanner::{ScanReport, Scanner};
