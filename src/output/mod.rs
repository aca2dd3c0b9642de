//! Output formatting for CLI results

pub mod json;
pub mod table;

pub use json::{JsonOutput, format_json};
pub use table::format_table;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - one row per repository
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
