//! Listing arguments for the scan command

use clap::Args;

use super::SortOption;
use starscan::scan::ViewQuery;

/// Filter, sort and layout arguments for a scan listing.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Sort order (stars, name, recent)
    #[arg(
        long,
        value_enum,
        default_value = "stars",
        hide_possible_values = true,
        hide_default_value = true
    )]
    pub sort: SortOption,

    /// Only show repositories in this language (exact match)
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Case-insensitive match on name or description
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Maximum repositories to list
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// List in one table instead of grouping by language
    #[arg(long)]
    pub no_group: bool,
}

impl ViewArgs {
    /// The filter/sort part of the arguments
    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            language: self.language.clone(),
            search: self.search.clone(),
            sort: self.sort,
        }
    }
}
