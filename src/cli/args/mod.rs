//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod global;
mod view;

pub use global::GlobalOptions;
pub use starscan::output::OutputFormat;
pub use starscan::scan::SortOption;
pub use view::ViewArgs;
