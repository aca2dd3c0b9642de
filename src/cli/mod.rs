//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod scan;
pub mod serve;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, ViewArgs};
pub use context::CommandContext;

/// starscan - browse the starred repositories of a GitHub user
#[derive(Parser, Debug)]
#[command(name = "starscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "STARSCAN_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "STARSCAN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "STARSCAN_DEBUG", hide_env = true)]
    pub debug: bool,

    /// GitHub API base URL
    #[arg(long, global = true, env = "STARSCAN_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// GitHub token sent as a bearer credential
    #[arg(
        long,
        global = true,
        env = "GITHUB_TOKEN",
        hide_env_values = true
    )]
    pub github_token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP scan service
    Serve {
        /// Bind host (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides server.port)
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },

    /// Scan a user's starred repositories
    #[command(
        visible_alias = "s",
        after_help = "EXAMPLES:\n  \
            starscan scan octocat                     # Summary grouped by language\n  \
            starscan scan octocat --language Rust     # Only Rust repositories\n  \
            starscan scan octocat --sort recent -n 20 # 20 most recently pushed\n  \
            starscan scan octocat --format json       # Full payload"
    )]
    Scan {
        /// GitHub username
        username: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}
