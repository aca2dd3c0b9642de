//! Status command implementation

use colored::Colorize;

use starscan::config::Config;
use starscan::error::Result;

use crate::cli::{CommandContext, GlobalOptions};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "starscan Configuration Status".bold());

    let config_path = match opts.config_ref() {
        Some(path) => path.to_string(),
        None => Config::default_path()?.display().to_string(),
    };

    match CommandContext::new(opts) {
        Ok(ctx) => {
            println!("Config file: {}", config_path.cyan());
            println!();
            print!("{}", render(&ctx.config));
            println!();
        }
        Err(err) => {
            println!("{} Configuration could not be loaded", "✗".red());
            println!("  {}", err);
            println!();
            println!("Config file: {}", config_path.cyan());
            println!();
        }
    }

    Ok(())
}

fn render(config: &Config) -> String {
    let mut out = String::new();

    if config.has_token() {
        out.push_str(&format!("{} GitHub token configured\n", "✓".green()));
    } else {
        out.push_str(&format!(
            "{} No GitHub token (unauthenticated, lower quota)\n",
            "○".dimmed()
        ));
        out.push_str("  → Set GITHUB_TOKEN or github_token in the config file\n");
    }

    out.push_str(&format!("{} API host: {}\n", "○".dimmed(), config.api_host));
    out.push_str(&format!(
        "{} Server address: {}\n",
        "○".dimmed(),
        config.bind_address()
    ));
    out.push_str(&format!(
        "{} Labels: most used fallback \"{}\", top language fallback \"{}\", \
         unknown \"{}\", ungrouped \"{}\"\n",
        "○".dimmed(),
        config.labels.most_used_fallback,
        config.labels.top_language_fallback,
        config.labels.unknown_language,
        config.labels.ungrouped_bucket
    ));

    out
}
