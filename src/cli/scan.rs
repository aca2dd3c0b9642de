//! Scan command implementation

use std::fmt::Write as _;
use std::time::Duration;

use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use starscan::client::GithubRepo;
use starscan::config::Labels;
use starscan::error::Result;
use starscan::models::{RepoDisplay, format_count};
use starscan::output::{format_json, format_table};
use starscan::scan::{ScanReport, display_stats, group_by_language, language_options};

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, ViewArgs};

/// Run one scan and print it in the selected format
pub async fn run(username: &str, view: &ViewArgs, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scanner = ctx.scanner()?;

    let spinner = (ctx.format == OutputFormat::Pretty).then(|| spinner(username));
    let result = scanner.scan(Some(username)).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?.require_stars()?;

    let output = match ctx.format {
        OutputFormat::Json => format_json(&report)?,
        OutputFormat::Table => {
            let rows: Vec<RepoDisplay> = visible_repos(&report, view)
                .into_iter()
                .map(RepoDisplay::from)
                .collect();
            format_table(&rows)
        }
        OutputFormat::Pretty => {
            let now = Utc::now().timestamp().max(0) as u64;
            render_pretty(&report, view, &ctx.config.labels, now)
        }
    };

    println!("{}", output);
    Ok(())
}

fn spinner(username: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(format!("Scanning stars of {}...", username));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Filtered, sorted and limited repositories
fn visible_repos<'a>(report: &'a ScanReport, view: &ViewArgs) -> Vec<&'a GithubRepo> {
    let mut repos = view.query().apply(&report.repos);
    if let Some(limit) = view.limit {
        repos.truncate(limit);
    }
    repos
}

/// Profile summary followed by the listing, one table per language group
fn render_pretty(report: &ScanReport, view: &ViewArgs, labels: &Labels, now: u64) -> String {
    let mut out = String::new();
    let user = &report.user;
    let stats = display_stats(&report.repos, labels);

    match user.name.as_deref() {
        Some(name) if !name.is_empty() => {
            let _ = writeln!(out, "{} ({})", name.bold(), user.login.cyan());
        }
        _ => {
            let _ = writeln!(out, "{}", user.login.bold().cyan());
        }
    }
    if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
        let _ = writeln!(out, "{}", bio.dimmed());
    }
    let _ = writeln!(
        out,
        "{} followers · {} following · {} public repos",
        format_count(user.followers),
        format_count(user.following),
        format_count(user.public_repos)
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Starred repositories: {}",
        format_count(stats.total_repos as u64).bold()
    );
    let _ = writeln!(
        out,
        "Total stars:          {}",
        format_count(stats.total_stars).bold()
    );
    let _ = writeln!(out, "Top language:         {}", stats.top_language.bold());

    let quota = &report.rate_limit;
    let quota_line = format!("{}/{}", quota.remaining, quota.limit);
    let quota_line = if quota.remaining == 0 {
        quota_line.red()
    } else {
        quota_line.green()
    };
    let _ = writeln!(
        out,
        "API quota:            {} (resets in {} min)",
        quota_line,
        quota.minutes_until_reset(now)
    );

    let repos = visible_repos(report, view);
    let _ = writeln!(out);
    if repos.len() != report.repos.len() {
        let _ = writeln!(
            out,
            "{}",
            format!("Showing {} of {}", repos.len(), report.repos.len()).dimmed()
        );
    }
    if let Some(language) = view.language.as_deref() {
        let options = language_options(&report.repos);
        if !options.iter().any(|o| o == language) {
            let _ = writeln!(
                out,
                "No starred repositories use {}. Available: {}",
                language.yellow(),
                options.join(", ")
            );
        }
    }

    if view.no_group {
        let rows: Vec<RepoDisplay> = repos.into_iter().map(RepoDisplay::from).collect();
        out.push_str(&format_table(&rows));
        return out;
    }

    let groups = group_by_language(&repos, &labels.ungrouped_bucket);
    if groups.is_empty() {
        out.push_str("No results found.");
        return out;
    }
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        let heading = format!("{} ({})", group.language, group.repos.len());
        let _ = writeln!(out, "{}", heading.bold().cyan());
        let rows: Vec<RepoDisplay> = group.repos.iter().copied().map(RepoDisplay::from).collect();
        out.push_str(&format_table(&rows));
    }
    out
}
