//! Command handlers for the blocklog CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod blocks;
pub mod completions;
pub mod config;
pub mod score;
pub mod summary;

use anyhow::{Context, Result};

use blocklog::cli::ScrapeArgs;
use blocklog::scrape::{scrape_path, ScrapeOptions, ScrapeOutcome};
use blocklog::theme::current_theme;
use blocklog::Config;

/// Merge CLI scrape flags over the configured defaults.
pub fn scrape_options(args: &ScrapeArgs, config: &Config) -> ScrapeOptions {
    ScrapeOptions {
        start_block: args.start_block.or(config.analysis.start_block),
        cease_block: args.cease_block.or(config.analysis.cease_block),
        strict: args.strict || config.analysis.strict,
    }
}

/// Number of extra blocks to drop from each end: CLI flag, then config.
pub fn resolve_drop(cli_drop: Option<usize>, config: &Config) -> usize {
    cli_drop.unwrap_or(config.analysis.num_addl_blocks_to_drop)
}

/// Scrape the log named on the command line, warning about skipped lines.
pub fn scrape_log(args: &ScrapeArgs, config: &Config) -> Result<ScrapeOutcome> {
    let options = scrape_options(args, config);
    let outcome = scrape_path(&args.log, &options)
        .with_context(|| format!("Failed to scrape log: {}", args.log.display()))?;

    if let Some(first) = outcome.unrecognized.first() {
        let theme = current_theme();
        eprintln!(
            "{}",
            theme.error_text(&format!(
                "Warning: skipped {} block line(s) in an unknown log format (first on line {})",
                outcome.unrecognized.len(),
                first.line_number
            ))
        );
    }

    Ok(outcome)
}
