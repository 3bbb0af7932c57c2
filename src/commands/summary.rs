//! Summary command handler

use anyhow::Result;
use humansize::{format_size, BINARY};

use blocklog::cli::ScrapeArgs;
use blocklog::theme::current_theme;
use blocklog::Config;

use super::scrape_log;

/// Handle the summary command.
///
/// Prints the chain totals over the in-range blocks plus what the scan saw.
#[cfg(not(tarpaulin_include))]
pub fn handle(scrape: &ScrapeArgs) -> Result<()> {
    let config = Config::load()?;
    let outcome = scrape_log(scrape, &config)?;
    let theme = current_theme();

    println!(
        "{}",
        theme.accent_text(&format!("Chain summary: {}", scrape.log.display()))
    );
    for line in outcome.chain.to_string().lines() {
        println!("  {}", theme.primary_text(line));
    }
    println!();
    println!(
        "{}",
        theme.secondary_text(&format!(
            "Scanned {} lines ({}), {} block records, {} skipped",
            outcome.lines_read,
            format_size(outcome.bytes_read, BINARY),
            outcome.chain.len(),
            outcome.unrecognized.len()
        ))
    );

    Ok(())
}
