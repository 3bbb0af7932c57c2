//! Blocks command handler

use anyhow::{Context, Result};

use blocklog::cli::ScrapeArgs;
use blocklog::theme::current_theme;
use blocklog::{prune_to_steady_state, BlockRecord, Config};

use super::{resolve_drop, scrape_log};

/// Handle the blocks command.
///
/// Lists every scraped record, or only the steady-state ones.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    scrape: &ScrapeArgs,
    steady_state: bool,
    drop: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let outcome = scrape_log(scrape, &config)?;

    let records: &[BlockRecord] = if steady_state {
        prune_to_steady_state(&outcome.chain, resolve_drop(drop, &config))
            .context("Failed to find the steady-state blocks")?
    } else {
        outcome.chain.records()
    };

    if json {
        for record in records {
            println!("{}", serde_json::to_string(record)?);
        }
        return Ok(());
    }

    let theme = current_theme();
    println!(
        "{}",
        theme.accent_text(&format!(
            "{:>10}  {:<18} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "block", "id", "trxs", "net", "cpu", "elapsed", "time", "latency"
        ))
    );
    for record in records {
        println!("{}", theme.primary_text(&format_row(record)));
    }
    println!("{}", theme.secondary_text(&format!("{} block(s)", records.len())));

    Ok(())
}

/// Render one record as a fixed-width table row.
pub fn format_row(record: &BlockRecord) -> String {
    format!(
        "{:>10}  {:<18} {:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        record.block_num,
        truncate_id(&record.partial_block_id, 18),
        record.transactions,
        record.net,
        record.cpu,
        record.elapsed,
        record.time,
        record.latency_ms
    )
}

fn truncate_id(id: &str, max_len: usize) -> String {
    if id.len() <= max_len {
        id.to_string()
    } else {
        format!("{}...", &id[..max_len - 3])
    }
}
