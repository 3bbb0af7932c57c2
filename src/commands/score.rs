//! Score command handler

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use blocklog::cli::ScrapeArgs;
use blocklog::theme::current_theme;
use blocklog::{score_transfers_per_second, Config, PerformanceReport, TpsStats};

use super::{resolve_drop, scrape_log};

/// Version reported when no node binary is configured or it can't be run.
const UNKNOWN_VERSION: &str = "unknown";

/// Handle the score command.
///
/// Scrapes the log, prunes it to steady state, prints the window statistics
/// and optionally exports them as a JSON report.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    scrape: &ScrapeArgs,
    drop: Option<usize>,
    json: bool,
    export: Option<Option<PathBuf>>,
    node_bin: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let outcome = scrape_log(scrape, &config)?;
    let num_addl = resolve_drop(drop, &config);

    let stats = score_transfers_per_second(&outcome.chain, num_addl)
        .with_context(|| format!("Failed to score {}", scrape.log.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats, num_addl);
    }

    if let Some(path) = export {
        let path = path.unwrap_or_else(|| PathBuf::from(&config.report.output));
        let node_bin = node_bin.or_else(|| config.report.node_bin.as_ref().map(PathBuf::from));
        let version = node_bin
            .as_deref()
            .map_or_else(|| UNKNOWN_VERSION.to_string(), query_node_version);

        let report = PerformanceReport::new(version, invocation_args(), stats);
        report.write(&path)?;

        if !json {
            let theme = current_theme();
            println!(
                "{}",
                theme.success_text(&format!("Report written to {}", path.display()))
            );
        }
    }

    Ok(())
}

fn print_stats(stats: &TpsStats, num_addl: usize) {
    let theme = current_theme();
    println!(
        "{}",
        theme.accent_text("Steady-state throughput (transactions per 2-block window)")
    );
    for (name, value) in stats.fields() {
        println!("  {}", theme.field(name, value));
    }
    if num_addl > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!("Dropped {} extra block(s) from each end", num_addl))
        );
    }
}

/// The command line this process was started with, minus the program name.
fn invocation_args() -> String {
    std::env::args().skip(1).collect::<Vec<_>>().join(" ")
}

/// Ask a node binary for its version string.
///
/// Failures are logged and reported as "unknown"; the report is still useful
/// without a version.
pub fn query_node_version(node_bin: &Path) -> String {
    match Command::new(node_bin).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).replace('\n', "");
            if version.trim().is_empty() {
                UNKNOWN_VERSION.to_string()
            } else {
                version.trim().to_string()
            }
        }
        Ok(output) => {
            tracing::warn!(
                bin = %node_bin.display(),
                status = %output.status,
                "node binary exited with an error for --version"
            );
            UNKNOWN_VERSION.to_string()
        }
        Err(e) => {
            tracing::warn!(bin = %node_bin.display(), error = %e, "failed to run node binary");
            UNKNOWN_VERSION.to_string()
        }
    }
}
