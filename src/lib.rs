//! blocklog library
//!
//! Scrapes per-block records out of a blockchain node's log, aggregates them
//! into chain totals, isolates the steady-state window of a benchmark run and
//! scores its transaction throughput.
//!
//! ```no_run
//! use std::path::Path;
//! use blocklog::{score_transfers_per_second, scrape_path, ScrapeOptions};
//!
//! let outcome = scrape_path(Path::new("stderr.txt.gz"), &ScrapeOptions::default())?;
//! let stats = score_transfers_per_second(&outcome.chain, 0)?;
//! println!("{}", outcome.chain);
//! println!("avg trxs per 2 blocks: {}", stats.avg);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod chain;
pub mod cli;
pub mod config;
pub mod report;
pub mod scrape;
pub mod theme;

pub use analysis::{
    prune_to_steady_state, score_transfers_per_second, score_windows, AnalysisError, TpsStats,
};
pub use chain::{BlockRecord, ChainAggregate, ChainTotals};
pub use config::Config;
pub use report::PerformanceReport;
pub use scrape::{scrape_path, scrape_reader, scrape_str, ScrapeError, ScrapeOptions, ScrapeOutcome};

/// Version string shown by `--version`.
///
/// Dev builds carry the git commit they were built from; builds with the
/// `release` feature show the bare package version.
pub fn version() -> &'static str {
    #[cfg(feature = "release")]
    {
        env!("CARGO_PKG_VERSION")
    }
    #[cfg(not(feature = "release"))]
    {
        concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")")
    }
}
