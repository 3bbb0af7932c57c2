//! Log scraping errors.

use std::path::PathBuf;

/// Errors that can occur while scraping block records from a log.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("No block records found in log. Expected lines containing 'Received block ... trxs: N'.")]
    NoData,

    #[error("Unknown log format on line {line_number}: {line}")]
    UnrecognizedFormat { line_number: usize, line: String },

    #[error("Start block {start_block} is after cease block {cease_block}")]
    InvalidBounds { start_block: u64, cease_block: u64 },
}
