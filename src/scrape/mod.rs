//! Scraping block records out of node log text.
//!
//! The scraper makes a single sequential pass over the log. Every line that
//! announces a received block is classified by [`classify_line`]; lines in a
//! known format become [`BlockRecord`]s, lines in an unknown format are
//! reported and left out.
//!
//! Aggregation happens in two phases so that default bounds are never derived
//! from a partially read log:
//!
//! 1. Read and classify every line.
//! 2. Resolve `start_block` / `cease_block` (defaults: `2` and the number of
//!    announcement lines plus one), then build the [`ChainAggregate`], which
//!    totals the in-range records.
//!
//! # Example
//!
//! ```
//! use blocklog::scrape::{scrape_str, ScrapeOptions};
//!
//! let log = "\
//! Received block 00000002aa #2 @ t trxs: 0 latency: 3 ms
//! Received block 00000003bb #3 @ t trxs: 5 net: 1, cpu: 2, elapsed: 3, time: 4, latency: -1 ms
//! ";
//! let outcome = scrape_str(log, &ScrapeOptions::default())?;
//! assert_eq!(outcome.chain.len(), 2);
//! assert_eq!(outcome.chain.totals().transactions, 5);
//! # Ok::<(), blocklog::scrape::ScrapeError>(())
//! ```

mod error;
mod line;
mod reader;

pub use error::ScrapeError;
pub use line::{classify_line, LineFormat};
pub use reader::{is_gzip_path, open_log};

use std::io::BufRead;
use std::path::Path;

use crate::chain::{BlockRecord, ChainAggregate, DEFAULT_START_BLOCK};

/// Caller-supplied scraping behavior.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    /// First block counted in the chain totals (default: 2)
    pub start_block: Option<u64>,
    /// Last block counted in the chain totals (default: announcements + 1)
    pub cease_block: Option<u64>,
    /// Fail on the first line in an unknown format instead of skipping it
    pub strict: bool,
}

impl ScrapeOptions {
    /// Reject a range whose explicit start lies after its explicit cease.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        match (self.start_block, self.cease_block) {
            (Some(start), Some(cease)) => check_bounds(start, cease),
            _ => Ok(()),
        }
    }
}

fn check_bounds(start_block: u64, cease_block: u64) -> Result<(), ScrapeError> {
    if start_block > cease_block {
        return Err(ScrapeError::InvalidBounds {
            start_block,
            cease_block,
        });
    }
    Ok(())
}

/// An announcement line whose trailer matched no known format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine {
    /// 1-based line number in the log
    pub line_number: usize,
    pub line: String,
}

/// Everything learned from one pass over a log.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub chain: ChainAggregate,
    /// Announcement lines that were skipped because of their format
    pub unrecognized: Vec<UnrecognizedLine>,
    pub lines_read: usize,
    pub bytes_read: u64,
}

/// Scrape a log file, decompressing `.gz` files transparently.
///
/// The file is closed before this returns, whether or not scraping succeeds.
pub fn scrape_path(path: &Path, options: &ScrapeOptions) -> Result<ScrapeOutcome, ScrapeError> {
    let reader = open_log(path)?;
    scrape_reader(reader, options)
}

/// Scrape log text held in memory.
pub fn scrape_str(text: &str, options: &ScrapeOptions) -> Result<ScrapeOutcome, ScrapeError> {
    scrape_reader(text.as_bytes(), options)
}

/// Scrape any buffered reader in one sequential pass.
///
/// Lines that are not valid UTF-8 are decoded lossily; they can still match
/// if the interesting part of the line is intact.
pub fn scrape_reader<R: BufRead>(
    mut reader: R,
    options: &ScrapeOptions,
) -> Result<ScrapeOutcome, ScrapeError> {
    options.validate()?;

    let mut records: Vec<BlockRecord> = Vec::new();
    let mut unrecognized = Vec::new();
    let mut announcements = 0usize;
    let mut lines_read = 0usize;
    let mut bytes_read = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ScrapeError::Read {
                line_number: lines_read + 1,
                source,
            })?;
        if n == 0 {
            break;
        }
        lines_read += 1;
        bytes_read += n as u64;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);

        let Some(format) = classify_line(line) else {
            continue;
        };
        announcements += 1;

        match format {
            LineFormat::V3(record) | LineFormat::V2(record) => records.push(record),
            LineFormat::Unrecognized { trailer } => {
                if options.strict {
                    return Err(ScrapeError::UnrecognizedFormat {
                        line_number: lines_read,
                        line: line.to_string(),
                    });
                }
                tracing::warn!(
                    line_number = lines_read,
                    trailer = %trailer.trim(),
                    "Unknown log format, skipping block line"
                );
                unrecognized.push(UnrecognizedLine {
                    line_number: lines_read,
                    line: line.to_string(),
                });
            }
        }
    }

    if records.is_empty() {
        return Err(ScrapeError::NoData);
    }

    let start_block = options.start_block.unwrap_or(DEFAULT_START_BLOCK);
    let cease_block = options.cease_block.unwrap_or(announcements as u64 + 1);
    check_bounds(start_block, cease_block)?;

    tracing::debug!(
        lines_read,
        announcements,
        records = records.len(),
        skipped = unrecognized.len(),
        start_block,
        cease_block,
        "scraped block log"
    );

    Ok(ScrapeOutcome {
        chain: ChainAggregate::new(records, Some(start_block), Some(cease_block)),
        unrecognized,
        lines_read,
        bytes_read,
    })
}
