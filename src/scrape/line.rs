//! Single-line classification of "Received block" log records.
//!
//! A line is first matched against the outer announcement pattern. The rest
//! of the line after the transaction count (the trailer) is then re-scanned
//! to decide which log format version wrote it:
//!
//! ```text
//! Received block 0000000a1b2c... #10 @ ... trxs: 7 net: 10, cpu: 20, elapsed: 30, time: 40, latency: -5 ms   <- v3
//! Received block 0000000a1b2c... #10 @ ... trxs: 7 latency: 12 ms                                          <- v2
//! ```

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::chain::BlockRecord;

/// Result of classifying one log line that announced a received block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFormat {
    /// Current format: resource usage and latency.
    V3(BlockRecord),
    /// Legacy format: latency only, resource fields recorded as zero.
    V2(BlockRecord),
    /// The announcement matched but the trailer is in neither known format.
    Unrecognized { trailer: String },
}

impl LineFormat {
    /// The parsed record, if the line was in a known format.
    pub fn into_record(self) -> Option<BlockRecord> {
        match self {
            LineFormat::V3(record) | LineFormat::V2(record) => Some(record),
            LineFormat::Unrecognized { .. } => None,
        }
    }

    pub fn version_name(&self) -> &'static str {
        match self {
            LineFormat::V3(_) => "v3",
            LineFormat::V2(_) => "v2",
            LineFormat::Unrecognized { .. } => "unrecognized",
        }
    }
}

fn announcement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Received block ([0-9a-fA-F]*).* #(\d+) .*trxs: (\d+)(.*)")
            .expect("announcement pattern is valid")
    })
}

fn v3_trailer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"net: (\d+), cpu: (\d+), elapsed: (\d+), time: (\d+), latency: (-?\d+) ms")
            .expect("v3 trailer pattern is valid")
    })
}

fn v2_trailer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"latency: (-?\d+) ms").expect("v2 trailer pattern is valid"))
}

/// Classify a log line.
///
/// Returns `None` when the line is not a "Received block" announcement at
/// all; such lines carry no data and are skipped by the scraper.
pub fn classify_line(line: &str) -> Option<LineFormat> {
    let caps = announcement_pattern().captures(line)?;

    let partial_block_id = caps[1].to_string();
    let trailer = &caps[4];

    let (block_num, transactions) = match (number(&caps, 2), number(&caps, 3)) {
        (Some(block_num), Some(transactions)) => (block_num, transactions),
        _ => {
            return Some(LineFormat::Unrecognized {
                trailer: trailer.to_string(),
            })
        }
    };

    if let Some(v3) = v3_trailer_pattern().captures(trailer) {
        if let (Some(net), Some(cpu), Some(elapsed), Some(time), Some(latency_ms)) = (
            number(&v3, 1),
            number(&v3, 2),
            number(&v3, 3),
            number(&v3, 4),
            signed(&v3, 5),
        ) {
            return Some(LineFormat::V3(BlockRecord {
                partial_block_id,
                block_num,
                transactions,
                net,
                cpu,
                elapsed,
                time,
                latency_ms,
            }));
        }
    } else if let Some(latency_ms) = v2_trailer_pattern()
        .captures(trailer)
        .and_then(|v2| signed(&v2, 1))
    {
        return Some(LineFormat::V2(BlockRecord {
            partial_block_id,
            block_num,
            transactions,
            net: 0,
            cpu: 0,
            elapsed: 0,
            time: 0,
            latency_ms,
        }));
    }

    Some(LineFormat::Unrecognized {
        trailer: trailer.to_string(),
    })
}

// Out-of-range digits make the line unusable rather than silently wrapping.
fn number(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}

fn signed(caps: &Captures<'_>, group: usize) -> Option<i64> {
    caps.get(group)?.as_str().parse().ok()
}
