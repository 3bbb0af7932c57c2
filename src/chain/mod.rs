//! Block records and the chain-level aggregate built from them.
//!
//! # Structure
//!
//! - `types` - [`BlockRecord`] and [`ChainTotals`]
//! - [`ChainAggregate`] - the record sequence plus totals over a block range
//!
//! An aggregate is built once from a finished record sequence and its block
//! bounds. Totals are computed at construction and the bounds cannot change
//! afterwards, so the totals always equal the sum over in-range records.

mod types;

pub use types::{BlockRecord, ChainTotals};

use std::fmt;

/// Block number used as the start of the in-scope range when none is given.
pub const DEFAULT_START_BLOCK: u64 = 2;

/// Full record sequence of one analyzed log plus in-range totals.
#[derive(Debug, Clone)]
pub struct ChainAggregate {
    records: Vec<BlockRecord>,
    start_block: Option<u64>,
    cease_block: Option<u64>,
    totals: ChainTotals,
}

impl ChainAggregate {
    /// Build an aggregate, totalling every record whose block number lies in
    /// `[start_block, cease_block]`.
    ///
    /// An unset bound leaves that side of the range open.
    pub fn new(
        records: Vec<BlockRecord>,
        start_block: Option<u64>,
        cease_block: Option<u64>,
    ) -> Self {
        let totals = records
            .iter()
            .filter(|r| in_range(r.block_num, start_block, cease_block))
            .fold(ChainTotals::default(), |mut acc, r| {
                acc.add(r);
                acc
            });

        Self {
            records,
            start_block,
            cease_block,
            totals,
        }
    }

    /// Records in the order they appeared in the log.
    pub fn records(&self) -> &[BlockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn start_block(&self) -> Option<u64> {
        self.start_block
    }

    pub fn cease_block(&self) -> Option<u64> {
        self.cease_block
    }

    pub fn totals(&self) -> &ChainTotals {
        &self.totals
    }

    /// Check whether a block number falls inside this aggregate's range.
    pub fn contains_block(&self, block_num: u64) -> bool {
        in_range(block_num, self.start_block, self.cease_block)
    }

    /// Number of blocks in `[start_block, cease_block]`, if both are set.
    pub fn block_span(&self) -> Option<u64> {
        match (self.start_block, self.cease_block) {
            (Some(start), Some(cease)) if cease >= start => Some(cease - start + 1),
            _ => None,
        }
    }

    /// Average net usage per in-range block.
    pub fn average_net(&self) -> Option<f64> {
        self.block_span()
            .map(|span| self.totals.net as f64 / span as f64)
    }
}

fn in_range(block_num: u64, start: Option<u64>, cease: Option<u64>) -> bool {
    start.map_or(true, |s| block_num >= s) && cease.map_or(true, |c| block_num <= c)
}

/// Aggregates compare by bounds and totals; individual records are ignored.
impl PartialEq for ChainAggregate {
    fn eq(&self, other: &Self) -> bool {
        self.start_block == other.start_block
            && self.cease_block == other.cease_block
            && self.totals == other.totals
    }
}

impl Eq for ChainAggregate {}

impl fmt::Display for ChainAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting block: {}", display_bound(self.start_block))?;
        writeln!(f, "Ending block: {}", display_bound(self.cease_block))?;
        writeln!(f, "Chain transactions: {}", self.totals.transactions)?;
        writeln!(f, "Chain cpu: {}", self.totals.cpu)?;
        match self.average_net() {
            Some(avg) => writeln!(f, "Chain net: {:.2}", avg)?,
            None => writeln!(f, "Chain net: n/a")?,
        }
        writeln!(f, "Chain elapsed: {}", self.totals.elapsed)?;
        writeln!(f, "Chain time: {}", self.totals.time)?;
        write!(f, "Chain latency: {}", self.totals.latency)
    }
}

fn display_bound(bound: Option<u64>) -> String {
    bound.map_or_else(|| "unset".to_string(), |b| b.to_string())
}
