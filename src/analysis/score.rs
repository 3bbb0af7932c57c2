//! Throughput scoring over two-block windows.
//!
//! Every pair of consecutive blocks forms one window, so four blocks
//! `[a, b, c, d]` give the windows `(a, b)`, `(b, c)`, `(c, d)`. The window's
//! transaction count is the sum over both blocks; a window counts as empty
//! when its *first* block carried no transactions.

use serde::{Deserialize, Serialize};

use crate::chain::{BlockRecord, ChainAggregate};

use super::{prune_to_steady_state, AnalysisError};

/// Distribution of transactions per two-block window.
///
/// Serializes as a flat object of integer fields, which is the `TPS` entry of
/// an exported report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TpsStats {
    pub min: u64,
    pub max: u64,
    /// Mean, truncated toward zero
    pub avg: u64,
    /// Population standard deviation, truncated toward zero
    pub sigma: u64,
    /// Windows whose first block was empty
    pub empty_blocks: u64,
    /// Steady-state blocks the windows were built from
    pub num_blocks: u64,
}

impl TpsStats {
    /// Field names and values in report order.
    pub fn fields(&self) -> [(&'static str, u64); 6] {
        [
            ("min", self.min),
            ("max", self.max),
            ("avg", self.avg),
            ("sigma", self.sigma),
            ("emptyBlocks", self.empty_blocks),
            ("numBlocks", self.num_blocks),
        ]
    }
}

/// Score a steady-state block sequence.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientRecords`] when fewer than two blocks
/// are given, since no window can be formed, and [`AnalysisError::Overflow`]
/// when a window's transaction count does not fit in a `u64`.
pub fn score_windows(blocks: &[BlockRecord]) -> Result<TpsStats, AnalysisError> {
    if blocks.len() < 2 {
        return Err(AnalysisError::InsufficientRecords {
            found: blocks.len(),
        });
    }

    let sums = blocks
        .windows(2)
        .map(|pair| {
            pair[0]
                .transactions
                .checked_add(pair[1].transactions)
                .ok_or(AnalysisError::Overflow {
                    block_num: pair[0].block_num,
                })
        })
        .collect::<Result<Vec<u64>, _>>()?;
    let empty_blocks = blocks
        .windows(2)
        .filter(|pair| pair[0].is_empty())
        .count() as u64;

    let count = sums.len() as u128;
    let total: u128 = sums.iter().map(|&s| u128::from(s)).sum();
    let mean = total as f64 / count as f64;
    let variance = sums
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / count as f64;

    Ok(TpsStats {
        min: sums.iter().copied().min().unwrap_or(0),
        max: sums.iter().copied().max().unwrap_or(0),
        // The mean of u64 sums always fits back into u64.
        avg: u64::try_from(total / count).unwrap_or(u64::MAX),
        sigma: variance.sqrt() as u64,
        empty_blocks,
        num_blocks: blocks.len() as u64,
    })
}

/// Prune a chain to its steady state and score it.
pub fn score_transfers_per_second(
    chain: &ChainAggregate,
    num_addl_blocks_to_drop: usize,
) -> Result<TpsStats, AnalysisError> {
    let steady = prune_to_steady_state(chain, num_addl_blocks_to_drop)?;
    score_windows(steady)
}
