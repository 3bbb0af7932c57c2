//! Steady-state pruning of a chain's block records.
//!
//! A benchmark run's block log has three kinds of noise at each end, which
//! are removed in one combined slice:
//!
//! 1. Setup / teardown: blocks before `start_block` and after `cease_block`.
//!    These are index offsets computed from the first and last block numbers,
//!    so they assume the records are in block order at the edges.
//! 2. Empty blocks while load ramps up or down, directly inside the
//!    setup/teardown trim.
//! 3. A caller-chosen number of extra blocks per end, which may be only
//!    partially full while the load generator reaches steady state.
//!
//! ```text
//!  setup | leading empty | addl |  steady state  | addl | trailing empty | teardown
//! ```

use crate::chain::{BlockRecord, ChainAggregate};

use super::AnalysisError;

/// How many records each kind of trim removes from a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneRange {
    pub setup: usize,
    pub teardown: usize,
    pub leading_empty: usize,
    pub trailing_empty: usize,
    /// Extra records dropped from each end
    pub additional: usize,
}

impl PruneRange {
    /// Records removed from the front.
    pub fn front(&self) -> usize {
        self.setup
            .saturating_add(self.leading_empty)
            .saturating_add(self.additional)
    }

    /// Records removed from the back.
    pub fn back(&self) -> usize {
        self.teardown
            .saturating_add(self.trailing_empty)
            .saturating_add(self.additional)
    }
}

/// Work out which records of `chain` form its steady state.
///
/// # Errors
///
/// - [`AnalysisError::EmptyChain`] if the chain has no records.
/// - [`AnalysisError::InvalidPruneBounds`] if the trims from both ends would
///   meet or overlap. Nothing is clamped.
pub fn steady_state_range(
    chain: &ChainAggregate,
    num_addl_blocks_to_drop: usize,
) -> Result<PruneRange, AnalysisError> {
    let records = chain.records();
    let (first, last) = match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AnalysisError::EmptyChain),
    };
    let len = records.len();

    // A range that starts before the log does leaves nothing to trim.
    let setup = chain
        .start_block()
        .map_or(0, |start| to_index(start.saturating_sub(first.block_num)));
    let teardown = chain
        .cease_block()
        .map_or(0, |cease| to_index(last.block_num.saturating_sub(cease)));

    if setup.saturating_add(teardown) >= len {
        return Err(AnalysisError::InvalidPruneBounds {
            front: setup,
            back: teardown,
            len,
        });
    }

    // Index of the last record before teardown.
    let last_kept = len - teardown - 1;

    let leading_empty = count_empty(records[setup..last_kept].iter());
    let trailing_empty =
        count_empty(records[setup + leading_empty + 1..=last_kept].iter().rev());

    let range = PruneRange {
        setup,
        teardown,
        leading_empty,
        trailing_empty,
        additional: num_addl_blocks_to_drop,
    };

    if range.front().saturating_add(range.back()) >= len {
        return Err(AnalysisError::InvalidPruneBounds {
            front: range.front(),
            back: range.back(),
            len,
        });
    }

    tracing::debug!(?range, len, "computed steady-state range");
    Ok(range)
}

/// Return the steady-state slice of a chain's records.
///
/// The chain itself is left untouched.
pub fn prune_to_steady_state(
    chain: &ChainAggregate,
    num_addl_blocks_to_drop: usize,
) -> Result<&[BlockRecord], AnalysisError> {
    let range = steady_state_range(chain, num_addl_blocks_to_drop)?;
    let records = chain.records();
    Ok(&records[range.front()..records.len() - range.back()])
}

fn count_empty<'a>(records: impl Iterator<Item = &'a BlockRecord>) -> usize {
    records.take_while(|r| r.is_empty()).count()
}

fn to_index(offset: u64) -> usize {
    usize::try_from(offset).unwrap_or(usize::MAX)
}
