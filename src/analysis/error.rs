//! Errors raised while pruning and scoring a chain.

/// Failure modes of steady-state analysis.
///
/// Each variant describes why the data cannot support a meaningful result;
/// none of them is recovered with default values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The chain holds no block records at all.
    #[error("Chain has no block records to analyze")]
    EmptyChain,

    /// The blocks trimmed from both ends cover the whole record sequence.
    #[error(
        "Not enough blocks for steady-state analysis: trimming {front} from the front and {back} from the back leaves nothing of {len} blocks"
    )]
    InvalidPruneBounds { front: usize, back: usize, len: usize },

    /// Scoring needs at least two blocks to form a window.
    #[error("Need at least 2 steady-state blocks to score throughput, found {found}")]
    InsufficientRecords { found: usize },

    /// Two consecutive blocks carry more transactions than a `u64` holds.
    #[error("Transaction count of the window starting at block {block_num} overflows")]
    Overflow { block_num: u64 },
}
