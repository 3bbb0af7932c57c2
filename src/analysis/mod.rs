//! Steady-state analysis of a scraped chain.
//!
//! # Module Structure
//!
//! - [`prune`] - isolating the steady-state block range of a benchmark run
//! - [`score`] - windowed transaction statistics over that range
//! - `error` - [`AnalysisError`], shared by both steps

mod error;
pub mod prune;
pub mod score;

pub use error::AnalysisError;
pub use prune::{prune_to_steady_state, steady_state_range, PruneRange};
pub use score::{score_transfers_per_second, score_windows, TpsStats};
