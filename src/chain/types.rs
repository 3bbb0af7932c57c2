//! Per-block record and running totals.

use serde::{Deserialize, Serialize};

/// One "Received block" log line, normalized across log format versions.
///
/// Resource fields (`net`, `cpu`, `elapsed`, `time`) are zero for lines
/// written in the legacy format, which only carries latency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    /// Block id as printed in the log (usually truncated)
    pub partial_block_id: String,
    pub block_num: u64,
    pub transactions: u64,
    pub net: u64,
    pub cpu: u64,
    pub elapsed: u64,
    pub time: u64,
    /// Receive latency in milliseconds; negative under clock skew
    #[serde(rename = "latency")]
    pub latency_ms: i64,
}

impl BlockRecord {
    /// A block is empty when it carried no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions == 0
    }
}

/// Sums of each record field over the in-range blocks of a chain.
///
/// Totals are twice as wide as the per-record fields, so no number of
/// parsed records can overflow them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChainTotals {
    pub transactions: u128,
    pub net: u128,
    pub cpu: u128,
    pub elapsed: u128,
    pub time: u128,
    pub latency: i128,
}

impl ChainTotals {
    /// Fold one record into every total at once.
    pub(crate) fn add(&mut self, record: &BlockRecord) {
        self.transactions += u128::from(record.transactions);
        self.net += u128::from(record.net);
        self.cpu += u128::from(record.cpu);
        self.elapsed += u128::from(record.elapsed);
        self.time += u128::from(record.time);
        self.latency += i128::from(record.latency_ms);
    }
}
