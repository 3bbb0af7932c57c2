//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use blocklog::BlockRecord;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// A current-format block line.
pub fn v3_line(block_num: u64, trxs: u64) -> String {
    format!(
        "info  2023-01-10T17:24:34.006 nodeos    controller.cpp:3087           log_irreversible     ] Received block {:08x}0f0f... #{} @ 2023-01-10T17:24:34.000 signed by eosio [trxs: {}, lib: 0, conf: 0, net: {}, cpu: {}, elapsed: 1, time: 2, latency: 5 ms]\n",
        block_num,
        block_num,
        trxs,
        trxs * 8,
        trxs * 100
    )
}

/// A legacy block line that only reports latency.
pub fn v2_line(block_num: u64, trxs: u64) -> String {
    format!(
        "info  2021-03-01T10:00:00.000 nodeos    producer_plugin.cpp:389       on_incoming_block    ] Received block {:08x}0f0f... #{} @ 2021-03-01T10:00:00.000 signed by eosio [trxs: {}, lib: 0, conf: 0, latency: -2 ms]\n",
        block_num, block_num, trxs
    )
}

/// A block line whose trailer matches neither known format.
pub fn unknown_line(block_num: u64) -> String {
    format!(
        "info  2024-01-01T00:00:00.000 nodeos    controller.cpp:3087 Received block {:08x}0f0f... #{} @ 2024-01-01T00:00:00.000 signed by eosio [trxs: 1, lib: 0, cpu_usage_us: 12]\n",
        block_num, block_num
    )
}

/// A log of v3 lines for blocks 1..=trxs.len() with the given transaction counts.
pub fn v3_log(trxs: &[u64]) -> String {
    trxs.iter()
        .enumerate()
        .map(|(i, &t)| v3_line(i as u64 + 1, t))
        .collect()
}

/// Build a record directly.
pub fn record(block_num: u64, transactions: u64) -> BlockRecord {
    BlockRecord {
        partial_block_id: format!("{:08x}", block_num),
        block_num,
        transactions,
        net: 0,
        cpu: 0,
        elapsed: 0,
        time: 0,
        latency_ms: 0,
    }
}

/// Records for blocks 1..=trxs.len().
pub fn records(trxs: &[u64]) -> Vec<BlockRecord> {
    trxs.iter()
        .enumerate()
        .map(|(i, &t)| record(i as u64 + 1, t))
        .collect()
}
