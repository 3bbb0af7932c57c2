//! Unit tests for steady-state pruning and throughput scoring

use blocklog::analysis::prune::steady_state_range;
use blocklog::{
    prune_to_steady_state, score_transfers_per_second, scrape_path, scrape_str, AnalysisError,
    ChainAggregate, ScrapeOptions,
};

use super::helpers::{fixture_path, records, v3_log};

fn fixture_chain(name: &str) -> ChainAggregate {
    scrape_path(&fixture_path(name), &ScrapeOptions::default())
        .unwrap()
        .chain
}

#[test]
fn fixture_steady_state_drops_idle_ends() {
    let chain = fixture_chain("steady_state.log");
    let steady = prune_to_steady_state(&chain, 0).unwrap();

    let nums: Vec<u64> = steady.iter().map(|r| r.block_num).collect();
    assert_eq!(nums, vec![3, 4, 5, 6, 7, 8]);
}

#[test]
fn fixture_range_breakdown() {
    let chain = fixture_chain("steady_state.log");
    let range = steady_state_range(&chain, 0).unwrap();

    assert_eq!(range.setup, 1);
    assert_eq!(range.teardown, 0);
    assert_eq!(range.leading_empty, 1);
    assert_eq!(range.trailing_empty, 2);
    assert_eq!(range.front(), 2);
    assert_eq!(range.back(), 2);
}

#[test]
fn fixture_scores() {
    let chain = fixture_chain("steady_state.log");
    let stats = score_transfers_per_second(&chain, 0).unwrap();

    // Window sums: 15, 20, 20, 20, 20
    assert_eq!(stats.min, 15);
    assert_eq!(stats.max, 20);
    assert_eq!(stats.avg, 19);
    assert_eq!(stats.sigma, 2);
    assert_eq!(stats.empty_blocks, 0);
    assert_eq!(stats.num_blocks, 6);
}

#[test]
fn additional_drop_trims_both_ends() {
    let chain = fixture_chain("steady_state.log");
    let stats = score_transfers_per_second(&chain, 1).unwrap();

    assert_eq!(stats.min, 20);
    assert_eq!(stats.max, 20);
    assert_eq!(stats.avg, 20);
    assert_eq!(stats.sigma, 0);
    assert_eq!(stats.num_blocks, 4);
}

#[test]
fn oversized_drop_fails() {
    let chain = fixture_chain("steady_state.log");
    let err = score_transfers_per_second(&chain, 3).unwrap_err();

    assert_eq!(
        err,
        AnalysisError::InvalidPruneBounds {
            front: 5,
            back: 5,
            len: 10
        }
    );
}

#[test]
fn legacy_fixture_scores() {
    let chain = fixture_chain("legacy_v2.log");
    let stats = score_transfers_per_second(&chain, 0).unwrap();

    // Steady state is blocks 2..=4 (trxs 4, 6, 2), window sums 10 and 8.
    assert_eq!(stats.min, 8);
    assert_eq!(stats.max, 10);
    assert_eq!(stats.avg, 9);
    assert_eq!(stats.sigma, 1);
    assert_eq!(stats.num_blocks, 3);
}

#[test]
fn empty_blocks_inside_steady_state_are_counted() {
    let outcome = scrape_str(&v3_log(&[0, 0, 5, 0, 5, 0, 5, 0]), &ScrapeOptions::default()).unwrap();
    let stats = score_transfers_per_second(&outcome.chain, 0).unwrap();

    // Steady state: 5, 0, 5, 0, 5
    assert_eq!(stats.num_blocks, 5);
    assert_eq!(stats.empty_blocks, 2);
    assert_eq!(stats.min, 5);
    assert_eq!(stats.max, 5);
}

#[test]
fn all_idle_chain_cannot_be_scored() {
    let outcome = scrape_str(&v3_log(&[0, 0, 0, 0]), &ScrapeOptions::default()).unwrap();
    let err = score_transfers_per_second(&outcome.chain, 0).unwrap_err();
    // Only the final idle block survives the trim.
    assert_eq!(err, AnalysisError::InsufficientRecords { found: 1 });
}

#[test]
fn single_busy_block_is_insufficient() {
    let outcome = scrape_str(&v3_log(&[0, 0, 7, 0]), &ScrapeOptions::default()).unwrap();
    let err = score_transfers_per_second(&outcome.chain, 0).unwrap_err();
    assert_eq!(err, AnalysisError::InsufficientRecords { found: 1 });
}

#[test]
fn empty_chain_is_rejected() {
    let chain = ChainAggregate::new(Vec::new(), None, None);
    assert_eq!(
        prune_to_steady_state(&chain, 0).unwrap_err(),
        AnalysisError::EmptyChain
    );
}

#[test]
fn unbounded_chain_only_drops_empty_edges() {
    let chain = ChainAggregate::new(records(&[0, 3, 4, 0]), None, None);
    let steady = prune_to_steady_state(&chain, 0).unwrap();

    let trxs: Vec<u64> = steady.iter().map(|r| r.transactions).collect();
    assert_eq!(trxs, vec![3, 4]);
}

#[test]
fn pruning_leaves_chain_untouched() {
    let chain = fixture_chain("steady_state.log");
    let before = *chain.totals();
    let _ = prune_to_steady_state(&chain, 1).unwrap();

    assert_eq!(chain.len(), 10);
    assert_eq!(chain.totals(), &before);
}

#[test]
fn overflowing_window_is_reported() {
    let log = "Received block aa #2 x trxs: 18446744073709551615 latency: 1 ms\n\
               Received block bb #3 x trxs: 5 latency: 1 ms\n";
    let outcome = scrape_str(log, &ScrapeOptions::default()).unwrap();

    let err = score_transfers_per_second(&outcome.chain, 0).unwrap_err();
    assert_eq!(err, AnalysisError::Overflow { block_num: 2 });
}
