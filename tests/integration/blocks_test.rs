//! Tests for `blocklog blocks`

use predicates::prelude::*;

use super::helpers::{fixture_path, TestHome};

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn blocks_json_lists_every_record() {
    let home = TestHome::new();
    let output = home
        .cmd()
        .args(["blocks", "--json"])
        .arg(fixture_path("steady_state.log"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let blocks = json_lines(&output.stdout);
    assert_eq!(blocks.len(), 10);
    assert_eq!(blocks[0]["blockNum"], 1);
    assert_eq!(blocks[2]["partialBlockId"], "00000003a1b2c3d4");
    assert_eq!(blocks[2]["transactions"], 5);
    assert_eq!(blocks[2]["latency"], 3);
}

#[test]
fn steady_state_json_matches_pruned_window() {
    let home = TestHome::new();
    let output = home
        .cmd()
        .args(["blocks", "--steady-state", "--json"])
        .arg(fixture_path("steady_state.log"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let nums: Vec<u64> = json_lines(&output.stdout)
        .iter()
        .map(|b| b["blockNum"].as_u64().unwrap())
        .collect();
    assert_eq!(nums, vec![3, 4, 5, 6, 7, 8]);
}

#[test]
fn steady_state_honours_drop() {
    let home = TestHome::new();
    home.cmd()
        .args(["blocks", "-s", "-d", "2"])
        .arg(fixture_path("steady_state.log"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 block(s)"));
}

#[test]
fn start_block_changes_steady_state() {
    let home = TestHome::new();
    let output = home
        .cmd()
        .args(["blocks", "-s", "--json", "--start-block", "5"])
        .arg(fixture_path("steady_state.log"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let first = &json_lines(&output.stdout)[0];
    assert_eq!(first["blockNum"], 5);
}

#[test]
fn drop_without_steady_state_is_rejected() {
    let home = TestHome::new();
    home.cmd()
        .args(["blocks", "--drop", "2"])
        .arg(fixture_path("steady_state.log"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--steady-state"));
}
