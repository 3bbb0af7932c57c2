//! Tests for `blocklog config` and `blocklog completions`

use predicates::prelude::*;

use super::helpers::TestHome;

#[test]
fn config_show_prints_defaults() {
    let home = TestHome::new();
    home.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[analysis]"))
        .stdout(predicate::str::contains("output = \"data.json\""));
}

#[test]
fn config_show_reflects_file() {
    let home = TestHome::new();
    home.write_config("[analysis]\nnum_addl_blocks_to_drop = 4\n");

    home.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("num_addl_blocks_to_drop = 4"));
}

#[test]
fn config_edit_creates_default_file() {
    let home = TestHome::new();
    home.cmd()
        .args(["config", "edit"])
        .env("EDITOR", "true")
        .assert()
        .success();

    assert!(home.config_path().exists());
}

#[test]
fn completions_for_bash() {
    let home = TestHome::new();
    home.cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_blocklog()"));
}

#[test]
fn help_lists_commands() {
    let home = TestHome::new();
    home.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("blocks"));
}
