//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages.

use predicates::prelude::*;

use super::helpers::dash_cmd;

#[test]
fn test_help_output() {
    dash_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("subgraph-dash"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("overview"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("windowed"))
        .stdout(predicate::str::contains("versions"));
}

#[test]
fn test_resolve_help_output() {
    dash_cmd()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn test_invalid_command() {
    dash_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_resolve_missing_version() {
    dash_cmd()
        .args(["resolve", "exchange"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_category_value() {
    dash_cmd()
        .args(["resolve", "staking", "1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_category_aliases_accepted() {
    for alias in ["exchange", "dex", "EXCHANGE"] {
        dash_cmd().args(["batch", alias]).assert().success();
    }
    dash_cmd().args(["batch", "perp"]).assert().success();
    dash_cmd().args(["batch", "vaults"]).assert().success();
}

#[test]
fn test_windowed_requires_numeric_bounds() {
    dash_cmd()
        .args(["windowed", "lending", "3.0.0", "yesterday", "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_positions_query_rejected_where_untracked() {
    dash_cmd()
        .args(["resolve", "bridge", "1.1.0", "--query", "positions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not track positions"));
}
