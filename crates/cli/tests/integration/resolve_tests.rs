//! Resolve command output tests.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{dash_cmd, stdout_of};

#[test]
fn test_resolve_table_summary() {
    dash_cmd()
        .args(["resolve", "exchange", "3.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXCHANGE @ 3.0.1 (resolved as 3.0.0)"))
        .stdout(predicate::str::contains("financialsDailySnapshots"))
        .stdout(predicate::str::contains("liquidityPoolDailySnapshots"))
        .stdout(predicate::str::contains("swaps"));
}

#[test]
fn test_resolve_json_is_full_bundle() {
    let out = stdout_of(dash_cmd().args(["resolve", "lending", "3.0.0", "--format", "json"]));
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["entities"][0], "financialsDailySnapshots");
    assert!(value["query"]
        .as_str()
        .unwrap()
        .starts_with("query Data($poolId: String, $protocolId: String)"));
    assert!(value["positions_query"].is_string());
}

#[test]
fn test_resolve_single_query_prints_raw_document() {
    let out = stdout_of(dash_cmd().args(["resolve", "yield", "1.3.0", "--query", "pools"]));
    assert_eq!(
        out.trim(),
        "query Data { vaults(first: 100, orderBy: totalValueLockedUSD, orderDirection: desc) { id name } }"
    );
}

#[test]
fn test_resolve_single_query_json_wraps_document() {
    let out = stdout_of(dash_cmd().args([
        "resolve",
        "generic",
        "1.2.0",
        "--query",
        "financials",
        "--format",
        "json",
    ]));
    let value: Value = serde_json::from_str(&out).unwrap();
    assert!(value["query"]
        .as_str()
        .unwrap()
        .contains("financialsDailySnapshots"));
}

#[test]
fn test_resolve_is_deterministic_across_runs() {
    let first =
        stdout_of(dash_cmd().args(["resolve", "perpetual", "1.0.0", "--query", "daily-usage"]));
    let second =
        stdout_of(dash_cmd().args(["resolve", "perpetual", "1.0.0", "--query", "daily-usage"]));
    assert_eq!(first, second);
    assert!(first.contains("dailylongPositionCount"));
}
