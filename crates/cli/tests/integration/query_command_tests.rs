//! Overview, batch, windowed, and versions command tests.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::{dash_cmd, stdout_of};

#[test]
fn test_overview_declares_skip_variable() {
    dash_cmd()
        .args(["overview", "lending", "3.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("query Data($skipAmt: Int)"))
        .stdout(predicate::str::contains("markets(first: 10, skip: $skipAmt"));
}

#[test]
fn test_batch_has_ten_slots() {
    let out = stdout_of(dash_cmd().args(["batch", "exchange"]));
    assert!(out.contains("pool1: liquidityPool(id: $pool1Id)"));
    assert!(out.contains("pool10: liquidityPool(id: $pool10Id)"));
    assert_eq!(out.matches("rewardTokens").count(), 10);
}

#[test]
fn test_windowed_inlines_bounds() {
    dash_cmd()
        .args(["windowed", "bridge", "1.1.0", "1700000000", "1700086400"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "where: {timestamp_gt: 1700000000, timestamp_lt: 1700086400}",
        ))
        .stdout(predicate::str::contains("netVolumeUSD"));
}

#[test]
fn test_windowed_accepts_entity_flag() {
    let explicit = stdout_of(dash_cmd().args([
        "windowed",
        "exchange",
        "2.0.0",
        "0",
        "1",
        "--entity",
        "liquidityPoolDailySnapshots",
    ]));
    let default = stdout_of(dash_cmd().args(["windowed", "exchange", "2.0.0", "0", "1"]));
    assert_eq!(explicit, default);
    assert!(default.contains("financialsDailySnapshots"));
}

#[test]
fn test_versions_table_lists_all_categories() {
    let out = stdout_of(dash_cmd().arg("versions"));
    for category in [
        "EXCHANGE",
        "LENDING",
        "YIELD",
        "BRIDGE",
        "PERPETUAL",
        "OPTION",
        "GENERIC",
    ] {
        assert!(out.contains(category), "{category}");
    }
}

#[test]
fn test_versions_json_round_trips() {
    let out = stdout_of(dash_cmd().args(["versions", "--format", "json"]));
    let value: Value = serde_json::from_str(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["category"], "EXCHANGE");
    assert_eq!(entries[0]["default"], "1.3.0");
}
