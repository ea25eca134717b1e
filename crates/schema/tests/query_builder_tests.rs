//! Query document structure tests for the standalone builders.

use strum::IntoEnumIterator;
use subgraph_dash_schema::{
    build_batch, build_overview, build_windowed, resolve_schema, resolve_schema_for_label,
    ProtocolCategory, SchemaVersion,
};

#[test]
fn test_label_resolution_matches_category_resolution() {
    let version = SchemaVersion::new("3.0.0");
    for (label, category) in [
        ("EXCHANGE", ProtocolCategory::Exchange),
        ("LENDING", ProtocolCategory::Lending),
        ("YIELD", ProtocolCategory::Yield),
        ("BRIDGE", ProtocolCategory::Bridge),
        ("PERPETUAL", ProtocolCategory::Perpetual),
        ("OPTION", ProtocolCategory::Options),
        ("GENERIC", ProtocolCategory::Generic),
    ] {
        let by_label = resolve_schema_for_label(label, &version);
        let by_category = resolve_schema(category, &version);
        assert_eq!(by_label.query, by_category.query, "{label}");
    }
}

#[test]
fn test_unknown_label_resolves_as_generic() {
    let version = SchemaVersion::new("1.3.0");
    let unknown = resolve_schema_for_label("NFT_MARKETPLACE", &version);
    let generic = resolve_schema(ProtocolCategory::Generic, &version);
    assert_eq!(unknown.query, generic.query);
    assert_eq!(unknown.pool_data, generic.pool_data);
}

#[test]
fn test_main_query_carries_meta_and_deployment_metadata() {
    for category in ProtocolCategory::iter() {
        let schema = resolve_schema(category, &SchemaVersion::new("1.3.0"));
        assert!(
            schema.query.contains("_meta { block { number } deployment }"),
            "{category:?}"
        );
        assert!(schema.query.contains(
            "protocols { id methodologyVersion network name type slug schemaVersion subgraphVersion }"
        ));
        assert!(schema.query.starts_with("query Data($poolId: String, $protocolId: String)"));
    }
}

#[test]
fn test_pool_timeseries_is_scoped_to_the_pool_variable() {
    let lending = resolve_schema(ProtocolCategory::Lending, &SchemaVersion::new("3.0.0"));
    assert!(lending
        .pool_timeseries_query
        .contains("where: {market: $poolId}"));

    let perpetual = resolve_schema(ProtocolCategory::Perpetual, &SchemaVersion::new("1.1.0"));
    assert!(perpetual
        .pool_timeseries_query
        .contains("orderBy: days, orderDirection: desc, where: {pool: $poolId}"));
    assert!(perpetual
        .pool_timeseries_query
        .contains("orderBy: hours, orderDirection: desc, where: {pool: $poolId}"));
}

#[test]
fn test_overview_documents_page_by_variable_only() {
    for category in ProtocolCategory::iter() {
        let page0 = build_overview(category, &SchemaVersion::new("1.3.0"), 0);
        let page3 = build_overview(category, &SchemaVersion::new("1.3.0"), 30);
        assert_eq!(page0, page3, "{category:?}");
        assert!(page0.starts_with("query Data($skipAmt: Int)"));
        assert!(page0.contains("skip: $skipAmt"));
    }
}

#[test]
fn test_batch_documents_are_version_independent() {
    for category in ProtocolCategory::iter() {
        let doc = build_batch(category);
        assert_eq!(doc.matches("rewardTokens").count(), 10, "{category:?}");
        assert!(doc.contains("pool7: "));
    }
}

#[test]
fn test_windowed_half_open_bounds_render_verbatim() {
    let doc = build_windowed(
        ProtocolCategory::Bridge,
        &SchemaVersion::new("1.1.0"),
        1_700_000_000,
        1_700_086_400,
        "financialsDailySnapshots",
    );
    assert!(doc.contains("where: {timestamp_gt: 1700000000, timestamp_lt: 1700086400}"));
    assert!(doc.contains("orderBy: timestamp, orderDirection: asc"));
    assert!(doc.contains("netVolumeUSD"));
    assert!(!doc.contains('$'));
}
