//! Resolution tests across the full category and version matrix.

use strum::IntoEnumIterator;
use subgraph_dash_schema::{resolve_schema, ProtocolCategory, SchemaVersion};

const SUPPORTED_VERSIONS: &[(ProtocolCategory, &[&str])] = &[
    (ProtocolCategory::Exchange, &["1.3.0", "2.0.0", "3.0.0"]),
    (ProtocolCategory::Lending, &["1.2.0", "2.0.0", "3.0.0"]),
    (ProtocolCategory::Yield, &["1.2.0", "1.3.0"]),
    (ProtocolCategory::Bridge, &["1.1.0"]),
    (ProtocolCategory::Perpetual, &["1.0.0", "1.1.0"]),
    (ProtocolCategory::Options, &["1.1.0", "1.3.0"]),
    (ProtocolCategory::Generic, &["1.2.0", "1.3.0"]),
];

#[test]
fn test_resolution_is_byte_identical_across_calls() {
    for (category, versions) in SUPPORTED_VERSIONS {
        for raw in *versions {
            let version = SchemaVersion::new(*raw);
            let a = resolve_schema(*category, &version);
            let b = resolve_schema(*category, &version);
            assert_eq!(a.query, b.query, "{category:?} {raw}");
            assert_eq!(a.financials_query, b.financials_query);
            assert_eq!(a.daily_usage_query, b.daily_usage_query);
            assert_eq!(a.hourly_usage_query, b.hourly_usage_query);
            assert_eq!(a.protocol_table_query, b.protocol_table_query);
            assert_eq!(a.pools_query, b.pools_query);
            assert_eq!(a.pool_timeseries_query, b.pool_timeseries_query);
            assert_eq!(a.positions_query, b.positions_query);
        }
    }
}

#[test]
fn test_patch_revisions_resolve_to_the_group_mapping() {
    for (category, versions) in SUPPORTED_VERSIONS {
        for raw in *versions {
            let exact = resolve_schema(*category, &SchemaVersion::new(*raw));
            let patched = format!("{}7", &raw[..raw.len() - 1]);
            let bumped = resolve_schema(*category, &SchemaVersion::new(patched));
            assert_eq!(exact.query, bumped.query, "{category:?} {raw}");
        }
    }
}

#[test]
fn test_exchange_liquidity_fields_arrive_at_3_0_0() {
    let v30 = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("3.0.3"));
    assert!(v30.protocol_fields.contains("totalLiquidityUSD"));
    assert!(v30.protocol_fields.contains("activeLiquidityUSD"));
    assert!(v30.protocol_fields.contains("cumulativeUniqueLPs"));

    let v13 = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("1.3.0"));
    assert!(!v13.protocol_fields.contains("totalLiquidityUSD"));
    assert!(!v13.protocol_fields.contains("activeLiquidityUSD"));
    assert!(!v13.protocol_fields.contains("cumulativeUniqueLPs"));
}

#[test]
fn test_bridge_unknown_group_matches_default_exactly() {
    let default = resolve_schema(ProtocolCategory::Bridge, &SchemaVersion::new("1.1.0"));
    let unknown = resolve_schema(ProtocolCategory::Bridge, &SchemaVersion::new("9.9.0"));
    assert_eq!(default.query, unknown.query);
    assert_eq!(default.financials_query, unknown.financials_query);
    assert_eq!(default.daily_usage_query, unknown.daily_usage_query);
    assert_eq!(default.hourly_usage_query, unknown.hourly_usage_query);
    assert_eq!(default.protocol_table_query, unknown.protocol_table_query);
    assert_eq!(default.pools_query, unknown.pools_query);
    assert_eq!(default.pool_timeseries_query, unknown.pool_timeseries_query);
    assert_eq!(default.entities, unknown.entities);
}

#[test]
fn test_every_category_resolves_something_for_every_version() {
    // Unknown groups never panic; each category lands in its default arm.
    for category in ProtocolCategory::iter() {
        let schema = resolve_schema(category, &SchemaVersion::new("42.0.0"));
        assert!(!schema.entities.is_empty());
        assert!(schema.query.starts_with("query Data"));
    }
}

#[test]
fn test_field_order_round_trips_into_fragments() {
    for (category, versions) in SUPPORTED_VERSIONS {
        for raw in *versions {
            let schema = resolve_schema(*category, &SchemaVersion::new(*raw));
            for (entity, table) in &schema.entities_data {
                let fragment = [
                    &schema.financials_query,
                    &schema.daily_usage_query,
                    &schema.hourly_usage_query,
                    &schema.pool_timeseries_query,
                ]
                .into_iter()
                .find(|doc| doc.contains(entity))
                .unwrap_or_else(|| panic!("{category:?} {raw}: no document selects {entity}"));

                // Every field appears, in table order.
                let mut cursor = fragment.find(entity).expect("entity start");
                for name in table.names() {
                    let at = fragment[cursor..]
                        .find(name)
                        .unwrap_or_else(|| panic!("{category:?} {raw} {entity}: {name} missing or out of order"));
                    cursor += at;
                }
            }
        }
    }
}

#[test]
fn test_positions_queries_exist_only_where_tracked() {
    let exchange_v2 = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("2.0.0"));
    assert!(exchange_v2.positions_query.is_some());
    let exchange_v13 = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("1.3.0"));
    assert!(exchange_v13.positions_query.is_none());

    let lending_v3 = resolve_schema(ProtocolCategory::Lending, &SchemaVersion::new("3.0.0"));
    assert!(lending_v3.positions_query.is_some());

    for category in [
        ProtocolCategory::Yield,
        ProtocolCategory::Bridge,
        ProtocolCategory::Perpetual,
        ProtocolCategory::Options,
        ProtocolCategory::Generic,
    ] {
        let schema = resolve_schema(category, &SchemaVersion::new("3.0.0"));
        assert!(schema.positions_query.is_none(), "{category:?}");
    }
}

#[test]
fn test_schema_definition_serializes() {
    let schema = resolve_schema(ProtocolCategory::Yield, &SchemaVersion::new("1.3.0"));
    let value = serde_json::to_value(&schema).expect("serialize");
    assert_eq!(value["entities"][0], "financialsDailySnapshots");
    assert!(value["query"].as_str().is_some_and(|q| q.starts_with("query Data")));
}
