//! Generic protocol schema revisions, also the fallback for unrecognized
//! category labels.
//!
//! The tables here are the smallest of any category. 1.3.0 added the pool
//! count to usage metrics and the revenue split to pool snapshots and the
//! pool lookup. Unmatched groups take 1.3.0.

use crate::compose::{standard_bundle, token_block, BundleSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::{groups, VersionGroup};

#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Revision {
    V1_2,
    V1_3,
}

pub(crate) fn build(group: &VersionGroup) -> SchemaDefinition {
    match group.as_str() {
        groups::V1_2_0 => schema(Revision::V1_2),
        _ => schema(Revision::V1_3),
    }
}

fn spec() -> BundleSpec {
    BundleSpec {
        protocol_entity: "protocol",
        protocols_entity: None,
        pools_entity: "pools",
        pool_entity: "pool",
        pool_daily_entity: "poolDailySnapshots",
        pool_hourly_entity: "poolHourlySnapshots",
        scope_field: "pool",
        daily_order: "timestamp",
        hourly_order: "timestamp",
    }
}

fn schema(revision: Revision) -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table(revision)),
        ("poolDailySnapshots", pool_daily_table(revision)),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("poolHourlySnapshots", pool_hourly_table(revision)),
    ];
    standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(revision),
        pool_data(revision),
        pool_selection(revision),
        Vec::new(),
    )
}

fn financials_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "timestamp" => "BigInt!",
    }
}

fn usage_daily_table(revision: Revision) -> FieldTable {
    let table = field_table! {
        "id" => "ID!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyActiveUsers" => "Int!",
        "dailyTransactionCount" => "Int!",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V1_3 {
        table.with("totalPoolCount", "Int!")
    } else {
        table
    }
}

fn usage_hourly_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyActiveUsers" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "timestamp" => "BigInt!",
    }
}

fn pool_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
    };
    if revision >= Revision::V1_3 {
        table = table
            .with("cumulativeSupplySideRevenueUSD", "BigDecimal!")
            .with("dailySupplySideRevenueUSD", "BigDecimal!")
            .with("cumulativeProtocolSideRevenueUSD", "BigDecimal!")
            .with("dailyProtocolSideRevenueUSD", "BigDecimal!")
            .with("cumulativeTotalRevenueUSD", "BigDecimal!")
            .with("dailyTotalRevenueUSD", "BigDecimal!");
    }
    table
        .with("inputTokenBalances", "[BigInt!]!")
        .with("outputTokenSupply", "BigInt")
        .with("outputTokenPriceUSD", "BigDecimal")
        .with("stakedOutputTokenAmount", "BigInt")
        .with("rewardTokenEmissionsAmount", "[BigInt!]")
        .with("rewardTokenEmissionsUSD", "[BigDecimal!]")
        .with("timestamp", "BigInt!")
}

fn pool_hourly_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
    };
    if revision >= Revision::V1_3 {
        table = table
            .with("cumulativeSupplySideRevenueUSD", "BigDecimal!")
            .with("hourlySupplySideRevenueUSD", "BigDecimal!")
            .with("cumulativeProtocolSideRevenueUSD", "BigDecimal!")
            .with("hourlyProtocolSideRevenueUSD", "BigDecimal!")
            .with("cumulativeTotalRevenueUSD", "BigDecimal!")
            .with("hourlyTotalRevenueUSD", "BigDecimal!");
    }
    table
        .with("inputTokenBalances", "[BigInt!]!")
        .with("outputTokenSupply", "BigInt")
        .with("outputTokenPriceUSD", "BigDecimal")
        .with("stakedOutputTokenAmount", "BigInt")
        .with("rewardTokenEmissionsAmount", "[BigInt!]")
        .with("rewardTokenEmissionsUSD", "[BigDecimal!]")
        .with("timestamp", "BigInt!")
}

fn protocol_fields(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "name" => "String!",
        "slug" => "String!",
        "schemaVersion" => "String!",
        "subgraphVersion" => "String!",
        "methodologyVersion" => "String!",
        "network" => "Network!",
        "type" => "ProtocolType!",
        "totalValueLockedUSD" => "BigDecimal!",
    };
    if revision >= Revision::V1_3 {
        table = table.with("totalPoolCount", "Int!");
    }
    table
        .with("cumulativeSupplySideRevenueUSD", "BigDecimal!")
        .with("cumulativeProtocolSideRevenueUSD", "BigDecimal!")
        .with("cumulativeTotalRevenueUSD", "BigDecimal!")
        .with("cumulativeUniqueUsers", "Int!")
}

fn pool_data(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "name" => "String",
        "symbol" => "String",
    };
    if revision >= Revision::V1_3 {
        table = table.with("fees", "[poolFee!]!");
    }
    table = table
        .with("inputTokens", "[Token!]!")
        .with("outputToken", "Token");
    if revision >= Revision::V1_3 {
        table = table.with("isSingleSided", "Boolean!");
    }
    table = table
        .with("rewardTokens", "[RewardToken!]")
        .with("totalValueLockedUSD", "BigDecimal!");
    if revision >= Revision::V1_3 {
        table = table
            .with("cumulativeSupplySideRevenueUSD", "BigDecimal!")
            .with("cumulativeProtocolSideRevenueUSD", "BigDecimal!")
            .with("cumulativeTotalRevenueUSD", "BigDecimal!");
    }
    table
        .with("inputTokenBalances", "[BigInt!]!")
        .with("outputTokenSupply", "BigInt")
        .with("outputTokenPriceUSD", "BigDecimal")
        .with("stakedOutputTokenAmount", "BigInt")
        .with("rewardTokenEmissionsAmount", "[BigInt!]")
        .with("rewardTokenEmissionsUSD", "[BigDecimal!]")
}

// Reward tokens here select no `type` leaf; the generic schema never
// declared one.
fn pool_selection(revision: Revision) -> Selection {
    let mut selection = Selection::field("pool")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name", "symbol"])
        .select(token_block("inputTokens"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id"])
                .select(token_block("token")),
        )
        .leaves(["totalValueLockedUSD"]);
    if revision >= Revision::V1_3 {
        selection = selection.leaves([
            "cumulativeSupplySideRevenueUSD",
            "cumulativeProtocolSideRevenueUSD",
            "cumulativeTotalRevenueUSD",
        ]);
    }
    selection.leaves([
        "inputTokenBalances",
        "outputTokenSupply",
        "outputTokenPriceUSD",
        "stakedOutputTokenAmount",
        "rewardTokenEmissionsAmount",
        "rewardTokenEmissionsUSD",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SchemaVersion;

    #[test]
    fn test_pool_count_arrives_at_1_3_0() {
        let v12 = build(&SchemaVersion::new("1.2.0").group());
        let v13 = build(&SchemaVersion::new("1.3.1").group());
        assert!(!v12
            .entity_fields("usageMetricsDailySnapshots")
            .is_some_and(|t| t.contains("totalPoolCount")));
        assert!(v13
            .entity_fields("usageMetricsDailySnapshots")
            .is_some_and(|t| t.contains("totalPoolCount")));
        assert!(v13.protocol_fields.contains("totalPoolCount"));
    }

    #[test]
    fn test_no_plural_protocol_block_or_events() {
        let bundle = build(&SchemaVersion::new("1.3.0").group());
        assert!(bundle.events.is_empty());
        assert!(bundle
            .protocol_table_query
            .contains("protocol(id: $protocolId)"));
        assert!(bundle.pools_query.starts_with("query Data { pools(first: 100"));
    }

    #[test]
    fn test_revenue_split_reaches_pool_lookup_at_1_3_0() {
        let v12 = build(&SchemaVersion::new("1.2.3").group());
        let v13 = build(&SchemaVersion::new("1.3.0").group());
        assert!(!v12.query.contains("cumulativeSupplySideRevenueUSD"));
        assert!(v13.query.contains("cumulativeSupplySideRevenueUSD"));
    }
}
