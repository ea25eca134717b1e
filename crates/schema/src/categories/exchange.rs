//! Exchange (DEX/AMM) schema revisions.
//!
//! Three supported groups. 2.0.0 introduced position tracking; 3.0.0 split
//! liquidity metrics into total/active buckets and started tracking
//! uncollected fee values and per-role unique-user counts.
//!
//! The default arm pins 1.3.0, not the latest revision. Most long-running
//! exchange deployments still report a 1.3.x schema, and moving the fallback
//! forward would select fields those deployments do not have.

use crate::compose::{event, standard_bundle, token_block, BundleSpec, EventSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Document, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::{groups, VersionGroup};

#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Revision {
    V1_3,
    V2_0,
    V3_0,
}

pub(crate) fn build(group: &VersionGroup) -> SchemaDefinition {
    match group.as_str() {
        groups::V2_0_0 => schema(Revision::V2_0),
        groups::V3_0_0 => schema(Revision::V3_0),
        // 1.3.0 and everything unrecognized.
        _ => schema(Revision::V1_3),
    }
}

fn spec() -> BundleSpec {
    BundleSpec {
        protocol_entity: "dexAmmProtocol",
        protocols_entity: Some("dexAmmProtocols"),
        pools_entity: "liquidityPools",
        pool_entity: "liquidityPool",
        pool_daily_entity: "liquidityPoolDailySnapshots",
        pool_hourly_entity: "liquidityPoolHourlySnapshots",
        scope_field: "pool",
        daily_order: "timestamp",
        hourly_order: "timestamp",
    }
}

fn schema(revision: Revision) -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table()),
        ("liquidityPoolDailySnapshots", pool_daily_table(revision)),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("liquidityPoolHourlySnapshots", pool_hourly_table(revision)),
    ];
    let mut bundle = standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(revision),
        pool_data(revision),
        pool_selection(revision),
        events(),
    );
    if revision >= Revision::V2_0 {
        bundle.positions_query = Some(positions_query());
    }
    bundle
}

fn financials_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "protocolControlledValueUSD" => "BigDecimal",
        "dailyVolumeUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "timestamp" => "BigInt!",
    }
}

fn usage_daily_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "dailyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyTransactionCount" => "Int!",
        "dailyDepositCount" => "Int!",
        "dailyWithdrawCount" => "Int!",
        "dailySwapCount" => "Int!",
        "totalPoolCount" => "Int!",
        "timestamp" => "BigInt!",
    }
}

fn usage_hourly_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "hourlyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "hourlyDepositCount" => "Int!",
        "hourlyWithdrawCount" => "Int!",
        "hourlySwapCount" => "Int!",
        "timestamp" => "BigInt!",
    }
}

fn pool_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "dailyVolumeUSD" => "BigDecimal!",
        "dailyVolumeByTokenAmount" => "[BigInt!]!",
        "dailyVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V3_0 {
        table = table
            .with("totalLiquidityUSD", "BigDecimal!")
            .with("activeLiquidityUSD", "BigDecimal!")
            .with("uncollectedProtocolSideValuesUSD", "[BigDecimal!]!")
            .with("uncollectedSupplySideValuesUSD", "[BigDecimal!]!");
    }
    table
}

fn pool_hourly_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "hourlyVolumeUSD" => "BigDecimal!",
        "hourlyVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V3_0 {
        table = table
            .with("totalLiquidityUSD", "BigDecimal!")
            .with("activeLiquidityUSD", "BigDecimal!");
    }
    table
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
        "protocolControlledValueUSD" => "BigDecimal",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeUniqueUsers" => "Int!",
        "totalPoolCount" => "Int!",
    };
    if revision >= Revision::V2_0 {
        table = table
            .with("openPositionCount", "Int!")
            .with("cumulativePositionCount", "Int!");
    }
    if revision >= Revision::V3_0 {
        table = table
            .with("totalLiquidityUSD", "BigDecimal!")
            .with("activeLiquidityUSD", "BigDecimal!")
            .with("uncollectedProtocolSideValueUSD", "BigDecimal!")
            .with("uncollectedSupplySideValueUSD", "BigDecimal!")
            .with("cumulativeUniqueLPs", "Int!")
            .with("cumulativeUniqueTraders", "Int!");
    }
    table
}

fn pool_data(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "name" => "String",
        "symbol" => "String",
        "fees" => "[LiquidityPoolFee!]!",
        "inputTokens" => "[Token!]!",
        "outputToken" => "Token",
        "isSingleSided" => "Boolean!",
        "rewardTokens" => "[RewardToken!]",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    if revision >= Revision::V2_0 {
        table = table
            .with("openPositionCount", "Int!")
            .with("cumulativePositionCount", "Int!");
    }
    if revision >= Revision::V3_0 {
        table = table
            .with("totalLiquidityUSD", "BigDecimal!")
            .with("activeLiquidityUSD", "BigDecimal!");
    }
    table
}

fn pool_selection(revision: Revision) -> Selection {
    let mut selection = Selection::field("liquidityPool")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name", "symbol", "isSingleSided"])
        .select(Selection::field("fees").leaves(["id", "feePercentage", "feeType"]))
        .select(token_block("inputTokens"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id"])
                .select(token_block("token")),
        )
        .leaves([
            "totalValueLockedUSD",
            "cumulativeVolumeUSD",
            "inputTokenBalances",
            "inputTokenWeights",
            "outputTokenSupply",
            "outputTokenPriceUSD",
            "stakedOutputTokenAmount",
            "rewardTokenEmissionsAmount",
            "rewardTokenEmissionsUSD",
        ]);
    if revision >= Revision::V2_0 {
        selection = selection.leaves(["openPositionCount", "cumulativePositionCount"]);
    }
    if revision >= Revision::V3_0 {
        selection = selection.leaves(["totalLiquidityUSD", "activeLiquidityUSD"]);
    }
    selection
}

fn events() -> Vec<EventSpec> {
    vec![
        event(
            "withdraws",
            "pool",
            &["hash", "to", "from", "blockNumber", "timestamp", "amountUSD"],
        ),
        event(
            "deposits",
            "pool",
            &["hash", "to", "from", "blockNumber", "timestamp", "amountUSD"],
        ),
        event(
            "swaps",
            "pool",
            &[
                "hash",
                "to",
                "from",
                "blockNumber",
                "timestamp",
                "amountIn",
                "amountInUSD",
                "amountOut",
                "amountOutUSD",
            ],
        ),
    ]
}

fn positions_query() -> String {
    Document::new()
        .variable("$poolId", "String")
        .select(
            Selection::field("positions")
                .argument(Argument::int("first", 1000))
                .argument(Argument::enumeration("orderBy", "timestampOpened"))
                .argument(Argument::enumeration("orderDirection", "desc"))
                .argument(Argument::filter("pool", "$poolId"))
                .select(Selection::field("account").leaves(["id"]))
                .leaves([
                    "id",
                    "hashOpened",
                    "hashClosed",
                    "timestampOpened",
                    "timestampClosed",
                    "blockNumberOpened",
                    "blockNumberClosed",
                    "depositCount",
                    "withdrawCount",
                ]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SchemaVersion;

    #[test]
    fn test_liquidity_fields_arrive_at_3_0_0() {
        let v3 = build(&SchemaVersion::new("3.0.3").group());
        assert!(v3.protocol_fields.contains("totalLiquidityUSD"));
        assert!(v3.protocol_fields.contains("activeLiquidityUSD"));
        assert!(v3.protocol_fields.contains("cumulativeUniqueLPs"));

        let v1 = build(&SchemaVersion::new("1.3.0").group());
        assert!(!v1.protocol_fields.contains("totalLiquidityUSD"));
        assert!(!v1.protocol_fields.contains("activeLiquidityUSD"));
        assert!(!v1.protocol_fields.contains("cumulativeUniqueLPs"));
    }

    #[test]
    fn test_positions_start_at_2_0_0() {
        assert!(build(&SchemaVersion::new("1.3.2").group())
            .positions_query
            .is_none());
        assert!(build(&SchemaVersion::new("2.0.1").group())
            .positions_query
            .is_some());
        assert!(build(&SchemaVersion::new("3.0.0").group())
            .positions_query
            .is_some());
    }

    #[test]
    fn test_unknown_group_pins_1_3_0() {
        let fallback = build(&SchemaVersion::new("9.9.9").group());
        let pinned = build(&SchemaVersion::new("1.3.0").group());
        assert_eq!(fallback.query, pinned.query);
        assert!(fallback.positions_query.is_none());
    }
}
