//! Perpetual futures schema revisions.
//!
//! 1.0.0 and 1.1.0 differ only in the daily position-count field names:
//! 1.0.0 shipped them with a lowercase letter after the `daily` prefix
//! (`dailylongPositionCount`) and 1.1.0 corrected the casing. Snapshots are
//! keyed by `days`/`hours` counters instead of timestamps, with `Bytes!`
//! ids.

use crate::compose::{event, standard_bundle, token_block, BundleSpec, EventSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::{groups, VersionGroup};

#[derive(Clone, Copy, PartialEq)]
enum Revision {
    V1_0,
    V1_1,
}

pub(crate) fn build(group: &VersionGroup) -> SchemaDefinition {
    match group.as_str() {
        groups::V1_0_0 => schema(Revision::V1_0),
        _ => schema(Revision::V1_1),
    }
}

fn spec() -> BundleSpec {
    BundleSpec {
        protocol_entity: "derivPerpProtocol",
        protocols_entity: Some("derivPerpProtocols"),
        pools_entity: "liquidityPools",
        pool_entity: "liquidityPool",
        pool_daily_entity: "liquidityPoolDailySnapshots",
        pool_hourly_entity: "liquidityPoolHourlySnapshots",
        scope_field: "pool",
        daily_order: "days",
        hourly_order: "hours",
    }
}

fn schema(revision: Revision) -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table(revision)),
        ("liquidityPoolDailySnapshots", pool_daily_table(revision)),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("liquidityPoolHourlySnapshots", pool_hourly_table()),
    ];
    standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(),
        pool_data(),
        pool_selection(),
        events(),
    )
}

/// Daily/cumulative position counters. The daily halves were shipped
/// miscased in 1.0.0 and fixed in 1.1.0; the cumulative halves never moved.
fn position_counts(revision: Revision) -> [&'static str; 10] {
    match revision {
        Revision::V1_0 => [
            "dailylongPositionCount",
            "longPositionCount",
            "dailyshortPositionCount",
            "shortPositionCount",
            "dailyopenPositionCount",
            "openPositionCount",
            "dailyclosedPositionCount",
            "closedPositionCount",
            "dailycumulativePositionCount",
            "cumulativePositionCount",
        ],
        Revision::V1_1 => [
            "dailyLongPositionCount",
            "longPositionCount",
            "dailyShortPositionCount",
            "shortPositionCount",
            "dailyOpenPositionCount",
            "openPositionCount",
            "dailyClosedPositionCount",
            "closedPositionCount",
            "dailyCumulativePositionCount",
            "cumulativePositionCount",
        ],
    }
}

fn financials_table() -> FieldTable {
    field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "protocolControlledValueUSD" => "BigDecimal",
        "dailyVolumeUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "dailyInflowVolumeUSD" => "BigDecimal!",
        "cumulativeInflowVolumeUSD" => "BigDecimal!",
        "dailyClosedInflowVolumeUSD" => "BigDecimal!",
        "cumulativeClosedInflowVolumeUSD" => "BigDecimal!",
        "dailyOutflowVolumeUSD" => "BigDecimal!",
        "cumulativeOutflowVolumeUSD" => "BigDecimal!",
        "dailyOpenInterestUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyStakeSideRevenueUSD" => "BigDecimal!",
        "cumulativeStakeSideRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyEntryPremiumUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "dailyExitPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "dailyTotalPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "dailyDepositPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "dailyWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "dailyTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
    }
}

fn usage_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "dailyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
    };
    for name in position_counts(revision) {
        table = table.with(name, "Int!");
    }
    table
        .with("dailyTransactionCount", "Int!")
        .with("dailyDepositCount", "Int!")
        .with("dailyWithdrawCount", "Int!")
        .with("dailyBorrowCount", "Int!")
        .with("dailySwapCount", "Int!")
        .with("dailyActiveDepositors", "Int!")
        .with("cumulativeUniqueDepositors", "Int!")
        .with("dailyActiveBorrowers", "Int!")
        .with("cumulativeUniqueBorrowers", "Int!")
        .with("dailyActiveLiquidators", "Int!")
        .with("cumulativeUniqueLiquidators", "Int!")
        .with("dailyActiveLiquidatees", "Int!")
        .with("cumulativeUniqueLiquidatees", "Int!")
        .with("dailyCollateralIn", "Int!")
        .with("cumulativeCollateralIn", "Int!")
        .with("dailyCollateralOut", "Int!")
        .with("cumulativeCollateralOut", "Int!")
        .with("totalPoolCount", "Int!")
}

fn usage_hourly_table() -> FieldTable {
    field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "hourlyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "hourlyDepositCount" => "Int!",
        "hourlyWithdrawCount" => "Int!",
        "hourlySwapCount" => "Int!",
    }
}

fn pool_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyFundingrate" => "[BigDecimal!]!",
        "dailyOpenInterestUSD" => "BigDecimal!",
        "dailyEntryPremiumUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "dailyExitPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "dailyTotalPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "dailyDepositPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "dailyWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "dailyTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "dailyActiveBorrowers" => "Int!",
        "cumulativeUniqueBorrowers" => "Int!",
        "dailyActiveLiquidators" => "Int!",
        "cumulativeUniqueLiquidators" => "Int!",
        "dailyActiveLiquidatees" => "Int!",
        "cumulativeUniqueLiquidatees" => "Int!",
    };
    for name in position_counts(revision) {
        table = table.with(name, "Int!");
    }
    table
        .with("dailyVolumeUSD", "BigDecimal!")
        .with("dailyVolumeByTokenAmount", "[BigInt!]!")
        .with("dailyVolumeByTokenUSD", "[BigDecimal!]!")
        .with("cumulativeVolumeUSD", "BigDecimal!")
        .with("dailyInflowVolumeUSD", "BigDecimal!")
        .with("dailyInflowVolumeByTokenAmount", "[BigInt!]!")
        .with("dailyInflowVolumeByTokenUSD", "[BigDecimal!]!")
        .with("cumulativeInflowVolumeUSD", "BigDecimal!")
        .with("dailyClosedInflowVolumeUSD", "BigDecimal!")
        .with("dailyClosedInflowVolumeByTokenAmount", "[BigInt!]!")
        .with("dailyClosedInflowVolumeByTokenUSD", "[BigDecimal!]!")
        .with("cumulativeClosedInflowVolumeUSD", "BigDecimal!")
        .with("dailyOutflowVolumeUSD", "BigDecimal!")
        .with("dailyOutflowVolumeByTokenAmount", "[BigInt!]!")
        .with("dailyOutflowVolumeByTokenUSD", "[BigDecimal!]!")
        .with("cumulativeOutflowVolumeUSD", "BigDecimal!")
        .with("inputTokenBalances", "[BigInt!]!")
        .with("inputTokenWeights", "[BigDecimal!]!")
        .with("outputTokenSupply", "BigInt")
        .with("outputTokenPriceUSD", "BigDecimal")
        .with("stakedOutputTokenAmount", "BigInt")
        .with("rewardTokenEmissionsAmount", "[BigInt!]")
        .with("rewardTokenEmissionsUSD", "[BigDecimal!]")
}

fn pool_hourly_table() -> FieldTable {
    field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "hourlySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "hourlyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "hourlyTotalRevenueUSD" => "BigDecimal!",
        "hourlyFundingrate" => "[BigDecimal!]!",
        "hourlyOpenInterestUSD" => "BigDecimal!",
        "hourlyEntryPremiumUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "hourlyExitPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "hourlyTotalPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "hourlyDepositPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "hourlyWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "hourlyTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "hourlyVolumeUSD" => "BigDecimal!",
        "hourlyVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "hourlyInflowVolumeUSD" => "BigDecimal!",
        "hourlyInflowVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyInflowVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeInflowVolumeUSD" => "BigDecimal!",
        "hourlyClosedInflowVolumeUSD" => "BigDecimal!",
        "hourlyClosedInflowVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyClosedInflowVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeClosedInflowVolumeUSD" => "BigDecimal!",
        "hourlyOutflowVolumeUSD" => "BigDecimal!",
        "hourlyOutflowVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyOutflowVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeOutflowVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    }
}

fn protocol_fields() -> FieldTable {
    field_table! {
        "id" => "Bytes!",
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
        "cumulativeStakeSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueBorrowers" => "Int!",
        "cumulativeUniqueLiquidators" => "Int!",
        "cumulativeUniqueLiquidatees" => "Int!",
        "openInterestUSD" => "BigDecimal!",
        "longPositionCount" => "Int!",
        "shortPositionCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "cumulativePositionCount" => "Int!",
        "transactionCount" => "Int!",
        "depositCount" => "Int!",
        "withdrawCount" => "Int!",
        "borrowCount" => "Int!",
        "collateralInCount" => "Int!",
        "collateralOutCount" => "Int!",
        "totalPoolCount" => "Int!",
    }
}

fn pool_data() -> FieldTable {
    field_table! {
        "id" => "Bytes!",
        "name" => "String",
        "symbol" => "String",
        "inputTokens" => "[Token!]!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "fees" => "[LiquidityPoolFee!]!",
        "oracle" => "String",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeUniqueBorrowers" => "Int!",
        "cumulativeUniqueLiquidators" => "Int!",
        "cumulativeUniqueLiquidatees" => "Int!",
        "openInterestUSD" => "BigDecimal!",
        "longPositionCount" => "Int!",
        "shortPositionCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "cumulativePositionCount" => "Int!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    }
}

fn pool_selection() -> Selection {
    Selection::field("liquidityPool")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name", "symbol"])
        .select(token_block("inputTokens"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id", "type"])
                .select(token_block("token")),
        )
        .select(Selection::field("fees").leaves(["id", "feePercentage", "feeType"]))
        .leaves([
            "oracle",
            "totalValueLockedUSD",
            "cumulativeSupplySideRevenueUSD",
            "cumulativeProtocolSideRevenueUSD",
            "cumulativeTotalRevenueUSD",
            "cumulativeEntryPremiumUSD",
            "cumulativeExitPremiumUSD",
            "cumulativeTotalPremiumUSD",
            "cumulativeDepositPremiumUSD",
            "cumulativeWithdrawPremiumUSD",
            "cumulativeTotalLiquidityPremiumUSD",
            "cumulativeUniqueBorrowers",
            "cumulativeUniqueLiquidators",
            "cumulativeUniqueLiquidatees",
            "openInterestUSD",
            "longPositionCount",
            "shortPositionCount",
            "openPositionCount",
            "closedPositionCount",
            "cumulativePositionCount",
            "cumulativeVolumeUSD",
            "inputTokenBalances",
            "inputTokenWeights",
            "outputTokenSupply",
            "outputTokenPriceUSD",
            "stakedOutputTokenAmount",
            "rewardTokenEmissionsAmount",
            "rewardTokenEmissionsUSD",
        ])
}

fn events() -> Vec<EventSpec> {
    let transfer: &[&'static str] = &["hash", "to", "from", "blockNumber", "amountUSD"];
    let liquidates = Selection::field("liquidates")
        .argument(Argument::int("first", 1000))
        .argument(Argument::enumeration("orderBy", "timestamp"))
        .argument(Argument::enumeration("orderDirection", "desc"))
        .argument(Argument::filter("pool", "$poolId"))
        .leaves(["hash", "to", "from", "blockNumber"])
        .select(Selection::field("liquidator").leaves(["id"]))
        .select(Selection::field("liquidatee").leaves(["id"]))
        .leaves(["amount", "amountUSD", "profitUSD"]);
    vec![
        event("deposits", "pool", transfer),
        event("withdraws", "pool", transfer),
        event("collateralIns", "pool", transfer),
        event("collateralOuts", "pool", transfer),
        event(
            "swaps",
            "pool",
            &[
                "hash",
                "to",
                "from",
                "blockNumber",
                "amountIn",
                "amountInUSD",
                "amountOut",
                "amountOutUSD",
            ],
        ),
        ("liquidates", liquidates),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SchemaVersion;

    #[test]
    fn test_1_0_0_keeps_miscased_daily_position_counts() {
        let v10 = build(&SchemaVersion::new("1.0.2").group());
        let usage = v10.entity_fields("usageMetricsDailySnapshots").expect("usage");
        assert!(usage.contains("dailylongPositionCount"));
        assert!(!usage.contains("dailyLongPositionCount"));

        let v11 = build(&SchemaVersion::new("1.1.0").group());
        let usage = v11.entity_fields("usageMetricsDailySnapshots").expect("usage");
        assert!(usage.contains("dailyLongPositionCount"));
        assert!(!usage.contains("dailylongPositionCount"));
    }

    #[test]
    fn test_snapshots_order_by_day_and_hour_counters() {
        let bundle = build(&SchemaVersion::new("1.1.0").group());
        assert!(bundle
            .financials_query
            .contains("financialsDailySnapshots(first: 1000, orderBy: days, orderDirection: desc)"));
        assert!(bundle.pool_timeseries_query.contains(
            "liquidityPoolHourlySnapshots(first: 1000, orderBy: hours, orderDirection: desc, where: {pool: $poolId})"
        ));
    }

    #[test]
    fn test_liquidates_select_counterparties() {
        let bundle = build(&SchemaVersion::new("1.1.0").group());
        assert!(bundle
            .query
            .contains("liquidator { id } liquidatee { id } amount amountUSD profitUSD"));
        assert_eq!(bundle.events.len(), 6);
    }
}
