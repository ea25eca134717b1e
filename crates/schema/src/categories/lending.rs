//! Lending market schema revisions.
//!
//! 1.2.0 is the classic market layout; 2.0.0 added borrowed-balance splits
//! per interest-rate mode; 3.0.0 added position tracking. Unmatched groups
//! take the latest revision.

use crate::compose::{event, standard_bundle, token_block, BundleSpec, EventSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Document, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::{groups, VersionGroup};

#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Revision {
    V1_2,
    V2_0,
    V3_0,
}

pub(crate) fn build(group: &VersionGroup) -> SchemaDefinition {
    match group.as_str() {
        groups::V1_2_0 => schema(Revision::V1_2),
        groups::V2_0_0 => schema(Revision::V2_0),
        _ => schema(Revision::V3_0),
    }
}

fn spec() -> BundleSpec {
    BundleSpec {
        protocol_entity: "lendingProtocol",
        protocols_entity: Some("lendingProtocols"),
        pools_entity: "markets",
        pool_entity: "market",
        pool_daily_entity: "marketDailySnapshots",
        pool_hourly_entity: "marketHourlySnapshots",
        scope_field: "market",
        daily_order: "timestamp",
        hourly_order: "timestamp",
    }
}

fn schema(revision: Revision) -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table(revision)),
        ("marketDailySnapshots", market_daily_table(revision)),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("marketHourlySnapshots", market_hourly_table(revision)),
    ];
    let mut bundle = standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(revision),
        pool_data(revision),
        pool_selection(revision),
        events(),
    );
    if revision >= Revision::V3_0 {
        bundle.positions_query = Some(positions_query());
    }
    bundle
}

fn financials_table() -> FieldTable {
    field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "protocolControlledValueUSD" => "BigDecimal",
        "mintedTokenSupplies" => "[BigInt!]",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyLiquidateUSD" => "BigDecimal!",
        "cumulativeLiquidateUSD" => "BigDecimal!",
        "timestamp" => "BigInt!",
    }
}

fn usage_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "dailyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyTransactionCount" => "Int!",
        "dailyDepositCount" => "Int!",
        "dailyWithdrawCount" => "Int!",
        "dailyBorrowCount" => "Int!",
        "dailyRepayCount" => "Int!",
        "dailyLiquidateCount" => "Int!",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V3_0 {
        table = table
            .with("openPositionCount", "Int!")
            .with("cumulativePositionCount", "Int!");
    }
    table
}

fn usage_hourly_table() -> FieldTable {
    field_table! {
        "hourlyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "hourlyDepositCount" => "Int!",
        "hourlyWithdrawCount" => "Int!",
        "hourlyBorrowCount" => "Int!",
        "hourlyRepayCount" => "Int!",
        "hourlyLiquidateCount" => "Int!",
        "timestamp" => "BigInt!",
    }
}

fn market_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "totalDepositBalanceUSD" => "BigDecimal!",
        "dailyDepositUSD" => "BigDecimal!",
        "cumulativeDepositUSD" => "BigDecimal!",
        "totalBorrowBalanceUSD" => "BigDecimal!",
        "dailyBorrowUSD" => "BigDecimal!",
        "cumulativeBorrowUSD" => "BigDecimal!",
        "dailyLiquidateUSD" => "BigDecimal!",
        "cumulativeLiquidateUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "inputTokenPriceUSD" => "BigDecimal!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal!",
        "exchangeRate" => "BigDecimal",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V2_0 {
        table = table
            .with("variableBorrowedTokenBalance", "BigInt")
            .with("stableBorrowedTokenBalance", "BigInt");
    }
    table
}

fn market_hourly_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "totalDepositBalanceUSD" => "BigDecimal!",
        "hourlyDepositUSD" => "BigDecimal!",
        "cumulativeDepositUSD" => "BigDecimal!",
        "totalBorrowBalanceUSD" => "BigDecimal!",
        "hourlyBorrowUSD" => "BigDecimal!",
        "cumulativeBorrowUSD" => "BigDecimal!",
        "hourlyLiquidateUSD" => "BigDecimal!",
        "cumulativeLiquidateUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "inputTokenPriceUSD" => "BigDecimal!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal!",
        "exchangeRate" => "BigDecimal",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V2_0 {
        table = table
            .with("variableBorrowedTokenBalance", "BigInt")
            .with("stableBorrowedTokenBalance", "BigInt");
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
        "lendingType" => "LendingType",
        "totalValueLockedUSD" => "BigDecimal!",
        "protocolControlledValueUSD" => "BigDecimal",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeUniqueUsers" => "Int!",
        "totalDepositBalanceUSD" => "BigDecimal!",
        "cumulativeDepositUSD" => "BigDecimal!",
        "totalBorrowBalanceUSD" => "BigDecimal!",
        "cumulativeBorrowUSD" => "BigDecimal!",
        "cumulativeLiquidateUSD" => "BigDecimal!",
        "mintedTokenSupplies" => "[BigInt!]",
        "totalPoolCount" => "Int!",
    };
    if revision >= Revision::V3_0 {
        table = table
            .with("openPositionCount", "Int!")
            .with("cumulativePositionCount", "Int!");
    }
    table
}

fn pool_data(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "id" => "ID!",
        "name" => "String",
        "inputToken" => "Token!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "isActive" => "Boolean!",
        "canUseAsCollateral" => "Boolean!",
        "canBorrowFrom" => "Boolean!",
        "maximumLTV" => "BigDecimal!",
        "liquidationThreshold" => "BigDecimal!",
        "liquidationPenalty" => "BigDecimal!",
        "totalValueLockedUSD" => "BigDecimal!",
        "totalDepositBalanceUSD" => "BigDecimal!",
        "cumulativeDepositUSD" => "BigDecimal!",
        "totalBorrowBalanceUSD" => "BigDecimal!",
        "cumulativeBorrowUSD" => "BigDecimal!",
        "cumulativeLiquidateUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "inputTokenPriceUSD" => "BigDecimal!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal!",
        "exchangeRate" => "BigDecimal",
        "depositRate" => "BigDecimal",
        "stableBorrowRate" => "BigDecimal",
        "variableBorrowRate" => "BigDecimal",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    if revision >= Revision::V2_0 {
        table = table
            .with("variableBorrowedTokenBalance", "BigInt")
            .with("stableBorrowedTokenBalance", "BigInt");
    }
    table
}

fn pool_selection(revision: Revision) -> Selection {
    let mut selection = Selection::field("market")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name"])
        .select(token_block("inputToken"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id"])
                .select(token_block("token")),
        )
        .leaves([
            "isActive",
            "canUseAsCollateral",
            "canBorrowFrom",
            "maximumLTV",
            "liquidationThreshold",
            "liquidationPenalty",
            "totalValueLockedUSD",
            "totalDepositBalanceUSD",
            "cumulativeDepositUSD",
            "totalBorrowBalanceUSD",
            "cumulativeBorrowUSD",
            "cumulativeLiquidateUSD",
            "inputTokenBalance",
            "inputTokenPriceUSD",
            "outputTokenSupply",
            "outputTokenPriceUSD",
            "exchangeRate",
            "depositRate",
            "stableBorrowRate",
            "variableBorrowRate",
            "rewardTokenEmissionsAmount",
            "rewardTokenEmissionsUSD",
        ]);
    if revision >= Revision::V2_0 {
        selection = selection.leaves([
            "variableBorrowedTokenBalance",
            "stableBorrowedTokenBalance",
        ]);
    }
    selection
}

fn events() -> Vec<EventSpec> {
    let base: &[&'static str] = &["hash", "to", "from", "timestamp", "amount", "amountUSD"];
    vec![
        event("withdraws", "market", base),
        event("repays", "market", base),
        event(
            "liquidates",
            "market",
            &[
                "hash",
                "to",
                "from",
                "timestamp",
                "amount",
                "amountUSD",
                "profitUSD",
            ],
        ),
        event("deposits", "market", base),
        event("borrows", "market", base),
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
                .argument(Argument::filter("market", "$poolId"))
                .select(Selection::field("account").leaves(["id"]))
                .leaves([
                    "id",
                    "hashOpened",
                    "hashClosed",
                    "timestampOpened",
                    "timestampClosed",
                    "blockNumberOpened",
                    "blockNumberClosed",
                    "side",
                    "isCollateral",
                    "balance",
                    "depositCount",
                    "withdrawCount",
                    "borrowCount",
                    "repayCount",
                    "liquidationCount",
                ]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SchemaVersion;

    #[test]
    fn test_unknown_group_takes_latest() {
        let fallback = build(&SchemaVersion::new("7.1.0").group());
        let latest = build(&SchemaVersion::new("3.0.0").group());
        assert_eq!(fallback.query, latest.query);
        assert!(fallback.positions_query.is_some());
    }

    #[test]
    fn test_borrowed_balance_split_arrives_at_2_0_0() {
        let v12 = build(&SchemaVersion::new("1.2.5").group());
        let v20 = build(&SchemaVersion::new("2.0.0").group());
        let daily = |bundle: &SchemaDefinition| {
            bundle
                .entity_fields("marketDailySnapshots")
                .map(|t| t.contains("variableBorrowedTokenBalance"))
        };
        assert_eq!(daily(&v12), Some(false));
        assert_eq!(daily(&v20), Some(true));
        assert!(v20.positions_query.is_none());
    }

    #[test]
    fn test_events_scope_to_market() {
        let bundle = build(&SchemaVersion::new("3.0.0").group());
        assert_eq!(
            bundle.events,
            ["withdraws", "repays", "liquidates", "deposits", "borrows"]
        );
        assert!(bundle
            .query
            .contains("liquidates(first: 1000, orderBy: timestamp, orderDirection: desc, where: {market: $poolId})"));
    }
}
