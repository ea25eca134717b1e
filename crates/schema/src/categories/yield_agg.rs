//! Yield aggregator (vault) schema revisions.
//!
//! 1.2.0 added hourly snapshots and `pricePerShare`; 1.3.0 added the
//! per-vault revenue split and the daily pool count. Unmatched groups take
//! the latest revision.

use crate::compose::{event, standard_bundle, token_block, BundleSpec, EventSpec};
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
        protocol_entity: "yieldAggregator",
        protocols_entity: Some("yieldAggregators"),
        pools_entity: "vaults",
        pool_entity: "vault",
        pool_daily_entity: "vaultDailySnapshots",
        pool_hourly_entity: "vaultHourlySnapshots",
        scope_field: "vault",
        daily_order: "timestamp",
        hourly_order: "timestamp",
    }
}

fn schema(revision: Revision) -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table(revision)),
        ("vaultDailySnapshots", vault_daily_table(revision)),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("vaultHourlySnapshots", vault_hourly_table(revision)),
    ];
    standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(revision),
        pool_data(),
        pool_selection(),
        events(),
    )
}

fn financials_table() -> FieldTable {
    field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "protocolControlledValueUSD" => "BigDecimal",
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
    let mut table = field_table! {
        "dailyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyTransactionCount" => "Int!",
        "dailyDepositCount" => "Int!",
        "dailyWithdrawCount" => "Int!",
        "timestamp" => "BigInt!",
    };
    if revision >= Revision::V1_3 {
        table = table.with("totalPoolCount", "Int!");
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
        "timestamp" => "BigInt!",
    }
}

fn vault_daily_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal",
        "pricePerShare" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
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
}

fn vault_hourly_table(revision: Revision) -> FieldTable {
    let mut table = field_table! {
        "totalValueLockedUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal",
        "pricePerShare" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
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
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeUniqueUsers" => "Int!",
    };
    if revision >= Revision::V1_3 {
        table = table.with("totalPoolCount", "Int!");
    }
    table
}

fn pool_data() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "name" => "String",
        "symbol" => "String",
        "fees" => "[VaultFee!]!",
        "depositLimit" => "BigInt!",
        "inputToken" => "Token!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "totalValueLockedUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "outputTokenSupply" => "BigInt!",
        "outputTokenPriceUSD" => "BigDecimal",
        "pricePerShare" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    }
}

fn pool_selection() -> Selection {
    Selection::field("vault")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name", "symbol", "depositLimit"])
        .select(Selection::field("fees").leaves(["feePercentage", "feeType"]))
        .select(token_block("inputToken"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id"])
                .select(token_block("token")),
        )
        .leaves([
            "totalValueLockedUSD",
            "inputTokenBalance",
            "outputTokenSupply",
            "outputTokenPriceUSD",
            "pricePerShare",
            "stakedOutputTokenAmount",
            "rewardTokenEmissionsAmount",
            "rewardTokenEmissionsUSD",
        ])
}

fn events() -> Vec<EventSpec> {
    let fields: &[&'static str] = &["hash", "to", "from", "timestamp", "amount", "amountUSD"];
    vec![
        event("withdraws", "vault", fields),
        event("deposits", "vault", fields),
    ]
}
