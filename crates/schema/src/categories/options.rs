//! Options vault schema revisions.
//!
//! 1.1.0 listed most snapshot fields alphabetically; 1.3.0 regrouped them by
//! metric family, added `openInterestUSD` to snapshots, and added cumulative
//! by-token volume breakdowns. The two revisions are different enough that
//! each keeps its own full tables. Unmatched groups take 1.3.0.

use crate::compose::{event, standard_bundle, token_block, BundleSpec, EventSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::{groups, VersionGroup};

pub(crate) fn build(group: &VersionGroup) -> SchemaDefinition {
    match group.as_str() {
        groups::V1_1_0 => schema_1_1_0(),
        _ => schema_1_3_0(),
    }
}

fn spec() -> BundleSpec {
    BundleSpec {
        protocol_entity: "derivOptProtocol",
        protocols_entity: Some("derivOptProtocols"),
        pools_entity: "liquidityPools",
        pool_entity: "liquidityPool",
        pool_daily_entity: "liquidityPoolDailySnapshots",
        pool_hourly_entity: "liquidityPoolHourlySnapshots",
        scope_field: "pool",
        daily_order: "days",
        hourly_order: "hours",
    }
}

fn schema_1_1_0() -> SchemaDefinition {
    let financials = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "callsMintedCount" => "Int!",
        "closedPositionCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "dailyCallsMintedCount" => "Int!",
        "dailyClosedPositionCount" => "Int!",
        "dailyClosedVolumeUSD" => "BigDecimal!",
        "dailyContractsClosedCount" => "Int!",
        "dailyContractsExercisedCount" => "Int!",
        "dailyContractsExpiredCount" => "Int!",
        "dailyContractsMintedCount" => "Int!",
        "dailyContractsTakenCount" => "Int!",
        "dailyDepositPremiumUSD" => "BigDecimal!",
        "dailyEntryPremiumUSD" => "BigDecimal!",
        "dailyExercisedVolumeUSD" => "BigDecimal!",
        "dailyExitPremiumUSD" => "BigDecimal!",
        "dailyOpenInterestUSD" => "BigDecimal!",
        "dailyOpenPositionCount" => "Int!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyPutsMintedCount" => "Int!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "dailyTotalLiquidityPremiumUSD" => "BigDecimal!",
        "dailyTotalPremiumUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "dailyVolumeUSD" => "BigDecimal!",
        "dailyWithdrawPremiumUSD" => "BigDecimal!",
        "openPositionCount" => "Int!",
        "putsMintedCount" => "Int!",
    };
    let usage_daily = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyActiveUsers" => "Int!",
        "dailyDepositCount" => "Int!",
        "dailySwapCount" => "Int!",
        "dailyTransactionCount" => "Int!",
        "dailyUniqueLP" => "Int!",
        "dailyUniqueTakers" => "Int!",
        "dailyWithdrawCount" => "Int!",
        "totalPoolCount" => "Int!",
    };
    let pool_daily = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "dailyOpenInterestUSD" => "Int!",
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
        "dailyPutsMintedCount" => "Int!",
        "putsMintedCount" => "Int!",
        "dailyCallsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "dailyContractsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "dailyContractsTakenCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "dailyContractsExpiredCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "dailyContractsExercisedCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "dailyContractsClosedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "dailyOpenPositionCount" => "Int!",
        "openPositionCount" => "Int!",
        "dailyClosedPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "dailyVolumeUSD" => "BigDecimal!",
        "dailyVolumeByTokenAmount" => "[BigInt!]!",
        "dailyVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "dailyDepositedVolumeUSD" => "BigDecimal!",
        "dailyDepositedVolumeByTokenAmount" => "[BigInt!]!",
        "dailyDepositedVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeDepositedVolumeUSD" => "BigDecimal!",
        "dailyWithdrawVolumeUSD" => "BigDecimal!",
        "dailyWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "dailyWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeWithdrawVolumeUSD" => "BigDecimal!",
        "dailyClosedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "dailyExerciseVolumeUSD" => "BigDecimal!",
        "cumulativeExerciseVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let usage_hourly = field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyActiveUsers" => "Int!",
        "hourlyDepositCount" => "Int!",
        "hourlySwapCount" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "hourlyWithdrawCount" => "Int!",
    };
    let pool_hourly = field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "hourlySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "hourlyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "hourlyTotalRevenueUSD" => "BigDecimal!",
        "hourlyOpenInterestUSD" => "Int!",
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
        "hourlyDepositVolumeUSD" => "BigDecimal!",
        "hourlyDepositVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyDepositVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeDepositVolumeUSD" => "BigDecimal!",
        "hourlyWithdrawVolumeUSD" => "BigDecimal!",
        "hourlyWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeWithdrawVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let protocol_fields = field_table! {
        "id" => "Bytes!",
        "name" => "String!",
        "slug" => "String!",
        "schemaVersion" => "String!",
        "subgraphVersion" => "String!",
        "methodologyVersion" => "String!",
        "network" => "Network!",
        "type" => "ProtocolType!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "putsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "totalPoolCount" => "Int!",
    };
    let pool_data = field_table! {
        "id" => "Bytes!",
        "protocol" => "DerivOptProtocol!",
        "name" => "String",
        "symbol" => "String",
        "inputTokens" => "[Token!]!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "fees" => "[LiquidityPoolFee!]!",
        "oracle" => "String",
        "createdTimestamp" => "BigInt!",
        "createdBlockNumber" => "BigInt!",
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
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "openInterestUSD" => "Int!",
        "putsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let entities_data = vec![
        ("financialsDailySnapshots", financials),
        ("usageMetricsDailySnapshots", usage_daily),
        ("liquidityPoolDailySnapshots", pool_daily),
        ("usageMetricsHourlySnapshots", usage_hourly),
        ("liquidityPoolHourlySnapshots", pool_hourly),
    ];
    standard_bundle(
        &spec(),
        entities_data,
        protocol_fields,
        pool_data,
        pool_selection(),
        events(),
    )
}

fn schema_1_3_0() -> SchemaDefinition {
    let financials = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "dailyVolumeUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "dailyExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "dailyClosedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "openInterestUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
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
        "dailyPutsMintedCount" => "Int!",
        "putsMintedCount" => "Int!",
        "dailyCallsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "dailyContractsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "dailyContractsTakenCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "dailyContractsExpiredCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "dailyContractsExercisedCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "dailyContractsClosedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
    };
    let usage_daily = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "dailyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "dailyUniqueLP" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "dailyUniqueTakers" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "dailyTransactionCount" => "Int!",
        "dailyDepositCount" => "Int!",
        "dailyWithdrawCount" => "Int!",
        "dailySwapCount" => "Int!",
        "totalPoolCount" => "Int!",
    };
    let pool_daily = field_table! {
        "id" => "Bytes!",
        "days" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "openInterestUSD" => "BigDecimal!",
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
        "dailyPutsMintedCount" => "Int!",
        "putsMintedCount" => "Int!",
        "dailyCallsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "dailyContractsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "dailyContractsTakenCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "dailyContractsExpiredCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "dailyContractsExercisedCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "dailyContractsClosedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "dailyVolumeUSD" => "BigDecimal!",
        "dailyVolumeByTokenAmount" => "[BigInt!]!",
        "dailyVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeVolumeByTokenUSD" => "[BigDecimal!]!",
        "dailyDepositedVolumeUSD" => "BigDecimal!",
        "dailyDepositedVolumeByTokenAmount" => "[BigInt!]!",
        "dailyDepositedVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeDepositedVolumeUSD" => "BigDecimal!",
        "cumulativeDepositedVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeDepositedVolumeByTokenUSD" => "[BigDecimal!]!",
        "dailyWithdrawVolumeUSD" => "BigDecimal!",
        "dailyWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "dailyWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeWithdrawVolumeUSD" => "BigDecimal!",
        "cumulativeWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "dailyClosedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "dailyExerciseVolumeUSD" => "BigDecimal!",
        "cumulativeExerciseVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let usage_hourly = field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "hourlyActiveUsers" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "hourlyDepositCount" => "Int!",
        "hourlyWithdrawCount" => "Int!",
        "hourlySwapCount" => "Int!",
    };
    let pool_hourly = field_table! {
        "id" => "Bytes!",
        "hours" => "Int!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "hourlySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "hourlyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "hourlyTotalRevenueUSD" => "BigDecimal!",
        "openInterestUSD" => "BigDecimal!",
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
        "cumulativeVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeVolumeByTokenUSD" => "[BigDecimal!]!",
        "hourlyDepositVolumeUSD" => "BigDecimal!",
        "hourlyDepositVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyDepositVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeDepositVolumeUSD" => "BigDecimal!",
        "cumulativeDepositVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeDepositVolumeByTokenUSD" => "[BigDecimal!]!",
        "hourlyWithdrawVolumeUSD" => "BigDecimal!",
        "hourlyWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "hourlyWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeWithdrawVolumeUSD" => "BigDecimal!",
        "cumulativeWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let protocol_fields = field_table! {
        "id" => "Bytes!",
        "name" => "String!",
        "slug" => "String!",
        "schemaVersion" => "String!",
        "subgraphVersion" => "String!",
        "methodologyVersion" => "String!",
        "network" => "Network!",
        "type" => "ProtocolType!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeEntryPremiumUSD" => "BigDecimal!",
        "cumulativeExitPremiumUSD" => "BigDecimal!",
        "cumulativeTotalPremiumUSD" => "BigDecimal!",
        "cumulativeDepositPremiumUSD" => "BigDecimal!",
        "cumulativeWithdrawPremiumUSD" => "BigDecimal!",
        "cumulativeTotalLiquidityPremiumUSD" => "BigDecimal!",
        "putsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openInterestUSD" => "BigDecimal!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueLP" => "Int!",
        "cumulativeUniqueTakers" => "Int!",
        "totalPoolCount" => "Int!",
    };
    let pool_data = field_table! {
        "id" => "Bytes!",
        "protocol" => "DerivOptProtocol!",
        "name" => "String",
        "symbol" => "String",
        "inputTokens" => "[Token!]!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "fees" => "[LiquidityPoolFee!]!",
        "oracle" => "String",
        "createdTimestamp" => "BigInt!",
        "createdBlockNumber" => "BigInt!",
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
        "cumulativeVolumeUSD" => "BigDecimal!",
        "cumulativeDepositedVolumeUSD" => "BigDecimal!",
        "cumulativeWithdrawVolumeUSD" => "BigDecimal!",
        "cumulativeExercisedVolumeUSD" => "BigDecimal!",
        "cumulativeClosedVolumeUSD" => "BigDecimal!",
        "openInterestUSD" => "BigDecimal!",
        "putsMintedCount" => "Int!",
        "callsMintedCount" => "Int!",
        "contractsMintedCount" => "Int!",
        "contractsTakenCount" => "Int!",
        "contractsExpiredCount" => "Int!",
        "contractsExercisedCount" => "Int!",
        "contractsClosedCount" => "Int!",
        "openPositionCount" => "Int!",
        "closedPositionCount" => "Int!",
        "cumulativeVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeDepositedVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeDepositedVolumeByTokenUSD" => "[BigDecimal!]!",
        "cumulativeWithdrawVolumeByTokenAmount" => "[BigInt!]!",
        "cumulativeWithdrawVolumeByTokenUSD" => "[BigDecimal!]!",
        "inputTokenBalances" => "[BigInt!]!",
        "inputTokenWeights" => "[BigDecimal!]!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    };
    let entities_data = vec![
        ("financialsDailySnapshots", financials),
        ("usageMetricsDailySnapshots", usage_daily),
        ("liquidityPoolDailySnapshots", pool_daily),
        ("usageMetricsHourlySnapshots", usage_hourly),
        ("liquidityPoolHourlySnapshots", pool_hourly),
    ];
    standard_bundle(
        &spec(),
        entities_data,
        protocol_fields,
        pool_data,
        pool_selection(),
        events(),
    )
}

// The pool lookup never changed between revisions.
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
            "cumulativeVolumeUSD",
            "cumulativeExercisedVolumeUSD",
            "cumulativeClosedVolumeUSD",
            "openInterestUSD",
            "putsMintedCount",
            "callsMintedCount",
            "contractsMintedCount",
            "contractsTakenCount",
            "contractsExpiredCount",
            "contractsExercisedCount",
            "contractsClosedCount",
            "openPositionCount",
            "closedPositionCount",
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
    let fields: &[&'static str] = &[
        "hash",
        "to",
        "from",
        "blockNumber",
        "amountUSD",
        "outputTokenAmount",
    ];
    vec![
        event("deposits", "pool", fields),
        event("withdraws", "pool", fields),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SchemaVersion;

    #[test]
    fn test_unknown_group_takes_latest() {
        let latest = build(&SchemaVersion::new("1.3.0").group());
        let unknown = build(&SchemaVersion::new("2.5.0").group());
        assert_eq!(latest.query, unknown.query);
        assert_eq!(latest.financials_query, unknown.financials_query);
    }

    #[test]
    fn test_by_token_cumulatives_arrive_at_1_3_0() {
        let v11 = build(&SchemaVersion::new("1.1.0").group());
        let v13 = build(&SchemaVersion::new("1.3.0").group());
        assert!(!v11
            .entity_fields("liquidityPoolDailySnapshots")
            .is_some_and(|t| t.contains("cumulativeVolumeByTokenAmount")));
        assert!(v13
            .entity_fields("liquidityPoolDailySnapshots")
            .is_some_and(|t| t.contains("cumulativeVolumeByTokenAmount")));
    }

    #[test]
    fn test_events_carry_output_token_amount() {
        let bundle = build(&SchemaVersion::new("1.3.0").group());
        assert_eq!(bundle.events, ["deposits", "withdraws"]);
        assert!(bundle
            .query
            .contains("deposits(first: 1000, orderBy: timestamp, orderDirection: desc, where: {pool: $poolId}) { hash to from blockNumber amountUSD outputTokenAmount }"));
    }
}
