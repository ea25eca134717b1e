//! Bridge schema: a single supported revision, 1.1.0.
//!
//! Every version group resolves to the same mapping, so the switch is a
//! plain passthrough. The snapshot tables are unusually wide because bridge
//! accounting tracks volume in both directions plus message traffic.
//!
//! Known quirk kept intact: `poolDailySnapshots` selects `inputTokenBalance`
//! while `poolHourlySnapshots` selects `inputTokenBalances`.

use crate::compose::{protocol_lookup, standard_bundle, token_block, BundleSpec};
use crate::definition::SchemaDefinition;
use crate::document::{Argument, Selection};
use crate::field_table;
use crate::fields::FieldTable;
use crate::version::VersionGroup;

pub(crate) fn build(_group: &VersionGroup) -> SchemaDefinition {
    schema_1_1_0()
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

fn schema_1_1_0() -> SchemaDefinition {
    let entities_data = vec![
        ("financialsDailySnapshots", financials_table()),
        ("usageMetricsDailySnapshots", usage_daily_table()),
        ("poolDailySnapshots", pool_daily_table()),
        ("usageMetricsHourlySnapshots", usage_hourly_table()),
        ("poolHourlySnapshots", pool_hourly_table()),
    ];
    let mut bundle = standard_bundle(
        &spec(),
        entities_data,
        protocol_fields(),
        pool_data(),
        pool_selection(),
        Vec::new(),
    );
    // The protocol table page shows a trimmed column set, not the full
    // protocol field table.
    bundle.protocol_table_query = protocol_lookup("protocol", PROTOCOL_TABLE_FIELDS);
    bundle
}

const PROTOCOL_TABLE_FIELDS: [&str; 15] = [
    "id",
    "name",
    "slug",
    "schemaVersion",
    "subgraphVersion",
    "methodologyVersion",
    "network",
    "type",
    "totalValueLockedUSD",
    "cumulativeSupplySideRevenueUSD",
    "cumulativeProtocolSideRevenueUSD",
    "cumulativeTotalRevenueUSD",
    "cumulativeUniqueUsers",
    "protocolControlledValueUSD",
    "totalPoolCount",
];

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
        "cumulativeVolumeInUSD" => "BigDecimal!",
        "cumulativeVolumeOutUSD" => "BigDecimal!",
        "cumulativeTotalVolumeUSD" => "BigDecimal!",
        "netVolumeUSD" => "BigDecimal!",
        "cumulativeUniqueTransferSenders" => "Int!",
        "cumulativeUniqueTransferReceivers" => "Int!",
        "cumulativeUniqueLiquidityProviders" => "Int!",
        "cumulativeUniqueMessageSenders" => "Int!",
        "cumulativeTransactionCount" => "Int!",
        "cumulativeTransferOutCount" => "Int!",
        "cumulativeTransferInCount" => "Int!",
        "cumulativeLiquidityDepositCount" => "Int!",
        "cumulativeLiquidityWithdrawCount" => "Int!",
        "cumulativeMessageSentCount" => "Int!",
        "cumulativeMessageReceivedCount" => "Int!",
        "totalPoolCount" => "Int!",
        "totalPoolRouteCount" => "Int!",
        "totalCanonicalRouteCount" => "Int!",
        "totalWrappedRouteCount" => "Int!",
        "totalSupportedTokenCount" => "Int!",
    }
}

fn usage_daily_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueTransferSenders" => "Int!",
        "cumulativeUniqueTransferReceivers" => "Int!",
        "cumulativeUniqueLiquidityProviders" => "Int!",
        "cumulativeUniqueMessageSenders" => "Int!",
        "dailyActiveUsers" => "Int!",
        "dailyActiveTransferSenders" => "Int!",
        "dailyActiveTransferReceivers" => "Int!",
        "dailyActiveLiquidityProviders" => "Int!",
        "dailyActiveMessageSenders" => "Int!",
        "cumulativeTransactionCount" => "Int!",
        "dailyTransactionCount" => "Int!",
        "timestamp" => "BigInt!",
        "totalPoolCount" => "Int!",
        "cumulativeTransferOutCount" => "Int!",
        "dailyTransferOutCount" => "Int!",
        "cumulativeTransferInCount" => "Int!",
        "dailyTransferInCount" => "Int!",
        "cumulativeLiquidityDepositCount" => "Int!",
        "dailyLiquidityDepositCount" => "Int!",
        "cumulativeLiquidityWithdrawCount" => "Int!",
        "dailyLiquidityWithdrawCount" => "Int!",
        "cumulativeMessageSentCount" => "Int!",
        "dailyMessageSentCount" => "Int!",
        "cumulativeMessageReceivedCount" => "Int!",
        "dailyMessageReceivedCount" => "Int!",
        "totalPoolRouteCount" => "Int!",
        "totalCanonicalRouteCount" => "Int!",
        "totalWrappedRouteCount" => "Int!",
        "totalSupportedTokenCount" => "Int!",
    }
}

fn usage_hourly_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "cumulativeUniqueUsers" => "Int!",
        "hourlyActiveUsers" => "Int!",
        "cumulativeUniqueTransferSenders" => "Int!",
        "cumulativeUniqueTransferReceivers" => "Int!",
        "cumulativeUniqueLiquidityProviders" => "Int!",
        "cumulativeUniqueMessageSenders" => "Int!",
        "hourlyActiveTransferSenders" => "Int!",
        "hourlyActiveTransferReceivers" => "Int!",
        "hourlyActiveLiquidityProviders" => "Int!",
        "hourlyActiveMessageSenders" => "Int!",
        "cumulativeTransactionCount" => "Int!",
        "hourlyTransactionCount" => "Int!",
        "cumulativeTransferOutCount" => "Int!",
        "hourlyTransferOutCount" => "Int!",
        "cumulativeTransferInCount" => "Int!",
        "hourlyTransferInCount" => "Int!",
        "cumulativeLiquidityDepositCount" => "Int!",
        "hourlyLiquidityDepositCount" => "Int!",
        "cumulativeLiquidityWithdrawCount" => "Int!",
        "hourlyLiquidityWithdrawCount" => "Int!",
        "cumulativeMessageSentCount" => "Int!",
        "hourlyMessageSentCount" => "Int!",
        "cumulativeMessageReceivedCount" => "Int!",
        "hourlyMessageReceivedCount" => "Int!",
        "timestamp" => "BigInt!",
    }
}

fn pool_daily_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "dailySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "dailyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "dailyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeVolumeIn" => "BigInt!",
        "dailyVolumeIn" => "BigInt!",
        "cumulativeVolumeInUSD" => "BigDecimal!",
        "dailyVolumeInUSD" => "BigDecimal!",
        "cumulativeVolumeOut" => "BigInt!",
        "dailyVolumeOut" => "BigInt!",
        "cumulativeVolumeOutUSD" => "BigDecimal!",
        "dailyVolumeOutUSD" => "BigDecimal!",
        "netCumulativeVolume" => "BigInt!",
        "netCumulativeVolumeUSD" => "BigDecimal!",
        "netDailyVolume" => "BigInt!",
        "netDailyVolumeUSD" => "BigDecimal!",
        "inputTokenBalance" => "BigInt!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    }
}

fn pool_hourly_table() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "hourlySupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "hourlyProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "hourlyTotalRevenueUSD" => "BigDecimal!",
        "cumulativeVolumeIn" => "BigInt!",
        "hourlyVolumeIn" => "BigInt!",
        "cumulativeVolumeInUSD" => "BigDecimal!",
        "hourlyVolumeInUSD" => "BigDecimal!",
        "cumulativeVolumeOut" => "BigInt!",
        "hourlyVolumeOut" => "BigInt!",
        "cumulativeVolumeOutUSD" => "BigDecimal!",
        "hourlyVolumeOutUSD" => "BigDecimal!",
        "netCumulativeVolume" => "BigInt!",
        "netCumulativeVolumeUSD" => "BigDecimal!",
        "netHourlyVolume" => "BigInt!",
        "netHourlyVolumeUSD" => "BigDecimal!",
        "inputTokenBalances" => "BigInt!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
        "timestamp" => "BigInt!",
    }
}

fn protocol_fields() -> FieldTable {
    field_table! {
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
        "cumulativeVolumeInUSD" => "BigDecimal!",
        "cumulativeVolumeOutUSD" => "BigDecimal!",
        "cumulativeTotalVolumeUSD" => "BigDecimal!",
        "netVolumeUSD" => "BigDecimal!",
        "cumulativeUniqueUsers" => "Int!",
        "cumulativeUniqueTransferSenders" => "Int!",
        "cumulativeUniqueTransferReceivers" => "Int!",
        "cumulativeUniqueLiquidityProviders" => "Int!",
        "cumulativeUniqueMessageSenders" => "Int!",
        "cumulativeTransactionCount" => "Int!",
        "cumulativeTransferOutCount" => "Int!",
        "cumulativeTransferInCount" => "Int!",
        "cumulativeLiquidityDepositCount" => "Int!",
        "cumulativeLiquidityWithdrawCount" => "Int!",
        "cumulativeMessageSentCount" => "Int!",
        "cumulativeMessageReceivedCount" => "Int!",
        "supportedNetworks" => "[Network!]!",
        "totalPoolCount" => "Int!",
        "totalPoolRouteCount" => "Int!",
        "totalCanonicalRouteCount" => "Int!",
        "totalWrappedRouteCount" => "Int!",
        "totalSupportedTokenCount" => "Int!",
    }
}

fn pool_data() -> FieldTable {
    field_table! {
        "id" => "ID!",
        "name" => "String",
        "symbol" => "String",
        "relation" => "Bytes",
        "type" => "BridgePoolType!",
        "inputToken" => "Token!",
        "destinationTokens" => "[CrosschainToken!]!",
        "routes" => "[PoolRoute!]!",
        "outputToken" => "Token",
        "rewardTokens" => "[RewardToken!]",
        "createdTimestamp" => "BigInt!",
        "createdBlockNumber" => "BigInt!",
        "mintSupply" => "BigInt",
        "inputTokenBalance" => "BigInt!",
        "totalValueLockedUSD" => "BigDecimal!",
        "cumulativeSupplySideRevenueUSD" => "BigDecimal!",
        "cumulativeProtocolSideRevenueUSD" => "BigDecimal!",
        "cumulativeTotalRevenueUSD" => "BigDecimal!",
        "cumulativeVolumeIn" => "BigInt!",
        "cumulativeVolumeOut" => "BigInt!",
        "netVolume" => "BigInt!",
        "cumulativeVolumeInUSD" => "BigDecimal!",
        "cumulativeVolumeOutUSD" => "BigDecimal!",
        "netVolumeUSD" => "BigDecimal!",
        "outputTokenSupply" => "BigInt",
        "outputTokenPriceUSD" => "BigDecimal",
        "stakedOutputTokenAmount" => "BigInt",
        "rewardTokenEmissionsAmount" => "[BigInt!]",
        "rewardTokenEmissionsUSD" => "[BigDecimal!]",
    }
}

fn pool_selection() -> Selection {
    Selection::field("pool")
        .argument(Argument::variable("id", "$poolId"))
        .leaves(["id", "name", "symbol"])
        .select(token_block("inputToken"))
        .select(token_block("outputToken"))
        .select(
            Selection::field("rewardTokens")
                .leaves(["id", "type"])
                .select(token_block("token")),
        )
        .leaves([
            "totalValueLockedUSD",
            "cumulativeSupplySideRevenueUSD",
            "cumulativeProtocolSideRevenueUSD",
            "cumulativeTotalRevenueUSD",
            "inputTokenBalance",
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
    fn test_every_group_resolves_identically() {
        let default = build(&SchemaVersion::new("1.1.0").group());
        let unknown = build(&SchemaVersion::new("9.9.0").group());
        assert_eq!(default.query, unknown.query);
        assert_eq!(default.financials_query, unknown.financials_query);
        assert_eq!(default.pool_timeseries_query, unknown.pool_timeseries_query);
        assert_eq!(default.protocol_table_query, unknown.protocol_table_query);
    }

    #[test]
    fn test_no_events_and_no_positions() {
        let bundle = build(&SchemaVersion::new("1.1.0").group());
        assert!(bundle.events.is_empty());
        assert!(bundle.positions_query.is_none());
    }

    #[test]
    fn test_protocol_table_selects_the_trimmed_column_set() {
        let bundle = build(&SchemaVersion::new("1.1.0").group());
        assert_eq!(
            bundle.protocol_table_query,
            "query Data($protocolId: String) { protocol(id: $protocolId) { id name slug schemaVersion subgraphVersion methodologyVersion network type totalValueLockedUSD cumulativeSupplySideRevenueUSD cumulativeProtocolSideRevenueUSD cumulativeTotalRevenueUSD cumulativeUniqueUsers protocolControlledValueUSD totalPoolCount } }"
        );
        // The full protocol field table stays wider than the table page.
        assert!(bundle.protocol_fields.contains("supportedNetworks"));
        assert!(!bundle.protocol_table_query.contains("supportedNetworks"));
    }

    #[test]
    fn test_hourly_balance_field_keeps_plural_name() {
        let bundle = build(&SchemaVersion::new("1.1.0").group());
        let daily = bundle.entity_fields("poolDailySnapshots").expect("daily");
        let hourly = bundle.entity_fields("poolHourlySnapshots").expect("hourly");
        assert!(daily.contains("inputTokenBalance"));
        assert!(hourly.contains("inputTokenBalances"));
    }
}
