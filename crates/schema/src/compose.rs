//! Shared document assembly used by every category builder.
//!
//! Each category supplies its field tables, its pool lookup selection, and a
//! [`BundleSpec`] naming the entities specific to its domain (markets,
//! vaults, liquidity pools). Everything else about a bundle's documents is
//! common and composed here.

use crate::definition::SchemaDefinition;
use crate::document::{Argument, Document, Selection};
use crate::fields::FieldTable;

pub(crate) const PROTOCOL_LEVEL_FINANCIALS: &str = "financialsDailySnapshots";
pub(crate) const PROTOCOL_LEVEL_USAGE_DAILY: &str = "usageMetricsDailySnapshots";
pub(crate) const PROTOCOL_LEVEL_USAGE_HOURLY: &str = "usageMetricsHourlySnapshots";

/// Per-category entity naming, used to compose the common documents.
pub(crate) struct BundleSpec {
    /// Singular protocol entity, e.g. `dexAmmProtocol`.
    pub protocol_entity: &'static str,
    /// Plural protocol listing carrying the full protocol field table, when
    /// the schema exposes one alongside the metadata `protocols` block.
    pub protocols_entity: Option<&'static str>,
    /// Plural pool entity for the top-pools listing, e.g. `liquidityPools`.
    pub pools_entity: &'static str,
    /// Singular pool entity for the per-pool lookup.
    pub pool_entity: &'static str,
    /// Daily pool snapshot entity, e.g. `marketDailySnapshots`.
    pub pool_daily_entity: &'static str,
    /// Hourly pool snapshot entity.
    pub pool_hourly_entity: &'static str,
    /// Filter field scoping snapshots and events to one pool.
    pub scope_field: &'static str,
    /// Sort key for daily snapshots (`timestamp`, or `days` on schemas that
    /// index snapshots by day number).
    pub daily_order: &'static str,
    /// Sort key for hourly snapshots.
    pub hourly_order: &'static str,
}

/// An event entity name paired with its prepared selection.
pub(crate) type EventSpec = (&'static str, Selection);

/// `_meta { block { number } deployment }` indexing status probe.
pub(crate) fn meta_selection() -> Selection {
    Selection::field("_meta")
        .select(Selection::field("block").leaves(["number"]))
        .select(Selection::field("deployment"))
}

/// Deployment metadata block present on every main query.
pub(crate) fn protocols_metadata_selection() -> Selection {
    Selection::field("protocols").leaves([
        "id",
        "methodologyVersion",
        "network",
        "name",
        "type",
        "slug",
        "schemaVersion",
        "subgraphVersion",
    ])
}

/// A `first: 1000` descending list selection over a snapshot entity, with
/// fields taken from the table in insertion order.
pub(crate) fn snapshot_selection(
    entity: &'static str,
    order_by: &'static str,
    fields: &FieldTable,
    scope: Option<(&'static str, &'static str)>,
) -> Selection {
    let mut selection = Selection::field(entity)
        .argument(Argument::int("first", 1000))
        .argument(Argument::enumeration("orderBy", order_by))
        .argument(Argument::enumeration("orderDirection", "desc"));
    if let Some((field, variable)) = scope {
        selection = selection.argument(Argument::filter(field, variable));
    }
    selection.leaves(fields.names())
}

/// Single-protocol lookup document for the protocol table page.
///
/// Most categories select the full protocol field table; categories whose
/// legacy table page showed a trimmed column set pass that subset instead.
pub(crate) fn protocol_lookup<'a>(
    entity: &'static str,
    fields: impl IntoIterator<Item = &'a str>,
) -> String {
    Document::new()
        .variable("$protocolId", "String")
        .select(
            Selection::field(entity)
                .argument(Argument::variable("id", "$protocolId"))
                .leaves(fields),
        )
        .build()
}

/// Token relation block as selected inside pool lookups.
pub(crate) fn token_block(name: &'static str) -> Selection {
    Selection::field(name).leaves(["id", "decimals", "name", "symbol"])
}

/// A `first: 1000` descending event listing scoped to `$poolId`, with leaf
/// fields. Categories append nested blocks where an event selects relations.
pub(crate) fn event(
    name: &'static str,
    scope_field: &'static str,
    fields: &[&'static str],
) -> EventSpec {
    let selection = Selection::field(name)
        .argument(Argument::int("first", 1000))
        .argument(Argument::enumeration("orderBy", "timestamp"))
        .argument(Argument::enumeration("orderDirection", "desc"))
        .argument(Argument::filter(scope_field, "$poolId"))
        .leaves(fields.iter().copied());
    (name, selection)
}

/// Assemble the full document set shared by every category.
///
/// The main query carries metadata, the protocol field block, per-pool
/// events, and the pool lookup; timeseries selections live in the dedicated
/// financials, usage, and pool-timeseries documents. `positions_query`
/// starts out `None`; versions that track positions attach one afterwards.
pub(crate) fn standard_bundle(
    spec: &BundleSpec,
    entities_data: Vec<(&'static str, FieldTable)>,
    protocol_fields: FieldTable,
    pool_data: FieldTable,
    pool_selection: Selection,
    events: Vec<EventSpec>,
) -> SchemaDefinition {
    let order_for = |entity: &str| {
        if entity == PROTOCOL_LEVEL_USAGE_HOURLY || entity == spec.pool_hourly_entity {
            spec.hourly_order
        } else {
            spec.daily_order
        }
    };

    let mut query = Document::new()
        .variable("$poolId", "String")
        .variable("$protocolId", "String")
        .select(meta_selection())
        .select(protocols_metadata_selection());
    if let Some(protocols_entity) = spec.protocols_entity {
        query = query.select(Selection::field(protocols_entity).leaves(protocol_fields.names()));
    }
    let event_names: Vec<&'static str> = events.iter().map(|(name, _)| *name).collect();
    for (_, selection) in events {
        query = query.select(selection);
    }
    query = query.select(pool_selection);

    let table_for = |entity: &str| {
        entities_data
            .iter()
            .find(|(name, _)| *name == entity)
            .map(|(_, table)| table.clone())
            .unwrap_or_default()
    };
    let single_entity_doc = |entity: &'static str| {
        Document::new()
            .select(snapshot_selection(
                entity,
                order_for(entity),
                &table_for(entity),
                None,
            ))
            .build()
    };

    let protocol_table_query = protocol_lookup(spec.protocol_entity, protocol_fields.names());

    let pools_query = Document::new()
        .select(
            Selection::field(spec.pools_entity)
                .argument(Argument::int("first", 100))
                .argument(Argument::enumeration("orderBy", "totalValueLockedUSD"))
                .argument(Argument::enumeration("orderDirection", "desc"))
                .leaves(["id", "name"]),
        )
        .build();

    let pool_timeseries_query = Document::new()
        .variable("$poolId", "String")
        .select(snapshot_selection(
            spec.pool_daily_entity,
            spec.daily_order,
            &table_for(spec.pool_daily_entity),
            Some((spec.scope_field, "$poolId")),
        ))
        .select(snapshot_selection(
            spec.pool_hourly_entity,
            spec.hourly_order,
            &table_for(spec.pool_hourly_entity),
            Some((spec.scope_field, "$poolId")),
        ))
        .build();

    SchemaDefinition {
        entities: entities_data.iter().map(|(name, _)| *name).collect(),
        financials_query: single_entity_doc(PROTOCOL_LEVEL_FINANCIALS),
        hourly_usage_query: single_entity_doc(PROTOCOL_LEVEL_USAGE_HOURLY),
        daily_usage_query: single_entity_doc(PROTOCOL_LEVEL_USAGE_DAILY),
        query: query.build(),
        protocol_table_query,
        pools_query,
        pool_timeseries_query,
        positions_query: None,
        events: event_names,
        entities_data,
        protocol_fields,
        pool_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_table;

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

    #[test]
    fn test_pool_snapshots_are_scoped_and_protocol_snapshots_are_not() {
        let entities_data = vec![
            (
                PROTOCOL_LEVEL_FINANCIALS,
                field_table! { "totalValueLockedUSD" => "BigDecimal!", "timestamp" => "BigInt!" },
            ),
            (
                "liquidityPoolDailySnapshots",
                field_table! { "totalValueLockedUSD" => "BigDecimal!", "timestamp" => "BigInt!" },
            ),
        ];
        let bundle = standard_bundle(
            &spec(),
            entities_data,
            field_table! { "id" => "ID!", "name" => "String" },
            FieldTable::default(),
            Selection::field("liquidityPool")
                .argument(Argument::variable("id", "$poolId"))
                .leaves(["id"]),
            vec![event("swaps", "pool", &["hash", "timestamp", "amountInUSD"])],
        );
        assert_eq!(
            bundle.financials_query,
            "query Data { financialsDailySnapshots(first: 1000, orderBy: timestamp, orderDirection: desc) { totalValueLockedUSD timestamp } }"
        );
        assert!(bundle.pool_timeseries_query.contains(
            "liquidityPoolDailySnapshots(first: 1000, orderBy: timestamp, orderDirection: desc, where: {pool: $poolId})"
        ));
        assert!(bundle.query.contains(
            "swaps(first: 1000, orderBy: timestamp, orderDirection: desc, where: {pool: $poolId}) { hash timestamp amountInUSD }"
        ));
        assert!(bundle.query.starts_with(
            "query Data($poolId: String, $protocolId: String) { _meta { block { number } deployment } protocols {"
        ));
    }

    #[test]
    fn test_pools_query_orders_by_tvl() {
        let bundle = standard_bundle(
            &spec(),
            Vec::new(),
            FieldTable::default(),
            FieldTable::default(),
            Selection::field("liquidityPool"),
            Vec::new(),
        );
        assert_eq!(
            bundle.pools_query,
            "query Data { liquidityPools(first: 100, orderBy: totalValueLockedUSD, orderDirection: desc) { id name } }"
        );
    }
}
