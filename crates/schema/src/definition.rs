//! The resolved schema bundle handed to dashboard pages.

use serde::Serialize;

use crate::fields::FieldTable;

/// Serialized GraphQL query text, ready to POST to a subgraph endpoint.
pub type QueryDocument = String;

/// Everything a dashboard page needs to render one protocol deployment at
/// one schema version: the timeseries entity list, per-entity field tables,
/// and the full set of pre-built query documents.
///
/// Bundles are plain data. Resolving the same category and version twice
/// yields byte-identical documents, so bundles can be cached or diffed
/// freely.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDefinition {
    /// Timeseries entity names in presentation order.
    pub entities: Vec<&'static str>,
    /// Field table per entry of [`entities`](Self::entities), same order.
    pub entities_data: Vec<(&'static str, FieldTable)>,
    /// Fields selected on the protocol entity.
    pub protocol_fields: FieldTable,
    /// Fields selected on the pool entity.
    pub pool_data: FieldTable,
    /// Event entity names queried per pool.
    pub events: Vec<&'static str>,
    /// Main per-pool query: metadata, timeseries, events, pool lookup.
    pub query: QueryDocument,
    /// Protocol-wide financial snapshots.
    pub financials_query: QueryDocument,
    /// Hourly usage metrics snapshots.
    pub hourly_usage_query: QueryDocument,
    /// Daily usage metrics snapshots.
    pub daily_usage_query: QueryDocument,
    /// Single-protocol lookup for the protocol table page.
    pub protocol_table_query: QueryDocument,
    /// Top-100 pool listing by TVL.
    pub pools_query: QueryDocument,
    /// Daily plus hourly snapshots scoped to one pool.
    pub pool_timeseries_query: QueryDocument,
    /// Open/closed position listing, on versions that track positions.
    pub positions_query: Option<QueryDocument>,
}

impl SchemaDefinition {
    /// Field table recorded for a timeseries entity, if the entity exists at
    /// this version.
    pub fn entity_fields(&self, entity: &str) -> Option<&FieldTable> {
        self.entities_data
            .iter()
            .find(|(name, _)| *name == entity)
            .map(|(_, table)| table)
    }
}
