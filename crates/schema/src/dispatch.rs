//! Top-level schema resolution.
//!
//! The dispatcher is the only place version-group math meets category
//! routing; pages call [`resolve_schema`] and nothing else.

use crate::categories;
use crate::category::ProtocolCategory;
use crate::definition::SchemaDefinition;
use crate::version::SchemaVersion;

/// Resolve the schema bundle for one deployment.
///
/// Pure and total: unknown version groups land in the category's default
/// mapping and the result is byte-identical across calls.
pub fn resolve_schema(category: ProtocolCategory, version: &SchemaVersion) -> SchemaDefinition {
    let group = version.group();
    match category {
        ProtocolCategory::Exchange => categories::exchange::build(&group),
        ProtocolCategory::Lending => categories::lending::build(&group),
        ProtocolCategory::Yield => categories::yield_agg::build(&group),
        ProtocolCategory::Bridge => categories::bridge::build(&group),
        ProtocolCategory::Perpetual => categories::perpetual::build(&group),
        ProtocolCategory::Options => categories::options::build(&group),
        ProtocolCategory::Generic => categories::generic::build(&group),
    }
}

/// [`resolve_schema`] keyed by a deployment's self-reported type label.
/// Unknown labels resolve through the Generic builder.
pub fn resolve_schema_for_label(label: &str, version: &SchemaVersion) -> SchemaDefinition {
    resolve_schema(ProtocolCategory::from_label(label), version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_deterministic() {
        let version = SchemaVersion::new("2.0.1");
        let a = resolve_schema(ProtocolCategory::Lending, &version);
        let b = resolve_schema(ProtocolCategory::Lending, &version);
        assert_eq!(a.query, b.query);
        assert_eq!(a.financials_query, b.financials_query);
        assert_eq!(a.pool_timeseries_query, b.pool_timeseries_query);
        assert_eq!(a.positions_query, b.positions_query);
    }

    #[test]
    fn test_unknown_label_routes_to_generic() {
        let version = SchemaVersion::new("1.3.0");
        let unknown = resolve_schema_for_label("NFT_MARKETPLACE", &version);
        let generic = resolve_schema(ProtocolCategory::Generic, &version);
        assert_eq!(unknown.query, generic.query);
    }

    #[test]
    fn test_patch_revisions_share_a_mapping() {
        let a = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("3.0.0"));
        let b = resolve_schema(ProtocolCategory::Exchange, &SchemaVersion::new("3.0.3"));
        assert_eq!(a.query, b.query);
    }
}
