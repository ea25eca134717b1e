//! Subgraph Dashboard Schema Library
//!
//! This crate resolves which data schema a DeFi subgraph deployment speaks
//! and generates the GraphQL query documents the dashboard needs against
//! that schema. Deployments self-report a protocol category and a semantic
//! schema version; field layouts changed across dozens of historical
//! revisions, so the resolver maps `(category, version)` onto a hardcoded
//! per-version-group mapping and composes the documents fresh on every call.
//!
//! # Example
//!
//! ```
//! use subgraph_dash_schema::{resolve_schema, ProtocolCategory, SchemaVersion};
//!
//! let version = SchemaVersion::new("3.0.3");
//! let schema = resolve_schema(ProtocolCategory::Exchange, &version);
//!
//! // Patch revisions never change the layout: 3.0.3 resolves as 3.0.0.
//! assert!(schema.protocol_fields.contains("totalLiquidityUSD"));
//! assert!(schema.financials_query.starts_with("query Data"));
//! ```
//!
//! Resolution is pure and deterministic. The same inputs always produce
//! byte-identical documents, and nothing here performs I/O; executing the
//! documents against an endpoint is the caller's concern.

pub mod batch;
pub mod category;
pub mod definition;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod fields;
pub mod overview;
pub mod version;
pub mod windowed;

mod categories;
mod compose;

pub use batch::build_batch;
pub use category::ProtocolCategory;
pub use definition::{QueryDocument, SchemaDefinition};
pub use dispatch::{resolve_schema, resolve_schema_for_label};
pub use error::{Result, SchemaError};
pub use fields::FieldTable;
pub use overview::build_overview;
pub use version::{SchemaVersion, VersionGroup};
pub use windowed::build_windowed;
