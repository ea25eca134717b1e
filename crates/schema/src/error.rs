//! Error types for boundary validation.
//!
//! Schema resolution itself never fails: unknown version groups take each
//! category's default mapping and unknown category labels dispatch to the
//! generic builder. These errors exist for callers that want strict
//! validation at their own boundary before handing input to the resolver.

use thiserror::Error;

/// Errors surfaced by the strict constructors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Version string is not a dotted `MAJOR.MINOR.PATCH` triplet.
    #[error("invalid schema version: {0}")]
    InvalidVersion(String),

    /// Label does not match any known protocol category.
    #[error("unknown protocol category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
