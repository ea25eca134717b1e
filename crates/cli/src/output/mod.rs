//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::format_bundle_detail;
pub use table::{format_entities_table, format_version_matrix, VersionMatrixEntry};
