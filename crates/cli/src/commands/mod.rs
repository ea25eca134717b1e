//! Command implementations.

pub mod queries;
pub mod resolve;
pub mod versions;

pub use queries::{run_batch, run_overview, run_windowed};
pub use resolve::run_resolve;
pub use versions::run_versions;
