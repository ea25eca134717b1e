//! Per-category schema builders.
//!
//! Each module is a version-group switch over that category's historically
//! supported schema revisions. The default arms differ deliberately between
//! categories (some pin an old revision, some track the latest); changing a
//! default silently reshapes what long-standing deployments resolve to.

pub(crate) mod bridge;
pub(crate) mod exchange;
pub(crate) mod generic;
pub(crate) mod lending;
pub(crate) mod options;
pub(crate) mod perpetual;
pub(crate) mod yield_agg;
