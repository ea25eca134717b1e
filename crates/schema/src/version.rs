//! Schema versions and version-group derivation.
//!
//! Deployments self-report a semantic schema version such as `"1.3.2"`.
//! Patch revisions never change the field layout, so dispatch happens on the
//! coarsened `MAJOR.MINOR.0` bucket ([`VersionGroup`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// A semantic schema version as reported by a live deployment.
///
/// The permissive constructors ([`SchemaVersion::new`] and `From<&str>`)
/// accept any string; malformed input normalizes best-effort in
/// [`SchemaVersion::group`] and lands in the category's default mapping.
/// Callers that prefer to fail fast on malformed input should use
/// [`SchemaVersion::parse`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Wrap a version string without validating it.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Strict constructor: requires a numeric `MAJOR.MINOR.PATCH` triplet.
    pub fn parse(version: &str) -> Result<Self> {
        let segments: Vec<&str> = version.split('.').collect();
        let well_formed = segments.len() == 3
            && segments
                .iter()
                .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));
        if well_formed {
            Ok(Self(version.to_owned()))
        } else {
            Err(SchemaError::InvalidVersion(version.to_owned()))
        }
    }

    /// The raw version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Coarsen to the `MAJOR.MINOR.0` dispatch bucket.
    ///
    /// Drops the final (patch) segment, rejoins, and appends `.0`:
    /// `"3.0.3"` becomes `"3.0.0"`. Strings with fewer than three segments
    /// produce an underspecified group that no mapping matches, which the
    /// category builders treat as "unknown" via their default arm.
    pub fn group(&self) -> VersionGroup {
        let mut segments: Vec<&str> = self.0.split('.').collect();
        segments.pop();
        let mut group = segments.join(".");
        group.push_str(".0");
        VersionGroup(group)
    }
}

impl From<&str> for SchemaVersion {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `MAJOR.MINOR.0` dispatch key. Equality is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionGroup(String);

impl VersionGroup {
    /// The group as a string, for matching against [`groups`] labels.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Version-group labels matched by the category builders.
pub mod groups {
    pub const V1_0_0: &str = "1.0.0";
    pub const V1_1_0: &str = "1.1.0";
    pub const V1_2_0: &str = "1.2.0";
    pub const V1_3_0: &str = "1.3.0";
    pub const V2_0_0: &str = "2.0.0";
    pub const V3_0_0: &str = "3.0.0";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_drops_patch() {
        assert_eq!(SchemaVersion::new("3.0.3").group().as_str(), "3.0.0");
        assert_eq!(SchemaVersion::new("1.2.0").group().as_str(), "1.2.0");
        assert_eq!(SchemaVersion::new("2.0.1").group().as_str(), "2.0.0");
        assert_eq!(SchemaVersion::new("1.2.7").group().as_str(), "1.2.0");
    }

    #[test]
    fn test_group_is_best_effort_on_malformed_input() {
        // Two segments: the minor digit is dropped, leaving a group no
        // mapping matches, so resolution falls to the default arm.
        assert_eq!(SchemaVersion::new("1.2").group().as_str(), "1.0");
        assert_eq!(SchemaVersion::new("nonsense").group().as_str(), ".0");
    }

    #[test]
    fn test_parse_accepts_triplets_only() {
        assert!(SchemaVersion::parse("1.3.2").is_ok());
        assert!(SchemaVersion::parse("10.0.0").is_ok());
        assert!(SchemaVersion::parse("1.3").is_err());
        assert!(SchemaVersion::parse("1.3.x").is_err());
        assert!(SchemaVersion::parse("1..3").is_err());
        assert!(SchemaVersion::parse("").is_err());
    }
}
