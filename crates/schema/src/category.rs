//! Protocol categories and their deployment labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, SchemaError};

/// The business-domain family of a protocol deployment.
///
/// The label strings (`"EXCHANGE"`, `"LENDING"`, ...) are the case-sensitive
/// type tags deployments self-report. Resolution never rejects a label:
/// [`ProtocolCategory::from_label`] maps anything unknown to [`Generic`],
/// matching how the dashboard has always treated unrecognized protocol
/// types. Stricter callers can use [`ProtocolCategory::parse_label`].
///
/// [`Generic`]: ProtocolCategory::Generic
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum ProtocolCategory {
    #[strum(serialize = "EXCHANGE")]
    Exchange,
    #[strum(serialize = "LENDING")]
    Lending,
    #[strum(serialize = "YIELD")]
    Yield,
    #[strum(serialize = "BRIDGE")]
    Bridge,
    #[strum(serialize = "PERPETUAL")]
    Perpetual,
    #[strum(serialize = "OPTION")]
    Options,
    #[strum(serialize = "GENERIC")]
    Generic,
}

impl ProtocolCategory {
    /// Lenient mapping from a deployment's self-reported type label.
    /// Unknown labels resolve to [`ProtocolCategory::Generic`].
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or(Self::Generic)
    }

    /// Strict mapping that rejects unknown labels.
    pub fn parse_label(label: &str) -> Result<Self> {
        Self::from_str(label).map_err(|_| SchemaError::UnknownCategory(label.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels_round_trip() {
        for category in ProtocolCategory::iter() {
            let label = category.to_string();
            assert_eq!(ProtocolCategory::from_label(&label), category);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_generic() {
        assert_eq!(
            ProtocolCategory::from_label("NFT_MARKETPLACE"),
            ProtocolCategory::Generic
        );
        // Labels are case-sensitive.
        assert_eq!(
            ProtocolCategory::from_label("exchange"),
            ProtocolCategory::Generic
        );
    }

    #[test]
    fn test_parse_label_rejects_unknown() {
        assert!(ProtocolCategory::parse_label("EXCHANGE").is_ok());
        assert!(ProtocolCategory::parse_label("STAKING").is_err());
    }
}
