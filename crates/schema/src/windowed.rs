//! Time-bounded snapshot queries for backfill-style fetches.
//!
//! Only the protocol financials snapshot is mapped today. The entity name
//! parameter is accepted so callers can pass whatever entity the page was
//! looking at, but every value currently resolves to
//! `financialsDailySnapshots`; the permissiveness is part of the contract.
//!
//! The Exchange arm matches three version groups that select identical
//! fields. The split is kept so a future field change per group has an
//! obvious place to land.

use crate::category::ProtocolCategory;
use crate::definition::QueryDocument;
use crate::document::{Argument, Document, Selection};
use crate::version::{groups, SchemaVersion};

const WINDOWED_ENTITY: &str = "financialsDailySnapshots";

/// Build a financials snapshot query bounded to `(timestamp_gt, timestamp_lt)`.
///
/// Bounds are inlined as integer literals rather than declared as
/// variables; windowed fetches are fire-and-forget with a fresh document
/// per window.
pub fn build_windowed(
    category: ProtocolCategory,
    version: &SchemaVersion,
    timestamp_gt: i64,
    timestamp_lt: i64,
    _entity_name: &str,
) -> QueryDocument {
    let fields = windowed_fields(category, version);
    Document::new()
        .select(
            Selection::field(WINDOWED_ENTITY)
                .argument(Argument::int("first", 1000))
                .argument(Argument::block(
                    "where",
                    format!("{{timestamp_gt: {timestamp_gt}, timestamp_lt: {timestamp_lt}}}"),
                ))
                .argument(Argument::enumeration("orderBy", "timestamp"))
                .argument(Argument::enumeration("orderDirection", "asc"))
                .leaves(fields),
        )
        .build()
}

fn windowed_fields(category: ProtocolCategory, version: &SchemaVersion) -> Vec<&'static str> {
    match category {
        ProtocolCategory::Exchange => match version.group().as_str() {
            groups::V2_0_0 => exchange_windowed_fields(),
            groups::V3_0_0 => exchange_windowed_fields(),
            _ => exchange_windowed_fields(),
        },
        ProtocolCategory::Lending => match version.group().as_str() {
            groups::V1_2_0 => vec![
                "totalValueLockedUSD",
                "mintedTokenSupplies",
                "dailySupplySideRevenueUSD",
                "dailyProtocolSideRevenueUSD",
                "dailyTotalRevenueUSD",
                "dailyLiquidateUSD",
                "timestamp",
            ],
            _ => vec![
                "totalValueLockedUSD",
                "mintedTokenSupplies",
                "dailySupplySideRevenueUSD",
                "dailyProtocolSideRevenueUSD",
                "dailyTotalRevenueUSD",
                "dailyDepositUSD",
                "dailyBorrowUSD",
                "dailyLiquidateUSD",
                "timestamp",
            ],
        },
        ProtocolCategory::Perpetual | ProtocolCategory::Options => vec![
            "totalValueLockedUSD",
            "dailyVolumeUSD",
            "cumulativeVolumeUSD",
            "dailySupplySideRevenueUSD",
            "dailyProtocolSideRevenueUSD",
            "dailyTotalRevenueUSD",
            "timestamp",
        ],
        ProtocolCategory::Bridge => vec![
            "totalValueLockedUSD",
            "dailySupplySideRevenueUSD",
            "dailyProtocolSideRevenueUSD",
            "dailyTotalRevenueUSD",
            "cumulativeVolumeInUSD",
            "cumulativeVolumeOutUSD",
            "netVolumeUSD",
            "timestamp",
        ],
        ProtocolCategory::Yield | ProtocolCategory::Generic => vec![
            "totalValueLockedUSD",
            "dailySupplySideRevenueUSD",
            "dailyProtocolSideRevenueUSD",
            "dailyTotalRevenueUSD",
            "timestamp",
        ],
    }
}

fn exchange_windowed_fields() -> Vec<&'static str> {
    vec![
        "totalValueLockedUSD",
        "dailyVolumeUSD",
        "cumulativeVolumeUSD",
        "dailySupplySideRevenueUSD",
        "dailyProtocolSideRevenueUSD",
        "dailyTotalRevenueUSD",
        "timestamp",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_are_inlined() {
        let doc = build_windowed(
            ProtocolCategory::Yield,
            &SchemaVersion::new("1.3.0"),
            1_650_000_000,
            1_660_000_000,
            "financialsDailySnapshots",
        );
        assert_eq!(
            doc,
            "query Data { financialsDailySnapshots(first: 1000, where: {timestamp_gt: 1650000000, timestamp_lt: 1660000000}, orderBy: timestamp, orderDirection: asc) { totalValueLockedUSD dailySupplySideRevenueUSD dailyProtocolSideRevenueUSD dailyTotalRevenueUSD timestamp } }"
        );
    }

    #[test]
    fn test_unmapped_entity_falls_back_to_financials() {
        let version = SchemaVersion::new("2.0.0");
        let named = build_windowed(ProtocolCategory::Exchange, &version, 0, 1, "poolDailySnapshots");
        let default = build_windowed(ProtocolCategory::Exchange, &version, 0, 1, "");
        assert_eq!(named, default);
        assert!(named.contains("financialsDailySnapshots"));
    }

    #[test]
    fn test_exchange_version_arms_agree() {
        for v in ["1.3.0", "2.0.0", "3.0.3"] {
            let doc = build_windowed(
                ProtocolCategory::Exchange,
                &SchemaVersion::new(v),
                10,
                20,
                "financialsDailySnapshots",
            );
            assert!(doc.contains("dailyVolumeUSD"));
        }
    }

    #[test]
    fn test_lending_gains_flow_fields_after_1_2_0() {
        let old = build_windowed(
            ProtocolCategory::Lending,
            &SchemaVersion::new("1.2.1"),
            0,
            1,
            "",
        );
        let new = build_windowed(
            ProtocolCategory::Lending,
            &SchemaVersion::new("3.0.0"),
            0,
            1,
            "",
        );
        assert!(!old.contains("dailyBorrowUSD"));
        assert!(new.contains("dailyBorrowUSD"));
    }
}
