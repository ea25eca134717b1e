//! Paginated top-pools listing queries.
//!
//! The list page keeps its own version switch, separate from the full
//! bundle builders, because the two surfaces have gained fields at
//! different version numbers. Note the asymmetry for Exchange: this switch
//! defaults unmatched groups to 3.0.0 while the detail builder defaults to
//! 1.3.0. That drift is longstanding observed behavior and is kept as is.

use crate::category::ProtocolCategory;
use crate::definition::QueryDocument;
use crate::document::{Argument, Document, Selection};
use crate::version::{groups, SchemaVersion};

/// Build the "top 10 pools" listing document for one deployment.
///
/// The `skip` argument mirrors the page offset the caller will bind; the
/// document always declares `$skipAmt` and never inlines the value, so the
/// same document serves every page.
pub fn build_overview(
    category: ProtocolCategory,
    version: &SchemaVersion,
    _skip: u32,
) -> QueryDocument {
    let (entity, fields) = match category {
        ProtocolCategory::Exchange => exchange_listing(version),
        ProtocolCategory::Lending => (
            "markets",
            vec![
                "id",
                "name",
                "totalValueLockedUSD",
                "totalDepositBalanceUSD",
                "totalBorrowBalanceUSD",
                "cumulativeTotalRevenueUSD",
            ],
        ),
        ProtocolCategory::Yield => (
            "vaults",
            vec![
                "id",
                "name",
                "symbol",
                "depositLimit",
                "totalValueLockedUSD",
                "pricePerShare",
            ],
        ),
        ProtocolCategory::Bridge => (
            "pools",
            vec![
                "id",
                "name",
                "symbol",
                "totalValueLockedUSD",
                "cumulativeVolumeInUSD",
                "cumulativeVolumeOutUSD",
                "netVolumeUSD",
            ],
        ),
        ProtocolCategory::Perpetual | ProtocolCategory::Options => (
            "liquidityPools",
            vec![
                "id",
                "name",
                "symbol",
                "totalValueLockedUSD",
                "cumulativeVolumeUSD",
                "openInterestUSD",
            ],
        ),
        ProtocolCategory::Generic => {
            ("pools", vec!["id", "name", "symbol", "totalValueLockedUSD"])
        }
    };

    Document::new()
        .variable("$skipAmt", "Int")
        .select(
            Selection::field(entity)
                .argument(Argument::int("first", 10))
                .argument(Argument::variable("skip", "$skipAmt"))
                .argument(Argument::enumeration("orderBy", "totalValueLockedUSD"))
                .argument(Argument::enumeration("orderDirection", "desc"))
                .leaves(fields),
        )
        .build()
}

fn exchange_listing(version: &SchemaVersion) -> (&'static str, Vec<&'static str>) {
    let base = vec![
        "id",
        "name",
        "symbol",
        "totalValueLockedUSD",
        "cumulativeVolumeUSD",
        "cumulativeSupplySideRevenueUSD",
        "cumulativeProtocolSideRevenueUSD",
        "cumulativeTotalRevenueUSD",
    ];
    match version.group().as_str() {
        groups::V1_3_0 | groups::V2_0_0 => ("liquidityPools", base),
        // 3.0.0 and everything unrecognized.
        _ => {
            let mut fields = base;
            fields.push("totalLiquidityUSD");
            fields.push("activeLiquidityUSD");
            ("liquidityPools", fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_stays_a_variable() {
        let doc = build_overview(
            ProtocolCategory::Lending,
            &SchemaVersion::new("3.0.0"),
            20,
        );
        assert!(doc.starts_with("query Data($skipAmt: Int) { markets(first: 10, skip: $skipAmt, orderBy: totalValueLockedUSD, orderDirection: desc)"));
        assert!(!doc.contains("20"));
    }

    #[test]
    fn test_exchange_listing_defaults_to_latest() {
        let unknown = build_overview(
            ProtocolCategory::Exchange,
            &SchemaVersion::new("9.9.9"),
            0,
        );
        let v30 = build_overview(ProtocolCategory::Exchange, &SchemaVersion::new("3.0.3"), 0);
        let v13 = build_overview(ProtocolCategory::Exchange, &SchemaVersion::new("1.3.0"), 0);
        assert_eq!(unknown, v30);
        assert!(v30.contains("totalLiquidityUSD activeLiquidityUSD"));
        assert!(!v13.contains("totalLiquidityUSD"));
    }
}
