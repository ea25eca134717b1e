//! Ten-slot batched pool metadata queries.
//!
//! The pool overview table needs token names and reward token metadata for
//! every visible row. Rather than a round trip per pool, one document
//! aliases ten lookups `pool1..pool10`. The arity is fixed: callers always
//! bind all ten id variables, pointing unused slots at a don't-care id.

use crate::category::ProtocolCategory;
use crate::definition::QueryDocument;
use crate::document::{Argument, Document, Selection};

const SLOT_VARIABLES: [(&str, &str); 10] = [
    ("pool1", "$pool1Id"),
    ("pool2", "$pool2Id"),
    ("pool3", "$pool3Id"),
    ("pool4", "$pool4Id"),
    ("pool5", "$pool5Id"),
    ("pool6", "$pool6Id"),
    ("pool7", "$pool7Id"),
    ("pool8", "$pool8Id"),
    ("pool9", "$pool9Id"),
    ("pool10", "$pool10Id"),
];

/// Build the ten-pool token metadata document for a category.
pub fn build_batch(category: ProtocolCategory) -> QueryDocument {
    let (entity, input_token) = match category {
        ProtocolCategory::Exchange => ("liquidityPool", "inputTokens"),
        ProtocolCategory::Lending => ("market", "inputToken"),
        ProtocolCategory::Yield => ("vault", "inputToken"),
        // Everything else, derivatives included, goes through the generic
        // pool entity.
        ProtocolCategory::Bridge
        | ProtocolCategory::Perpetual
        | ProtocolCategory::Options
        | ProtocolCategory::Generic => ("pool", "inputTokens"),
    };

    let mut document = Document::new();
    for (_, variable) in SLOT_VARIABLES {
        document = document.variable(variable, "String!");
    }
    for (alias, variable) in SLOT_VARIABLES {
        document = document.select(
            Selection::field(entity)
                .alias(alias)
                .argument(Argument::variable("id", variable))
                .leaves(["id"])
                .select(Selection::field(input_token).leaves(["name", "symbol"]))
                .select(
                    Selection::field("rewardTokens")
                        .leaves(["id", "type"])
                        .select(
                            Selection::field("token").leaves(["decimals", "name", "symbol"]),
                        ),
                ),
        );
    }
    document.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lending_batch_uses_ten_market_aliases() {
        let doc = build_batch(ProtocolCategory::Lending);
        for (alias, variable) in SLOT_VARIABLES {
            assert!(doc.contains(&format!("{alias}: market(id: {variable})")));
        }
        assert_eq!(doc.matches("inputToken { name symbol }").count(), 10);
    }

    #[test]
    fn test_all_ten_variables_always_declared() {
        let doc = build_batch(ProtocolCategory::Bridge);
        assert!(doc.starts_with("query Data($pool1Id: String!, $pool2Id: String!"));
        assert!(doc.contains("$pool10Id: String!)"));
        assert!(doc.contains("pool10: pool(id: $pool10Id)"));
    }

    #[test]
    fn test_exchange_batch_selects_plural_input_tokens() {
        let doc = build_batch(ProtocolCategory::Exchange);
        assert!(doc.contains("pool1: liquidityPool(id: $pool1Id) { id inputTokens { name symbol } rewardTokens { id type token { decimals name symbol } } }"));
    }

    #[test]
    fn test_derivatives_route_through_the_generic_pool_entity() {
        for category in [ProtocolCategory::Perpetual, ProtocolCategory::Options] {
            let doc = build_batch(category);
            assert!(doc.contains("pool1: pool(id: $pool1Id)"), "{category:?}");
            assert!(!doc.contains("liquidityPool"), "{category:?}");
        }
        assert_eq!(
            build_batch(ProtocolCategory::Perpetual),
            build_batch(ProtocolCategory::Generic)
        );
    }
}
