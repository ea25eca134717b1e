//! Insertion-ordered field tables.

use serde::Serialize;

/// Ordered mapping from field name to GraphQL type signature.
///
/// Order is load-bearing: composed fragments list fields in table order and
/// the consuming table renderer infers column layout positionally from the
/// names. The type signatures are documentation for client-side validation
/// only; they never appear in generated query text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldTable(Vec<(&'static str, &'static str)>);

impl FieldTable {
    pub fn new(pairs: Vec<(&'static str, &'static str)>) -> Self {
        Self(pairs)
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(name, _)| *name)
    }

    /// Look up the type signature recorded for a field.
    pub fn signature(&self, name: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, signature)| *signature)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.signature(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// (name, type signature) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    /// Append one field, keeping insertion order. Used by builders that
    /// extend a base table for a later schema revision.
    #[must_use]
    pub fn with(mut self, name: &'static str, signature: &'static str) -> Self {
        self.0.push((name, signature));
        self
    }
}

/// Build a [`FieldTable`] from `"name" => "TypeSignature"` pairs,
/// preserving the written order.
#[macro_export]
macro_rules! field_table {
    ($($name:literal => $signature:literal),* $(,)?) => {
        $crate::fields::FieldTable::new(vec![$(($name, $signature)),*])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_preserves_insertion_order() {
        let table = field_table! {
            "totalValueLockedUSD" => "BigDecimal!",
            "timestamp" => "BigInt!",
            "id" => "ID!",
        };
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, ["totalValueLockedUSD", "timestamp", "id"]);
        assert_eq!(table.signature("timestamp"), Some("BigInt!"));
        assert!(!table.contains("blockNumber"));
    }
}
