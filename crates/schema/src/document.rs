//! Typed construction of GraphQL query documents.
//!
//! Documents are assembled as an in-memory selection tree and serialized
//! once, rather than concatenated as strings. Serialization is canonical and
//! deterministic: the same tree always renders the same bytes, so resolved
//! schema bundles can be compared byte-for-byte.
//!
//! Variables are declared on the document and referenced by `$name` inside
//! arguments; nothing in this crate ever binds them.

use std::fmt;

/// A single argument on a selection, e.g. `first: 1000` or
/// `where: {pool: $poolId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Integer literal argument.
    Int {
        name: &'static str,
        value: i64,
    },
    /// Bare enum value argument (`orderDirection: desc`).
    Enum {
        name: &'static str,
        value: &'static str,
    },
    /// Reference to a document variable (`id: $poolId`).
    Variable {
        name: &'static str,
        variable: &'static str,
    },
    /// Pre-rendered object argument (`where: {market: $poolId}`).
    Block {
        name: &'static str,
        body: String,
    },
}

impl Argument {
    pub fn int(name: &'static str, value: i64) -> Self {
        Self::Int { name, value }
    }

    pub fn enumeration(name: &'static str, value: &'static str) -> Self {
        Self::Enum { name, value }
    }

    pub fn variable(name: &'static str, variable: &'static str) -> Self {
        Self::Variable { name, variable }
    }

    pub fn block(name: &'static str, body: impl Into<String>) -> Self {
        Self::Block {
            name,
            body: body.into(),
        }
    }

    /// `where: {field: $variable}` — the common scoping filter.
    pub fn filter(field: &'static str, variable: &'static str) -> Self {
        Self::block("where", format!("{{{field}: {variable}}}"))
    }

    fn write(&self, out: &mut String) {
        match self {
            Self::Int { name, value } => out.push_str(&format!("{name}: {value}")),
            Self::Enum { name, value } | Self::Variable {
                name,
                variable: value,
            } => out.push_str(&format!("{name}: {value}")),
            Self::Block { name, body } => out.push_str(&format!("{name}: {body}")),
        }
    }
}

/// A named selection with optional alias, arguments, and nested selections.
/// A selection with no children renders as a bare field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    alias: Option<String>,
    arguments: Vec<Argument>,
    selections: Vec<Selection>,
}

impl Selection {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: Vec::new(),
            selections: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn select(mut self, child: Selection) -> Self {
        self.selections.push(child);
        self
    }

    /// Append leaf fields in iteration order.
    pub fn leaves<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .extend(names.into_iter().map(|name| Selection::field(name)));
        self
    }

    fn write(&self, out: &mut String) {
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(&self.name);
        if !self.arguments.is_empty() {
            out.push('(');
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                argument.write(out);
            }
            out.push(')');
        }
        if !self.selections.is_empty() {
            out.push_str(" { ");
            for (i, child) in self.selections.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                child.write(out);
            }
            out.push_str(" }");
        }
    }
}

/// A complete query document: operation name, variable declarations, and
/// top-level selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    variables: Vec<(&'static str, &'static str)>,
    selections: Vec<Selection>,
}

impl Document {
    /// Start an empty document. All dashboard documents share the operation
    /// name `Data`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable, e.g. `("$poolId", "String")`.
    pub fn variable(mut self, name: &'static str, signature: &'static str) -> Self {
        self.variables.push((name, signature));
        self
    }

    pub fn select(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Serialize to the canonical single-line text form.
    pub fn build(&self) -> String {
        let mut out = String::from("query Data");
        if !self.variables.is_empty() {
            out.push('(');
            for (i, (name, signature)) in self.variables.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format!("{name}: {signature}"));
            }
            out.push(')');
        }
        out.push_str(" { ");
        for (i, selection) in self.selections.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            selection.write(&mut out);
        }
        out.push_str(" }");
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_fields_render_bare() {
        let doc = Document::new().select(
            Selection::field("pools")
                .argument(Argument::int("first", 100))
                .leaves(["id", "name"]),
        );
        assert_eq!(doc.build(), "query Data { pools(first: 100) { id name } }");
    }

    #[test]
    fn test_variables_aliases_and_nesting() {
        let doc = Document::new()
            .variable("$poolId", "String")
            .select(
                Selection::field("liquidityPool")
                    .alias("pool1")
                    .argument(Argument::variable("id", "$poolId"))
                    .select(Selection::field("inputTokens").leaves(["name", "symbol"])),
            );
        assert_eq!(
            doc.build(),
            "query Data($poolId: String) { pool1: liquidityPool(id: $poolId) { inputTokens { name symbol } } }"
        );
    }

    #[test]
    fn test_filter_argument() {
        let doc = Document::new().select(
            Selection::field("marketDailySnapshots")
                .argument(Argument::int("first", 1000))
                .argument(Argument::filter("market", "$poolId"))
                .leaves(["timestamp"]),
        );
        assert_eq!(
            doc.build(),
            "query Data { marketDailySnapshots(first: 1000, where: {market: $poolId}) { timestamp } }"
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let doc = Document::new().select(
            Selection::field("financialsDailySnapshots")
                .argument(Argument::int("first", 1000))
                .argument(Argument::enumeration("orderBy", "timestamp"))
                .argument(Argument::enumeration("orderDirection", "desc"))
                .leaves(["totalValueLockedUSD", "timestamp"]),
        );
        assert_eq!(doc.build(), doc.build());
    }
}
