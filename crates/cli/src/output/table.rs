//! Table formatting for entity listings and the version matrix.

use subgraph_dash_schema::SchemaDefinition;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct EntityRow {
    #[tabled(rename = "Entity")]
    entity: String,
    #[tabled(rename = "Fields")]
    fields: usize,
    #[tabled(rename = "Leading Columns")]
    leading: String,
}

/// One row of the supported-versions listing.
pub struct VersionMatrixEntry {
    pub category: &'static str,
    pub supported: &'static [&'static str],
    pub default: &'static str,
}

#[derive(Tabled)]
struct VersionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Supported Groups")]
    supported: String,
    #[tabled(rename = "Fallback")]
    default: String,
}

fn leading_columns<'a>(names: impl Iterator<Item = &'a str>, max: usize) -> String {
    let mut shown: Vec<&str> = names.take(max + 1).collect();
    let truncated = shown.len() > max;
    shown.truncate(max);
    let mut out = shown.join(", ");
    if truncated {
        out.push_str(", ...");
    }
    out
}

pub fn format_entities_table(schema: &SchemaDefinition) -> String {
    if schema.entities_data.is_empty() {
        return "No timeseries entities.".to_string();
    }

    let rows: Vec<EntityRow> = schema
        .entities_data
        .iter()
        .map(|(entity, table)| EntityRow {
            entity: entity.to_string(),
            fields: table.len(),
            leading: leading_columns(table.names(), 4),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

pub fn format_version_matrix(entries: &[VersionMatrixEntry]) -> String {
    let rows: Vec<VersionRow> = entries
        .iter()
        .map(|entry| VersionRow {
            category: entry.category.to_string(),
            supported: entry.supported.join(", "),
            default: entry.default.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use subgraph_dash_schema::{resolve_schema, ProtocolCategory, SchemaVersion};

    #[test]
    fn test_entities_table_lists_every_entity() {
        let schema = resolve_schema(ProtocolCategory::Yield, &SchemaVersion::new("1.3.0"));
        let rendered = format_entities_table(&schema);
        for (entity, _) in &schema.entities_data {
            assert!(rendered.contains(entity), "{entity}");
        }
    }

    #[test]
    fn test_leading_columns_truncate() {
        let names = ["a", "b", "c", "d", "e", "f"].into_iter();
        assert_eq!(leading_columns(names, 4), "a, b, c, d, ...");
        let short = ["a", "b"].into_iter();
        assert_eq!(leading_columns(short, 4), "a, b");
    }
}
