//! Detailed output formatting for a resolved schema bundle.

use colored::Colorize;
use subgraph_dash_schema::{ProtocolCategory, SchemaDefinition, SchemaVersion};

use crate::output::format_entities_table;

fn format_count(label: &str, count: usize) -> String {
    format!("  {:<18} {}\n", label, count)
}

pub fn format_bundle_detail(
    category: ProtocolCategory,
    version: &SchemaVersion,
    schema: &SchemaDefinition,
) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!(
        "{}\n",
        format!("{} @ {} (resolved as {})", category, version, version.group()).bold()
    ));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    // Protocol and pool field tables
    output.push_str(&format!("{}\n", "Field Tables".cyan().bold()));
    output.push_str(&format_count("Protocol fields:", schema.protocol_fields.len()));
    output.push_str(&format_count("Pool fields:", schema.pool_data.len()));
    output.push('\n');

    // Timeseries entities
    output.push_str(&format!("{}\n", "Timeseries Entities".cyan().bold()));
    output.push_str(&format_entities_table(schema));
    output.push_str("\n\n");

    // Events
    output.push_str(&format!("{}\n", "Events".cyan().bold()));
    if schema.events.is_empty() {
        output.push_str("  none\n");
    } else {
        for event in &schema.events {
            output.push_str(&format!("  {}\n", event));
        }
    }
    output.push('\n');

    // Documents
    output.push_str(&format!("{}\n", "Query Documents".cyan().bold()));
    let documents = [
        ("main", Some(&schema.query)),
        ("financials", Some(&schema.financials_query)),
        ("daily-usage", Some(&schema.daily_usage_query)),
        ("hourly-usage", Some(&schema.hourly_usage_query)),
        ("protocol", Some(&schema.protocol_table_query)),
        ("pools", Some(&schema.pools_query)),
        ("pool-timeseries", Some(&schema.pool_timeseries_query)),
        ("positions", schema.positions_query.as_ref()),
    ];
    for (name, document) in documents {
        match document {
            Some(document) => {
                output.push_str(&format!("  {:<18} {} bytes\n", name, document.len()));
            }
            None => {
                output.push_str(&format!("  {:<18} not tracked at this version\n", name));
            }
        }
    }

    output
}
