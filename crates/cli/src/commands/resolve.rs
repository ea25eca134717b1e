//! Schema resolution command.

use anyhow::{bail, Result};
use subgraph_dash_schema::{resolve_schema, SchemaDefinition, SchemaVersion};

use crate::cli::{OutputFormat, QueryName, ResolveArgs};
use crate::output::format_bundle_detail;

pub fn run_resolve(args: &ResolveArgs, format: OutputFormat) -> Result<()> {
    let version = SchemaVersion::new(args.version.as_str());
    let schema = resolve_schema(args.category.0, &version);

    if let Some(query) = args.query {
        return print_query(&schema, query, format, &args.version);
    }

    match format {
        OutputFormat::Table => {
            println!("{}", format_bundle_detail(args.category.0, &version, &schema));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schema)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_query(
    schema: &SchemaDefinition,
    query: QueryName,
    format: OutputFormat,
    version: &str,
) -> Result<()> {
    let document = match query {
        QueryName::Main => &schema.query,
        QueryName::Financials => &schema.financials_query,
        QueryName::DailyUsage => &schema.daily_usage_query,
        QueryName::HourlyUsage => &schema.hourly_usage_query,
        QueryName::Protocol => &schema.protocol_table_query,
        QueryName::Pools => &schema.pools_query,
        QueryName::PoolTimeseries => &schema.pool_timeseries_query,
        QueryName::Positions => match &schema.positions_query {
            Some(document) => document,
            None => bail!("schema version {} does not track positions", version),
        },
    };

    match format {
        OutputFormat::Table => println!("{}", document),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "query": document }))?;
            println!("{}", json);
        }
    }

    Ok(())
}
