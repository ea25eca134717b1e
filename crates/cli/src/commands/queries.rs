//! Standalone query builder commands: overview, batch, windowed.

use anyhow::Result;
use subgraph_dash_schema::{build_batch, build_overview, build_windowed, SchemaVersion};

use crate::cli::{BatchArgs, OutputFormat, OverviewArgs, WindowedArgs};

fn print_document(document: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", document),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({ "query": document }))?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn run_overview(args: &OverviewArgs, format: OutputFormat) -> Result<()> {
    let version = SchemaVersion::new(args.version.as_str());
    let document = build_overview(args.category.0, &version, 0);
    print_document(&document, format)
}

pub fn run_batch(args: &BatchArgs, format: OutputFormat) -> Result<()> {
    let document = build_batch(args.category.0);
    print_document(&document, format)
}

pub fn run_windowed(args: &WindowedArgs, format: OutputFormat) -> Result<()> {
    let version = SchemaVersion::new(args.version.as_str());
    let document = build_windowed(
        args.category.0,
        &version,
        args.timestamp_gt,
        args.timestamp_lt,
        &args.entity,
    );
    print_document(&document, format)
}
