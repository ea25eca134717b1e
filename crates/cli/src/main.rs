//! Subgraph Dashboard CLI - Inspect schema versions and query documents.

// Stdout is the command surface here.
#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_batch, run_overview, run_resolve, run_versions, run_windowed};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => run_resolve(&args, cli.format)?,
        Commands::Overview(args) => run_overview(&args, cli.format)?,
        Commands::Batch(args) => run_batch(&args, cli.format)?,
        Commands::Windowed(args) => run_windowed(&args, cli.format)?,
        Commands::Versions => run_versions(cli.format)?,
    }

    Ok(())
}
