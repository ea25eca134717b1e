//! CLI argument definitions using clap.

use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use subgraph_dash_schema::ProtocolCategory;

/// Subgraph Dashboard CLI - Inspect schema versions and query documents
#[derive(Parser, Debug)]
#[command(name = "subgraph-dash")]
#[command(about = "CLI tool for inspecting subgraph schema versions and their query documents", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the full schema bundle for a category and version
    Resolve(ResolveArgs),
    /// Print the paginated top-pools listing query
    Overview(OverviewArgs),
    /// Print the ten-slot batched pool metadata query
    Batch(BatchArgs),
    /// Print a time-bounded financials snapshot query
    Windowed(WindowedArgs),
    /// Show the supported schema version matrix
    Versions,
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Protocol category (e.g. exchange, lending, yield)
    pub category: CategoryArg,

    /// Schema version as reported by the deployment (e.g. 3.0.1)
    pub version: String,

    /// Print a single query document instead of the bundle summary
    #[arg(long)]
    pub query: Option<QueryName>,
}

#[derive(Parser, Debug)]
pub struct OverviewArgs {
    /// Protocol category
    pub category: CategoryArg,

    /// Schema version
    pub version: String,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Protocol category
    pub category: CategoryArg,
}

#[derive(Parser, Debug)]
pub struct WindowedArgs {
    /// Protocol category
    pub category: CategoryArg,

    /// Schema version
    pub version: String,

    /// Exclusive lower timestamp bound (unix seconds)
    pub timestamp_gt: i64,

    /// Exclusive upper timestamp bound (unix seconds)
    pub timestamp_lt: i64,

    /// Snapshot entity to window over (unmapped names fall back to
    /// protocol financials)
    #[arg(long, default_value = "financialsDailySnapshots")]
    pub entity: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// The bundle documents addressable via `resolve --query`.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum QueryName {
    Main,
    Financials,
    DailyUsage,
    HourlyUsage,
    Protocol,
    Pools,
    PoolTimeseries,
    Positions,
}

/// Wrapper for ProtocolCategory that implements FromStr with aliases
#[derive(Clone, Copy, Debug)]
pub struct CategoryArg(pub ProtocolCategory);

impl FromStr for CategoryArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.to_lowercase().as_str() {
            "exchange" | "dex" | "dex-amm" => ProtocolCategory::Exchange,
            "lending" => ProtocolCategory::Lending,
            "yield" | "yield-aggregator" | "vaults" => ProtocolCategory::Yield,
            "bridge" => ProtocolCategory::Bridge,
            "perpetual" | "perp" | "derivatives-perpfutures" => ProtocolCategory::Perpetual,
            "options" | "option" | "derivatives-options" => ProtocolCategory::Options,
            "generic" => ProtocolCategory::Generic,
            _ => return Err(format!("Unknown category: {}", s)),
        };
        Ok(CategoryArg(category))
    }
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
