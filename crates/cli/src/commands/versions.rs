//! Supported version matrix command.

use anyhow::Result;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::output::{format_version_matrix, VersionMatrixEntry};

/// Version groups with a dedicated mapping per category, plus the group an
/// unmatched version falls back to.
pub const VERSION_MATRIX: &[VersionMatrixEntry] = &[
    VersionMatrixEntry {
        category: "EXCHANGE",
        supported: &["1.3.0", "2.0.0", "3.0.0"],
        default: "1.3.0",
    },
    VersionMatrixEntry {
        category: "LENDING",
        supported: &["1.2.0", "2.0.0", "3.0.0"],
        default: "3.0.0",
    },
    VersionMatrixEntry {
        category: "YIELD",
        supported: &["1.2.0", "1.3.0"],
        default: "1.3.0",
    },
    VersionMatrixEntry {
        category: "BRIDGE",
        supported: &["1.1.0"],
        default: "1.1.0",
    },
    VersionMatrixEntry {
        category: "PERPETUAL",
        supported: &["1.0.0", "1.1.0"],
        default: "1.1.0",
    },
    VersionMatrixEntry {
        category: "OPTION",
        supported: &["1.1.0", "1.3.0"],
        default: "1.3.0",
    },
    VersionMatrixEntry {
        category: "GENERIC",
        supported: &["1.2.0", "1.3.0"],
        default: "1.3.0",
    },
];

pub fn run_versions(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_version_matrix(VERSION_MATRIX));
        }
        OutputFormat::Json => {
            let entries: Vec<_> = VERSION_MATRIX
                .iter()
                .map(|entry| {
                    json!({
                        "category": entry.category,
                        "supported": entry.supported,
                        "default": entry.default,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
