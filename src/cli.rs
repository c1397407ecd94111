//! Command-line definitions.

use crate::output::dump::DumpFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// openapi-inspect - Explore an OpenAPI 3.x document
#[derive(Debug, Parser)]
#[command(name = "openapi-inspect")]
#[command(version)]
#[command(about = "List routes, describe operations and print schemas of an OpenAPI 3.x document", long_about = None)]
pub struct Cli {
    /// OpenAPI document (YAML or JSON, optionally gzipped); `-` reads stdin
    pub file: String,

    /// Config file (default: ~/.config/openapi-inspect/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List all paths and methods
    Paths,

    /// Show details for path+method
    Path {
        /// API path, matched exactly (e.g. /users/{id})
        path: String,

        /// HTTP method, any case (e.g. get, POST)
        method: String,
    },

    /// Show a schema from components/schemas
    Schema {
        /// Schema name, matched case-sensitively
        name: String,

        /// Dump format (default: from config, else yaml)
        #[arg(short, long, value_enum)]
        format: Option<DumpFormat>,
    },
}
