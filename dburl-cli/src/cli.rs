//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// dburl - Inspect JDBC-style database URLs
#[derive(Parser, Debug)]
#[command(name = "dburl")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "dburl - Inspect JDBC-style database URLs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (defaults to ./dburl.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse connection URLs and print their parts
    Parse(ParseArgs),

    /// Print the dialect detected for each URL
    Detect(DetectArgs),

    /// Parse the built-in sample URLs
    Demo(DemoArgs),

    /// Display version information
    Version,
}

/// Output format for parse results
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON array, one entry per URL
    Json,
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Connection URLs to parse
    pub urls: Vec<String>,

    /// Parse a named URL from the `[urls]` table of the config file
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Read a URL from this environment variable
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exit with an error if any URL fails to parse
    #[arg(long)]
    pub strict: bool,
}

// =============================================================================
// Detect Command
// =============================================================================

/// Arguments for the `detect` command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Connection URLs to inspect
    #[arg(required = true)]
    pub urls: Vec<String>,
}

// =============================================================================
// Demo Command
// =============================================================================

/// Arguments for the `demo` command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Output format (overrides the config file)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}
