//! CLI adapter for docindex
//!
//! Provides the command-line interface over the core pipeline. This
//! module depends on `core/` but `core/` never depends on it, so
//! embedders can drive the pipeline directly through
//! [`crate::core::pipeline::IndexGenerator`].

pub mod commands;
pub mod output;
pub mod site;

use clap::{Parser, Subcommand};

/// docindex - documentation site search index generator
///
/// Scans a generated documentation site, extracts the indexable text
/// from each page, and packages a portable full-text search index
/// that clients load directly.
#[derive(Parser, Debug)]
#[command(name = "docindex")]
#[command(version)]
#[command(about = "Documentation site search index generator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the search artifact for a site directory
    Generate(commands::GenerateArgs),

    /// Query a previously generated artifact
    Search(commands::SearchArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> crate::core::error::Result<()> {
    match cli.command {
        Commands::Generate(args) => commands::generate(args, cli.format),
        Commands::Search(args) => commands::search(args, cli.format),
    }
}
