//! CLI command implementations

use crate::cli::output::{self, colors};
use crate::cli::site::SiteCatalog;
use crate::cli::OutputFormat;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::index::IndexBundle;
use crate::core::pipeline::IndexGenerator;
use crate::core::types::GenerateStats;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Site directory to scan for HTML pages
    pub site_dir: PathBuf,

    /// Output path for the artifact (defaults to
    /// <SITE_DIR>/search-index.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only index pages from each component's latest version
    #[arg(long)]
    pub latest_only: bool,

    /// Comma-separated language codes (e.g. "en" or "fr,de")
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Absolute site URL to prepend to stored page URLs
    #[arg(long)]
    pub site_url: Option<String>,
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Path to a generated search-index.json artifact
    pub artifact: PathBuf,

    /// Query string (append * to a word for prefix matching)
    pub query: String,

    /// Maximum number of hits to print
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

#[derive(Serialize)]
struct GenerateReport {
    output: PathBuf,
    bytes: usize,
    stats: GenerateStats,
}

#[derive(Serialize)]
struct SearchHitReport {
    rank: usize,
    key: String,
    score: f64,
    title: Option<String>,
}

/// Generate the search artifact for a site directory
pub fn generate(args: GenerateArgs, format: OutputFormat) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if args.latest_only {
        config.index_latest_only = true;
    }
    if !args.languages.is_empty() {
        config.languages = args.languages.clone();
    }
    if args.site_url.is_some() {
        config.site_url = args.site_url.clone();
    }
    config.log_config();

    let catalog = SiteCatalog::scan(&args.site_dir)?;
    let generator = IndexGenerator::new(config)?;
    let (artifact, stats) = generator.generate_artifact(&catalog)?;

    let out_path = args
        .output
        .unwrap_or_else(|| args.site_dir.join(&artifact.out_path));
    fs::write(&out_path, &artifact.bytes)?;

    match format {
        OutputFormat::Human => {
            output::print_success(&format!("Wrote {}", out_path.display()));
            println!(
                "  {} pages scanned, {} selected",
                colors::number(&stats.pages_total.to_string()),
                colors::number(&stats.pages_selected.to_string()),
            );
            println!(
                "  {} documents, {} heading fragments indexed in {}",
                colors::number(&stats.documents.to_string()),
                colors::number(&stats.fragments.to_string()),
                output::format_duration_colored(stats.duration_ms as f64 / 1000.0),
            );
        }
        OutputFormat::Json => {
            let report = GenerateReport {
                output: out_path,
                bytes: artifact.bytes.len(),
                stats,
            };
            output::print_output(&report, format);
        }
    }

    Ok(())
}

/// Query a previously generated artifact
pub fn search(args: SearchArgs, format: OutputFormat) -> Result<()> {
    let bytes = fs::read(&args.artifact)?;
    let bundle = IndexBundle::from_bytes(&bytes)?;

    let mut hits = bundle.index.search(&args.query);
    hits.truncate(args.limit);

    // fragment keys resolve titles through their parent document
    let title_for = |key: &str| -> Option<String> {
        let doc_url = key.split('#').next().unwrap_or(key);
        bundle.store.get(doc_url).map(|doc| doc.title.clone())
    };

    match format {
        OutputFormat::Human => {
            if hits.is_empty() {
                println!("{}", colors::dim("No results"));
                return Ok(());
            }
            output::print_header(&format!("Results for \"{}\"", args.query));
            for (rank, hit) in hits.iter().enumerate() {
                let title = title_for(&hit.key).unwrap_or_default();
                println!(
                    "{:>3}. {} {} {}",
                    colors::rank(&(rank + 1).to_string()),
                    colors::score(&format!("{:.1}", hit.score)),
                    colors::url(&hit.key),
                    colors::dim(&title),
                );
            }
        }
        OutputFormat::Json => {
            let report: Vec<SearchHitReport> = hits
                .iter()
                .enumerate()
                .map(|(rank, hit)| SearchHitReport {
                    rank: rank + 1,
                    key: hit.key.clone(),
                    score: hit.score,
                    title: title_for(&hit.key),
                })
                .collect();
            output::print_output(&report, format);
        }
    }

    Ok(())
}
