//! docindex - Command-line entry point
//!
//! # Examples
//!
//! ```bash
//! # Generate the artifact for a site
//! docindex generate ./public --site-url https://docs.example.org
//!
//! # Only index each component's latest version, French + German
//! docindex generate ./public --latest-only --languages fr,de
//!
//! # Query a generated artifact
//! docindex search ./public/search-index.json "install*"
//! ```

use clap::Parser;
use docindex::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docindex=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    if let Err(e) = cli::run(args) {
        cli::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
