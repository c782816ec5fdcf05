//! docindex - Documentation Site Search Index Generator
//!
//! Builds a portable, client-side full-text search index for a
//! generated documentation site. Pages are selected by publication
//! policy, their main content extracted from rendered HTML, and the
//! result packaged as a single JSON artifact the site ships alongside
//! its pages.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types
//!   - catalog (content model seam)
//!   - select (publication/version policy)
//!   - extract (HTML content extraction)
//!   - lang (stemming, stop words, segmentation)
//!   - index (inverted index build and query)
//!   - artifact (payload packaging)
//!   - pipeline (stage orchestration)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output, site (directory-backed catalog)
//!
//! # Key Properties
//!
//! - Deterministic output (same pages, same configuration, same bytes)
//! - Self-describing artifact (embeds its text pipeline, so a
//!   reloaded index answers queries identically)
//! - Multi-language analysis with union token semantics
//! - Heading fragments indexed as standalone search targets

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::catalog::{ContentCatalog, MemoryCatalog};
pub use core::config::GeneratorConfig;
pub use core::error::{DocIndexError, Result};
pub use core::pipeline::IndexGenerator;
pub use core::types::*;
