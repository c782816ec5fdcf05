//! Core data types for the docindex pipeline.
//!
//! This module defines the data structures flowing through the
//! build: pages as supplied by the content catalog, extracted
//! documents, heading references, and generation statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rendered page as supplied by the content catalog.
///
/// Read-only input to the pipeline. Byte decoding of the rendered
/// markup happens at the catalog boundary (lossy UTF-8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Rendered HTML markup
    pub markup: String,

    /// Component the page belongs to
    pub component: String,

    /// Version of the component this page documents
    pub version: String,

    /// Source file stem (filename without extension)
    pub stem: String,

    /// Public output location; pages without one are never indexed
    pub published_url: Option<String>,

    /// Page metadata attributes (a `noindex` key excludes the page)
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// A heading carrying a stable anchor id.
///
/// Headings without an anchor id have no addressable fragment and
/// are never extracted as search targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRef {
    /// Visible heading text
    pub text: String,

    /// Stable anchor id (the `#fragment` part of the fragment URL)
    pub anchor: String,
}

/// Canonical searchable unit extracted from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Resolved document URL (the unique reference key)
    pub url: String,

    /// Text of the first top-level heading, falling back to the
    /// source file stem when the page has none
    pub title: String,

    /// Source file stem
    pub name: String,

    /// Component identifier
    pub component: String,

    /// Component version (stored for display, never indexed)
    pub version: String,

    /// Collapsed body text with title, anchored headings and
    /// pagination scaffolding excluded
    pub text: String,

    /// Anchored headings in document order
    pub headings: Vec<HeadingRef>,
}

/// Statistics from one index generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateStats {
    /// Pages supplied by the content catalog
    pub pages_total: usize,

    /// Pages that passed selection policy
    pub pages_selected: usize,

    /// Document records submitted to the index
    pub documents: usize,

    /// Heading-fragment records submitted to the index
    pub fragments: usize,

    /// Generation duration in milliseconds
    pub duration_ms: u64,
}
