//! Directory-backed content catalog for the CLI.
//!
//! Scans a generated site directory for HTML pages, deriving the
//! component and version from the directory layout the same way the
//! published URLs encode them: `/<component>/<version>/<page>.html`.
//! Pages outside a versioned component directory get an empty version
//! and never participate in latest-only filtering.

use crate::core::catalog::ContentCatalog;
use crate::core::error::{DocIndexError, Result};
use crate::core::types::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Component name for pages living at the site root
const ROOT_COMPONENT: &str = "ROOT";

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v?\d+(\.\d+)*$").expect("valid regex"));

/// Content catalog backed by a site directory on disk
#[derive(Debug)]
pub struct SiteCatalog {
    pages: Vec<Page>,
    latest: BTreeMap<String, String>,
}

impl SiteCatalog {
    /// Scan a site directory for HTML pages.
    ///
    /// Traversal order is sorted by file name so repeated scans of
    /// the same tree produce the same page order.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(DocIndexError::CatalogError(format!(
                "Site directory not found: {}",
                root.display()
            )));
        }

        let mut pages = Vec::new();
        let mut latest: BTreeMap<String, String> = BTreeMap::new();

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }

            let rel = path
                .strip_prefix(root)
                .map_err(|e| DocIndexError::CatalogError(e.to_string()))?;
            let segments: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();

            let url = format!("/{}", segments.join("/"));
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            // layout: /<component>/<version>/.../<page>.html
            let component = if segments.len() >= 2 {
                segments[0].clone()
            } else {
                ROOT_COMPONENT.to_string()
            };
            let version = if segments.len() >= 3 && VERSION_RE.is_match(&segments[1]) {
                segments[1].clone()
            } else {
                String::new()
            };

            if !version.is_empty() {
                latest
                    .entry(component.clone())
                    .and_modify(|current| {
                        if compare_versions(&version, current) == std::cmp::Ordering::Greater {
                            *current = version.clone();
                        }
                    })
                    .or_insert_with(|| version.clone());
            }

            let bytes = fs::read(path)?;
            pages.push(Page {
                markup: String::from_utf8_lossy(&bytes).into_owned(),
                component,
                version,
                stem,
                published_url: Some(url),
                attributes: BTreeMap::new(),
            });
        }

        tracing::debug!(
            "Scanned {} pages across {} versioned components",
            pages.len(),
            latest.len()
        );
        Ok(Self { pages, latest })
    }

    /// Number of scanned pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the scan found no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ContentCatalog for SiteCatalog {
    fn pages(&self) -> Vec<Page> {
        self.pages.clone()
    }

    fn latest_version(&self, component: &str) -> Option<String> {
        self.latest.get(component).cloned()
    }
}

/// Numeric-aware version comparison (`1.10` > `1.9`, `v2` > `1.5`)
fn compare_versions(a: &str, b: &str) -> std::cmp::Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.trim_start_matches('v')
            .split('.')
            .map(|seg| seg.parse().unwrap_or(0))
            .collect()
    };
    parse(a).cmp(&parse(b))
}
