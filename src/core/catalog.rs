//! The seam to the host's page-discovery/content model.
//!
//! The pipeline never discovers pages itself: a [`ContentCatalog`]
//! supplies the publishable page set and resolves which version of a
//! component is currently "latest". [`MemoryCatalog`] is the
//! in-process implementation used by embedders and tests; the CLI
//! ships a directory-backed implementation in `cli::site`.

use crate::core::types::Page;
use std::collections::BTreeMap;

/// External content model consumed by the pipeline
pub trait ContentCatalog {
    /// Enumerate all publishable pages, in stable order
    fn pages(&self) -> Vec<Page>;

    /// Resolve the version a component's registry currently
    /// designates as latest
    fn latest_version(&self, component: &str) -> Option<String>;
}

/// In-memory content catalog
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    pages: Vec<Page>,
    latest: BTreeMap<String, String>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page, preserving insertion order
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Record a component's latest version
    pub fn set_latest(&mut self, component: impl Into<String>, version: impl Into<String>) {
        self.latest.insert(component.into(), version.into());
    }

    /// Builder-style variant of [`MemoryCatalog::add_page`]
    pub fn with_page(mut self, page: Page) -> Self {
        self.add_page(page);
        self
    }

    /// Builder-style variant of [`MemoryCatalog::set_latest`]
    pub fn with_latest(
        mut self,
        component: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.set_latest(component, version);
        self
    }
}

impl ContentCatalog for MemoryCatalog {
    fn pages(&self) -> Vec<Page> {
        self.pages.clone()
    }

    fn latest_version(&self, component: &str) -> Option<String> {
        self.latest.get(component).cloned()
    }
}
