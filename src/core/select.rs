//! Page selection ahead of extraction.
//!
//! Selection is a pure filter over the catalog's page set: pages
//! without a published URL, pages opting out via the `noindex`
//! attribute or a robots meta directive, and (when latest-only mode
//! is on) pages from non-latest component versions are dropped
//! before any markup is extracted.

use crate::core::catalog::ContentCatalog;
use crate::core::types::Page;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ROBOTS_META: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name=\"robots\"]").expect("valid selector"));

/// Filters the catalog's pages down to the indexable set
#[derive(Debug)]
pub struct PageSelector {
    index_latest_only: bool,
}

impl PageSelector {
    pub fn new(index_latest_only: bool) -> Self {
        Self { index_latest_only }
    }

    /// Apply all selection rules, preserving catalog order
    pub fn select(&self, pages: Vec<Page>, catalog: &dyn ContentCatalog) -> Vec<Page> {
        pages
            .into_iter()
            .filter(|page| self.is_selected(page, catalog))
            .collect()
    }

    fn is_selected(&self, page: &Page, catalog: &dyn ContentCatalog) -> bool {
        let url = match page.published_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => return false,
        };

        if page.attributes.contains_key("noindex") {
            tracing::debug!("Skipping {url}: noindex attribute");
            return false;
        }

        if has_robots_noindex(&page.markup) {
            tracing::debug!("Skipping {url}: robots noindex directive");
            return false;
        }

        if self.index_latest_only {
            match catalog.latest_version(&page.component) {
                Some(latest) if latest == page.version => {}
                _ => {
                    tracing::debug!(
                        "Skipping {url}: version {} of {} is not latest",
                        page.version,
                        page.component
                    );
                    return false;
                }
            }
        }

        true
    }
}

/// Whether the page markup carries `<meta name="robots">` with a
/// `noindex` directive (directive matching is case-insensitive)
fn has_robots_noindex(markup: &str) -> bool {
    let html = Html::parse_document(markup);
    html.select(&ROBOTS_META).any(|meta| {
        meta.value()
            .attr("content")
            .is_some_and(|content| content.to_lowercase().contains("noindex"))
    })
}
