//! HTML content extraction.
//!
//! Each published page is parsed once and read through an exclusion
//! set: the first `h1` (it becomes the document title), every
//! anchored `h2`..`h6` (each becomes a standalone heading fragment),
//! and pagination navigation are subtracted from the body text
//! without mutating the parsed tree. Text outside the main `article`
//! region never reaches the index.

use crate::core::types::{ExtractedDocument, HeadingRef, Page};
use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;

static REGION: Lazy<Selector> = Lazy::new(|| Selector::parse("article").expect("valid selector"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static ANCHORED_HEADINGS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h2[id], h3[id], h4[id], h5[id], h6[id]").expect("valid selector")
});
static PAGINATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("nav.pagination").expect("valid selector"));

/// Extracts the indexable document from one page's markup
#[derive(Debug, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the document record for a page published at `url`.
    ///
    /// Malformed markup is handled by the parser's error recovery; a
    /// page without a main region yields a document with empty text
    /// and no headings.
    pub fn extract(&self, page: &Page, url: String) -> ExtractedDocument {
        let html = Html::parse_document(&page.markup);

        let region = match html.select(&REGION).next() {
            Some(region) => region,
            None => {
                tracing::debug!("No article region in {url}, indexing empty text");
                return ExtractedDocument {
                    url,
                    title: page.stem.clone(),
                    name: page.stem.clone(),
                    component: page.component.clone(),
                    version: page.version.clone(),
                    text: String::new(),
                    headings: Vec::new(),
                };
            }
        };

        let mut excluded: HashSet<NodeId> = HashSet::new();

        let pagination: HashSet<NodeId> =
            region.select(&PAGINATION).map(|nav| nav.id()).collect();
        excluded.extend(&pagination);

        // the first h1 is the title, not body text
        let title = match region.select(&TITLE).next() {
            Some(h1) => {
                excluded.insert(h1.id());
                collapse_whitespace(&element_text(h1))
            }
            None => page.stem.clone(),
        };

        let mut headings = Vec::new();
        for heading in region.select(&ANCHORED_HEADINGS) {
            // headings inside pagination scaffolding are not content
            if heading.ancestors().any(|a| pagination.contains(&a.id())) {
                continue;
            }
            excluded.insert(heading.id());
            let anchor = heading
                .value()
                .attr("id")
                .unwrap_or_default()
                .to_string();
            headings.push(HeadingRef {
                text: collapse_whitespace(&element_text(heading)),
                anchor,
            });
        }

        let mut raw = String::new();
        collect_text(*region, &excluded, &mut raw);

        ExtractedDocument {
            url,
            title,
            name: page.stem.clone(),
            component: page.component.clone(),
            version: page.version.clone(),
            text: collapse_whitespace(&raw),
            headings,
        }
    }
}

/// Concatenated text of an element's subtree, no exclusions
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

/// Depth-first text collection that skips excluded subtrees and
/// non-content elements
fn collect_text(node: ego_tree::NodeRef<'_, Node>, excluded: &HashSet<NodeId>, out: &mut String) {
    for child in node.children() {
        if excluded.contains(&child.id()) {
            continue;
        }
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            Node::Element(el) => {
                if matches!(el.name(), "script" | "style" | "noscript") {
                    continue;
                }
                collect_text(child, excluded, out);
            }
            _ => {}
        }
    }
}

/// Collapse internal whitespace runs and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
