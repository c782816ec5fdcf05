//! Index construction over extracted documents.
//!
//! The builder is a single deterministic reduction: documents are
//! submitted in input order, each one contributing its document
//! record followed by its heading-fragment records. A duplicate
//! reference key aborts the build; the selector and extractor
//! guarantee uniqueness by construction, so a collision is a logic
//! bug upstream, not a runtime condition to recover from.

use crate::core::error::{DocIndexError, Result};
use crate::core::index::search::{FieldSpec, Postings, SearchIndex};
use crate::core::lang::{Analyzer, TextPipeline};
use crate::core::types::ExtractedDocument;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Field ordinals; these double as postings keys
const FIELD_TITLE: u8 = 0;
const FIELD_NAME: u8 = 1;
const FIELD_TEXT: u8 = 2;
const FIELD_COMPONENT: u8 = 3;

/// Default weight multiplier for title matches
pub const DEFAULT_TITLE_BOOST: u32 = 10;

/// Lookup store from document URL to its extracted record.
///
/// Heading fragments are indexed but never stored; clients resolve a
/// fragment hit through its parent document's URL.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentStore {
    docs: BTreeMap<String, ExtractedDocument>,
}

impl DocumentStore {
    /// Look up a document by URL
    pub fn get(&self, url: &str) -> Option<&ExtractedDocument> {
        self.docs.get(url)
    }

    /// Whether a document URL is present
    pub fn contains(&self, url: &str) -> bool {
        self.docs.contains_key(url)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate documents in URL order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ExtractedDocument)> {
        self.docs.iter()
    }
}

/// The build output: searchable index plus document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexBundle {
    /// The searchable index
    pub index: SearchIndex,

    /// Document lookup store
    pub store: DocumentStore,
}

impl IndexBundle {
    /// Serialize to the portable JSON payload. Deterministic: the
    /// same bundle always yields the same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Reload a bundle from its serialized payload
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Builds the composite index over documents and heading fragments
pub struct IndexBuilder {
    pipeline: TextPipeline,
    analyzer: Analyzer,
    title_boost: u32,
    keys: Vec<String>,
    seen: HashSet<String>,
    terms: BTreeMap<String, Postings>,
    store: BTreeMap<String, ExtractedDocument>,
    fragments: usize,
}

impl IndexBuilder {
    /// Create a builder for the given pipeline
    pub fn new(pipeline: TextPipeline) -> Self {
        let analyzer = Analyzer::for_pipeline(&pipeline);
        Self {
            pipeline,
            analyzer,
            title_boost: DEFAULT_TITLE_BOOST,
            keys: Vec::new(),
            seen: HashSet::new(),
            terms: BTreeMap::new(),
            store: BTreeMap::new(),
            fragments: 0,
        }
    }

    /// Override the title boost factor
    pub fn with_title_boost(mut self, boost: u32) -> Self {
        self.title_boost = boost;
        self
    }

    /// Submit one document: its document record, then each heading
    /// fragment in emission order
    pub fn add_document(&mut self, doc: ExtractedDocument) -> Result<()> {
        let ord = self.push_key(doc.url.clone())?;
        self.index_field(ord, FIELD_TITLE, &doc.title);
        self.index_field(ord, FIELD_NAME, &doc.name);
        self.index_field(ord, FIELD_TEXT, &doc.text);
        self.index_field(ord, FIELD_COMPONENT, &doc.component);

        for heading in &doc.headings {
            let key = format!("{}#{}", doc.url, heading.anchor);
            let ord = self.push_key(key)?;
            // fragments carry only a title; other fields are absent,
            // not empty placeholders
            self.index_field(ord, FIELD_TITLE, &heading.text);
            self.fragments += 1;
        }

        tracing::debug!(
            "Indexed {} ({} headings)",
            doc.url,
            doc.headings.len()
        );
        self.store.insert(doc.url.clone(), doc);
        Ok(())
    }

    /// Documents submitted so far
    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Heading fragments submitted so far
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    /// Finish the reduction and freeze the index
    pub fn finish(self) -> IndexBundle {
        let fields = vec![
            FieldSpec {
                name: "title".to_string(),
                boost: self.title_boost,
            },
            FieldSpec {
                name: "name".to_string(),
                boost: 1,
            },
            FieldSpec {
                name: "text".to_string(),
                boost: 1,
            },
            FieldSpec {
                name: "component".to_string(),
                boost: 1,
            },
        ];

        IndexBundle {
            index: SearchIndex::new(self.pipeline, fields, self.keys, self.terms),
            store: DocumentStore { docs: self.store },
        }
    }

    fn push_key(&mut self, key: String) -> Result<u32> {
        if !self.seen.insert(key.clone()) {
            return Err(DocIndexError::DuplicateKey(key));
        }
        let ord = self.keys.len() as u32;
        self.keys.push(key);
        Ok(ord)
    }

    fn index_field(&mut self, ord: u32, field: u8, text: &str) {
        for token in self.analyzer.tokens(text) {
            for term in token.terms {
                self.terms
                    .entry(term)
                    .or_default()
                    .entry(ord)
                    .or_default()
                    .entry(field)
                    .or_default()
                    .push(token.position);
            }
        }
    }
}
