//! Serializable search index with deterministic construction.
//!
//! The index is a field-aware inverted index over reference keys
//! (document URLs and `url#anchor` fragment URLs). It is immutable
//! once built, serializes through serde, and embeds its resolved
//! text pipeline so a reloaded artifact answers queries identically
//! to the instance that produced it (round-trip invariant).
//!
//! Every container with serialization-visible order is either a
//! `Vec` in submission order or a `BTreeMap`, so identical input
//! produces byte-identical output.

use crate::core::lang::{Analyzer, TextPipeline};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index format version, bumped on layout changes
pub const FORMAT_VERSION: u32 = 1;

/// Positions of one term within one field of one record
pub type FieldPositions = BTreeMap<u8, Vec<u32>>;

/// Postings for one term: record ordinal to per-field positions
pub type Postings = BTreeMap<u32, FieldPositions>;

/// An indexed field and its scoring weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,

    /// Weight multiplier applied to matches in this field
    pub boost: u32,
}

/// Immutable, serializable full-text index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Serialization format version
    pub format_version: u32,

    /// Text pipeline the index was built with; queries are analyzed
    /// through the same pipeline
    pipeline: TextPipeline,

    /// Indexed fields, ordinal position doubles as the postings key
    fields: Vec<FieldSpec>,

    /// Reference keys in submission order
    keys: Vec<String>,

    /// Term dictionary with positional postings
    terms: BTreeMap<String, Postings>,
}

/// A single query hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Reference key of the matched record
    pub key: String,

    /// Boost-weighted term-frequency score
    pub score: f64,

    /// Matched term to field name to token positions, for phrase
    /// proximity and highlighting on the client
    pub matches: BTreeMap<String, BTreeMap<String, Vec<u32>>>,
}

/// One parsed query token
enum QueryTerm {
    /// Exact match against any of the normalized forms
    Exact(Vec<String>),
    /// Prefix match (trailing `*` in the query). Candidates cover the
    /// raw lowercase prefix plus its normalized forms, since the term
    /// dictionary holds stemmed terms.
    Prefix(Vec<String>),
}

impl SearchIndex {
    pub(crate) fn new(
        pipeline: TextPipeline,
        fields: Vec<FieldSpec>,
        keys: Vec<String>,
        terms: BTreeMap<String, Postings>,
    ) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            pipeline,
            fields,
            keys,
            terms,
        }
    }

    /// Number of records (documents plus fragments) in the index
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index contains no records
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Reference keys in submission order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The pipeline this index was built with
    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Execute a query.
    ///
    /// Query text is tokenized through the stored pipeline. Tokens
    /// combine with OR semantics; a trailing `*` requests prefix
    /// matching instead of exact term matching. Hits are ordered by
    /// score (descending), ties broken by submission order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let analyzer = Analyzer::for_pipeline(&self.pipeline);
        let query_terms = self.parse_query(&analyzer, query);

        let mut scores: BTreeMap<u32, f64> = BTreeMap::new();
        let mut matches: BTreeMap<u32, BTreeMap<String, BTreeMap<String, Vec<u32>>>> =
            BTreeMap::new();

        for query_term in &query_terms {
            match query_term {
                QueryTerm::Exact(forms) => {
                    for form in forms {
                        if let Some(postings) = self.terms.get(form) {
                            self.accumulate(form, postings, &mut scores, &mut matches);
                        }
                    }
                }
                QueryTerm::Prefix(prefixes) => {
                    // gather terms first so one term matching several
                    // candidate prefixes is only scored once
                    let mut matched: BTreeMap<&String, &Postings> = BTreeMap::new();
                    for prefix in prefixes {
                        for (term, postings) in self
                            .terms
                            .range(prefix.clone()..)
                            .take_while(|(term, _)| term.starts_with(prefix.as_str()))
                        {
                            matched.insert(term, postings);
                        }
                    }
                    for (term, postings) in matched {
                        self.accumulate(term, postings, &mut scores, &mut matches);
                    }
                }
            }
        }

        let mut hits: Vec<SearchHit> = scores
            .into_iter()
            .map(|(ord, score)| SearchHit {
                key: self.keys[ord as usize].clone(),
                score,
                matches: matches.remove(&ord).unwrap_or_default(),
            })
            .collect();

        // BTreeMap iteration already yields submission order; a stable
        // sort on the score keeps it as the tie-break
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }

    fn parse_query(&self, analyzer: &Analyzer, query: &str) -> Vec<QueryTerm> {
        let mut terms = Vec::new();
        for word in query.split_whitespace() {
            let stripped = word.trim_end_matches('*');
            // only a trailing * is a wildcard; anything else goes
            // through the analyzer (which splits on the *)
            if word.ends_with('*') && !stripped.is_empty() && !stripped.contains('*') {
                let raw = stripped.to_lowercase();
                // the dictionary holds stemmed terms, so the stemmed
                // query prefix must be a candidate alongside the raw one
                let mut prefixes = vec![raw.clone()];
                for form in analyzer.normalize(&raw) {
                    if !prefixes.contains(&form) {
                        prefixes.push(form);
                    }
                }
                terms.push(QueryTerm::Prefix(prefixes));
            } else {
                for token in analyzer.tokens(word) {
                    terms.push(QueryTerm::Exact(token.terms));
                }
            }
        }
        terms
    }

    fn accumulate(
        &self,
        term: &str,
        postings: &Postings,
        scores: &mut BTreeMap<u32, f64>,
        matches: &mut BTreeMap<u32, BTreeMap<String, BTreeMap<String, Vec<u32>>>>,
    ) {
        for (&ord, field_positions) in postings {
            for (&field, positions) in field_positions {
                let boost = self
                    .fields
                    .get(field as usize)
                    .map(|f| f.boost)
                    .unwrap_or(1);
                *scores.entry(ord).or_insert(0.0) += f64::from(boost) * positions.len() as f64;

                let field_name = self
                    .fields
                    .get(field as usize)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                matches
                    .entry(ord)
                    .or_default()
                    .entry(term.to_string())
                    .or_default()
                    .insert(field_name, positions.clone());
            }
        }
    }
}
