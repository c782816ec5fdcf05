//! The end-to-end index generation pipeline.
//!
//! `IndexGenerator` wires the stages together: select pages from the
//! catalog, extract each one, feed the builder, and package the
//! result. Configuration problems (unknown language codes, bad
//! boosts) surface at construction, before any page is touched.

use crate::core::artifact::SearchArtifact;
use crate::core::catalog::ContentCatalog;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::core::extract::ContentExtractor;
use crate::core::index::{IndexBuilder, IndexBundle};
use crate::core::lang::TextPipeline;
use crate::core::select::PageSelector;
use crate::core::types::GenerateStats;
use std::time::Instant;
use url::Url;

/// Drives selection, extraction, indexing and packaging
pub struct IndexGenerator {
    config: GeneratorConfig,
    pipeline: TextPipeline,
}

impl IndexGenerator {
    /// Create a generator, resolving the text pipeline up front.
    ///
    /// Fails fast on an unsupported language code.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let pipeline = TextPipeline::resolve(&config.languages)?;
        Ok(Self { config, pipeline })
    }

    /// The resolved text pipeline
    pub fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Run the pipeline over a catalog's pages
    pub fn generate(&self, catalog: &dyn ContentCatalog) -> Result<(IndexBundle, GenerateStats)> {
        let started = Instant::now();

        let pages = catalog.pages();
        let pages_total = pages.len();
        tracing::info!("Generating search index over {pages_total} pages");

        let selector = PageSelector::new(self.config.index_latest_only);
        let selected = selector.select(pages, catalog);
        let pages_selected = selected.len();
        tracing::debug!("{pages_selected} of {pages_total} pages selected");

        let extractor = ContentExtractor::new();
        let mut builder =
            IndexBuilder::new(self.pipeline.clone()).with_title_boost(self.config.title_boost);

        for page in &selected {
            let path = page.published_url.as_deref().unwrap_or_default();
            let url = resolve_url(self.config.site_url.as_deref(), path);
            let doc = extractor.extract(page, url);
            builder.add_document(doc)?;
        }

        let stats = GenerateStats {
            pages_total,
            pages_selected,
            documents: builder.document_count(),
            fragments: builder.fragment_count(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            "Indexed {} documents and {} heading fragments in {}ms",
            stats.documents,
            stats.fragments,
            stats.duration_ms
        );

        Ok((builder.finish(), stats))
    }

    /// Run the pipeline and package the result for publication
    pub fn generate_artifact(
        &self,
        catalog: &dyn ContentCatalog,
    ) -> Result<(SearchArtifact, GenerateStats)> {
        let (bundle, stats) = self.generate(catalog)?;
        let artifact = SearchArtifact::from_bundle(&bundle)?;
        Ok((artifact, stats))
    }
}

/// Resolve a page's indexed URL from the configured site URL.
///
/// Only an absolute http(s) site URL is prepended (with any trailing
/// slash trimmed first); a relative, file or missing site URL keeps
/// page URLs root-relative so one artifact serves any host.
pub fn resolve_url(site_url: Option<&str>, path: &str) -> String {
    let base = match site_url {
        Some(base) if !base.is_empty() => base,
        _ => return path.to_string(),
    };

    match Url::parse(base) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            format!("{}{}", base.trim_end_matches('/'), path)
        }
        _ => path.to_string(),
    }
}
