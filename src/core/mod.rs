//! Core index-generation engine.
//!
//! The pipeline runs in four stages over a [`catalog::ContentCatalog`]:
//! selection ([`select`]), extraction ([`extract`]), index
//! construction ([`index`]) and artifact packaging ([`artifact`]).
//! [`pipeline::IndexGenerator`] wires them together behind a
//! [`config::GeneratorConfig`].

pub mod artifact;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod lang;
pub mod pipeline;
pub mod select;
pub mod types;

pub use artifact::SearchArtifact;
pub use catalog::{ContentCatalog, MemoryCatalog};
pub use config::GeneratorConfig;
pub use error::{DocIndexError, Result};
pub use index::{DocumentStore, IndexBuilder, IndexBundle, SearchHit, SearchIndex};
pub use lang::{Language, TextPipeline};
pub use pipeline::IndexGenerator;
pub use types::{ExtractedDocument, GenerateStats, HeadingRef, Page};
