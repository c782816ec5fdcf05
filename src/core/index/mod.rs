//! Inverted index: construction and querying.

pub mod builder;
pub mod search;

pub use builder::{DocumentStore, IndexBuilder, IndexBundle, DEFAULT_TITLE_BOOST};
pub use search::{FieldSpec, SearchHit, SearchIndex, FORMAT_VERSION};
