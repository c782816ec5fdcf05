//! Artifact packaging for the host's output stage.
//!
//! The serializer turns a finished [`IndexBundle`] into the single
//! publishable file the site ships: a JSON payload plus the metadata
//! (output path, public URL, media type) the host needs to place it.

use crate::core::error::Result;
use crate::core::index::IndexBundle;

/// Default artifact file name, relative to the site root
pub const ARTIFACT_FILENAME: &str = "search-index.json";

/// Media type of the serialized payload
pub const ARTIFACT_MEDIA_TYPE: &str = "application/json";

/// A packaged, publishable search index
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArtifact {
    /// Serialized payload
    pub bytes: Vec<u8>,

    /// Output path relative to the site root
    pub out_path: String,

    /// Root-relative URL clients fetch the artifact from
    pub pub_url: String,

    /// Payload media type
    pub media_type: &'static str,
}

impl SearchArtifact {
    /// Package a bundle under the default artifact path
    pub fn from_bundle(bundle: &IndexBundle) -> Result<Self> {
        let bytes = bundle.to_bytes()?;
        tracing::debug!("Serialized search artifact ({} bytes)", bytes.len());
        Ok(Self {
            bytes,
            out_path: ARTIFACT_FILENAME.to_string(),
            pub_url: format!("/{ARTIFACT_FILENAME}"),
            media_type: ARTIFACT_MEDIA_TYPE,
        })
    }

    /// Reload the bundle carried by this artifact's payload
    pub fn to_bundle(&self) -> Result<IndexBundle> {
        IndexBundle::from_bytes(&self.bytes)
    }
}
