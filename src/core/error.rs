//! Error types and error handling for the docindex pipeline.
//!
//! Fatal conditions (bad configuration, unsupported language codes,
//! duplicate reference keys) abort the whole build. Recoverable
//! conditions (malformed markup, missing content region) degrade
//! silently inside the extractor and never surface here.

use thiserror::Error;

/// Result type alias for docindex operations
pub type Result<T> = std::result::Result<T, DocIndexError>;

/// Main error type for the index generator
#[derive(Error, Debug)]
pub enum DocIndexError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Duplicate reference key: {0}")]
    DuplicateKey(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl DocIndexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error indicates invalid user input (configuration)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DocIndexError::ConfigError(_) | DocIndexError::UnsupportedLanguage(_)
        )
    }

    /// Check if this error indicates a broken upstream invariant (a bug,
    /// not a runtime condition a caller should handle)
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, DocIndexError::DuplicateKey(_))
    }
}
