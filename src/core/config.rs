//! Configuration for the index generator.
//!
//! Configuration is loaded from a TOML file (or built directly by an
//! embedding host) with sensible defaults for every setting. Any
//! unrecognized key is rejected before a single page is processed:
//! a silently ignored option would silently corrupt search behavior.

use crate::core::error::{DocIndexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Index generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Only index pages whose version is the current latest for
    /// their component
    pub index_latest_only: bool,

    /// Ordered list of requested language codes
    pub languages: Vec<String>,

    /// Base site URL; absolute http(s) bases produce absolute stored
    /// URLs, anything else degrades to root-relative paths
    pub site_url: Option<String>,

    /// Weight multiplier applied to title-field matches
    pub title_boost: u32,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_title_boost() -> u32 {
    10
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            index_latest_only: false,
            languages: default_languages(),
            site_url: None,
            title_boost: default_title_boost(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from a TOML string
    ///
    /// Unknown keys are a fatal error.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(contents)
            .map_err(|e| DocIndexError::ConfigError(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocIndexError::ConfigError(format!("Failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.title_boost == 0 {
            return Err(DocIndexError::ConfigError(
                "Title boost must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Index latest only: {}", self.index_latest_only);
        tracing::info!("  Languages: {}", self.languages.join(", "));
        tracing::info!(
            "  Site URL: {}",
            self.site_url.as_deref().unwrap_or("(root-relative)")
        );
        tracing::info!("  Title boost: {}", self.title_boost);
    }
}
