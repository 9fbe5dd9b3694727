//! Library configuration.
//!
//! Every helper works without configuration. A `utils.toml` file only tunes
//! the defaults of the thumbnail generator and of [`web::sanitize_with`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [thumbnails]
//! quality = 80          # JPEG quality for non-JPEG sources (1-100)
//! filter = "nearest"    # nearest | triangle | catmull-rom | gaussian | lanczos3
//!
//! [sanitize]
//! # Omit to use the default user-generated-content allow-list.
//! allowed_tags = ["b", "i", "em", "strong", "a", "p"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! [`web::sanitize_with`]: crate::web::sanitize_with

use crate::imaging::{Quality, ResizeFilter, ThumbnailConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UtilsConfig {
    /// Thumbnail generation settings (quality, filter).
    pub thumbnails: ThumbnailsConfig,
    /// HTML sanitizer settings (allowed tags).
    pub sanitize: SanitizeConfig,
}

impl UtilsConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: UtilsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let quality = self.thumbnails.quality;
        if !(1..=100).contains(&quality) {
            return Err(ConfigError::Validation(format!(
                "thumbnails.quality must be 1-100, got {quality}"
            )));
        }
        let empty_tag = self
            .sanitize
            .allowed_tags
            .iter()
            .flatten()
            .find(|t| t.trim().is_empty());
        if let Some(bad) = empty_tag {
            return Err(ConfigError::Validation(format!(
                "sanitize.allowed_tags contains an empty tag name: {bad:?}"
            )));
        }
        Ok(())
    }
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// JPEG quality applied when the source is not a JPEG.
    pub quality: u32,
    /// Resampling filter.
    pub filter: ResizeFilter,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default().value(),
            filter: ResizeFilter::default(),
        }
    }
}

impl ThumbnailsConfig {
    /// Generator settings for a thumbnail with the given longer edge.
    pub fn thumbnail_config(&self, max_size: u32) -> ThumbnailConfig {
        ThumbnailConfig {
            max_size,
            quality: Quality::new(self.quality),
            filter: self.filter,
        }
    }
}

/// HTML sanitizer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizeConfig {
    /// Tags kept by [`sanitize_with`](crate::web::sanitize_with).
    /// `None` means the default allow-list.
    pub allowed_tags: Option<Vec<String>>,
}

/// Load and validate a config file.
///
/// A missing file is an error; use [`UtilsConfig::default`] when no file is
/// expected.
pub fn load_config(path: impl AsRef<Path>) -> Result<UtilsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    UtilsConfig::from_toml_str(&content)
}
