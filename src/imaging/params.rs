//! Parameter types for thumbnail operations.
//!
//! These types describe *what* to produce, not *how*. The high-level
//! [`operations`](super::operations) module plans a [`ThumbnailParams`] and
//! hands it to a [`backend`](super::backend), which does the pixel work.
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1–100, default 80). Clamped on construction.
//! - [`ResizeFilter`]: Resampling filter, nearest-neighbor by default.
//! - [`OutputFormat`]: Encoding chosen for the thumbnail, derived from the source format.
//! - [`ThumbnailParams`]: Full specification for one thumbnail: size, format, quality, filter.

use image::ImageFormat;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Resampling filter used when scaling the decoded raster.
///
/// Nearest-neighbor is the default: fast, blocky on downscale, and
/// good enough for previews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Encoding of a generated thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick the thumbnail encoding for a decoded source.
    ///
    /// The rule is inverted on purpose and kept for compatibility with
    /// existing callers: JPEG sources become PNG thumbnails, every other
    /// source becomes a JPEG thumbnail.
    pub fn for_source(source: ImageFormat) -> Self {
        match source {
            ImageFormat::Jpeg => OutputFormat::Png,
            _ => OutputFormat::Jpeg,
        }
    }
}

/// Parameters for a thumbnail operation (resize + encode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailParams {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// Only applies to JPEG output; PNG is lossless.
    pub quality: Quality,
    pub filter: ResizeFilter,
}
