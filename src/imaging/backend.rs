//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and thumbnail. Both work on in-memory encoded buffers;
//! backends never touch the filesystem.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure-Rust codecs.

use super::params::ThumbnailParams;
use image::ImageFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Failed to encode thumbnail: {0}")]
    Encode(String),
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Header-level facts about an encoded image, read without a full decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identified {
    pub format: ImageFormat,
    pub dimensions: Dimensions,
}

/// Trait for image processing backends.
pub trait ImageBackend: Sync {
    /// Detect the encoding and read the pixel dimensions.
    fn identify(&self, data: &[u8]) -> Result<Identified, ImagingError>;

    /// Decode, resample to `params` dimensions, and re-encode.
    fn thumbnail(&self, data: &[u8], params: &ThumbnailParams) -> Result<Vec<u8>, ImagingError>;
}
