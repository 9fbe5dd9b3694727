//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{Identified, ImageBackend, ImagingError};
use super::calculations::calculate_thumbnail_dimensions;
use super::params::{OutputFormat, Quality, ResizeFilter, ThumbnailParams};
use super::rust_backend::RustBackend;
use image::ImageFormat;
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// A generated thumbnail.
///
/// Owns its encoded bytes; nothing is retained by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Encoded thumbnail (PNG or JPEG, see [`OutputFormat::for_source`]).
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Format detected in the *input* buffer.
    pub source_format: ImageFormat,
    pub output_format: OutputFormat,
}

impl Thumbnail {
    /// Short lowercase name of the source format, e.g. `"jpeg"` or `"png"`.
    pub fn format_name(&self) -> &'static str {
        format_name(self.source_format)
    }
}

/// Short lowercase name for an image format.
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::Gif => "gif",
        ImageFormat::WebP => "webp",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailConfig {
    /// Size of the longer output edge in pixels.
    pub max_size: u32,
    /// JPEG quality, used when the source is not a JPEG.
    pub quality: Quality,
    pub filter: ResizeFilter,
}

impl ThumbnailConfig {
    pub fn new(max_size: u32) -> Self {
        Self {
            max_size,
            quality: Quality::default(),
            filter: ResizeFilter::default(),
        }
    }
}

/// Plan a thumbnail operation without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_thumbnail(source: &Identified, config: &ThumbnailConfig) -> Result<ThumbnailParams> {
    let (width, height) = calculate_thumbnail_dimensions(
        (source.dimensions.width, source.dimensions.height),
        config.max_size,
    )?;

    Ok(ThumbnailParams {
        width,
        height,
        format: OutputFormat::for_source(source.format),
        quality: config.quality,
        filter: config.filter,
    })
}

/// Create a thumbnail whose longer edge is `max_size` pixels.
///
/// The encoded input is sniffed and decoded, scaled with nearest-neighbor
/// sampling, and re-encoded: JPEG sources become PNG, everything else
/// becomes JPEG at quality 80.
///
/// ```no_run
/// let bytes = std::fs::read("photo.jpg").unwrap();
/// let thumb = universal_utils::generate_thumbnail(&bytes, 150).unwrap();
/// assert_eq!(thumb.format_name(), "jpeg");
/// ```
pub fn generate_thumbnail(data: &[u8], max_size: u32) -> Result<Thumbnail> {
    generate_thumbnail_with(&RustBackend::new(), data, &ThumbnailConfig::new(max_size))
}

/// Create a thumbnail through an explicit backend and configuration.
pub fn generate_thumbnail_with(
    backend: &impl ImageBackend,
    data: &[u8],
    config: &ThumbnailConfig,
) -> Result<Thumbnail> {
    let source = backend.identify(data)?;
    let params = plan_thumbnail(&source, config)?;
    let encoded = backend.thumbnail(data, &params)?;

    debug!(
        source_format = format_name(source.format),
        source_width = source.dimensions.width,
        source_height = source.dimensions.height,
        width = params.width,
        height = params.height,
        output_format = ?params.format,
        bytes = encoded.len(),
        "generated thumbnail"
    );

    Ok(Thumbnail {
        data: encoded,
        width: params.width,
        height: params.height,
        source_format: source.format,
        output_format: params.format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::test_helpers::{encode_test_jpeg, encode_test_png};

    #[test]
    fn plan_thumbnail_jpeg_source_plans_png() {
        let backend = MockBackend::with_identified(ImageFormat::Jpeg, 600, 400);
        let source = backend.identify(b"").unwrap();

        let params = plan_thumbnail(&source, &ThumbnailConfig::new(150)).unwrap();

        assert_eq!((params.width, params.height), (150, 100));
        assert_eq!(params.format, OutputFormat::Png);
        assert_eq!(params.filter, ResizeFilter::Nearest);
    }

    #[test]
    fn plan_thumbnail_png_source_plans_jpeg_at_80() {
        let backend = MockBackend::with_identified(ImageFormat::Png, 200, 400);
        let source = backend.identify(b"").unwrap();

        let params = plan_thumbnail(&source, &ThumbnailConfig::new(150)).unwrap();

        assert_eq!((params.width, params.height), (75, 150));
        assert_eq!(params.format, OutputFormat::Jpeg);
        assert_eq!(params.quality.value(), 80);
    }

    #[test]
    fn generate_uses_backend() {
        let backend = MockBackend::with_identified(ImageFormat::WebP, 1000, 500);
        let config = ThumbnailConfig {
            quality: Quality::new(60),
            filter: ResizeFilter::Lanczos3,
            ..ThumbnailConfig::new(200)
        };

        let thumb = generate_thumbnail_with(&backend, b"webp-bytes", &config).unwrap();

        assert_eq!(thumb.source_format, ImageFormat::WebP);
        assert_eq!(thumb.format_name(), "webp");
        assert_eq!((thumb.width, thumb.height), (200, 100));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], RecordedOp::Identify(10));
        assert_eq!(
            ops[1],
            RecordedOp::Thumbnail {
                input_len: 10,
                width: 200,
                height: 100,
                format: OutputFormat::Jpeg,
                quality: 60,
                filter: ResizeFilter::Lanczos3,
            }
        );
    }

    #[test]
    fn generate_zero_max_size_skips_encoding() {
        let backend = MockBackend::with_identified(ImageFormat::Png, 100, 100);

        let result = generate_thumbnail_with(&backend, b"png", &ThumbnailConfig::new(0));

        assert!(matches!(result, Err(ImagingError::InvalidDimensions(_))));
        assert_eq!(backend.get_operations(), vec![RecordedOp::Identify(3)]);
    }

    #[test]
    fn generate_thumbnail_from_jpeg() {
        let data = encode_test_jpeg(600, 400);

        let thumb = generate_thumbnail(&data, 150).unwrap();

        assert_eq!(thumb.format_name(), "jpeg");
        assert_eq!(thumb.output_format, OutputFormat::Png);
        assert_eq!(image::guess_format(&thumb.data).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&thumb.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (150, 100));
    }

    #[test]
    fn generate_thumbnail_from_png() {
        let data = encode_test_png(200, 400);

        let thumb = generate_thumbnail(&data, 150).unwrap();

        assert_eq!(thumb.format_name(), "png");
        assert_eq!(thumb.output_format, OutputFormat::Jpeg);
        assert_eq!(image::guess_format(&thumb.data).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&thumb.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (75, 150));
    }

    #[test]
    fn generate_thumbnail_empty_input_errors() {
        assert!(matches!(
            generate_thumbnail(&[], 150),
            Err(ImagingError::Decode(_))
        ));
    }

    #[test]
    fn format_names_are_lowercase() {
        assert_eq!(format_name(ImageFormat::Jpeg), "jpeg");
        assert_eq!(format_name(ImageFormat::Png), "png");
        assert_eq!(format_name(ImageFormat::Gif), "gif");
    }
}
