//! Pure Rust image processing backend.
//!
//! Every codec is pure Rust and statically linked.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format detection | `image::ImageReader::with_guessed_format` (magic bytes) |
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact`, nearest-neighbor by default |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (RGBA8) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (RGB8, alpha dropped) |

use super::backend::{Dimensions, Identified, ImageBackend, ImagingError};
use super::params::{OutputFormat, Quality, ThumbnailParams};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an in-memory reader with the format sniffed from the leading bytes.
fn reader(data: &[u8]) -> Result<(ImageReader<Cursor<&[u8]>>, ImageFormat), ImagingError> {
    if data.is_empty() {
        return Err(ImagingError::Decode("image data is empty".into()));
    }
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ImagingError::Decode(e.to_string()))?;
    let format = reader
        .format()
        .ok_or_else(|| ImagingError::Decode("unrecognized image format".into()))?;
    Ok((reader, format))
}

/// Decode an encoded buffer into a raster.
fn load_image(data: &[u8]) -> Result<DynamicImage, ImagingError> {
    let (reader, format) = reader(data)?;
    reader
        .decode()
        .map_err(|e| ImagingError::Decode(format!("{format:?}: {e}")))
}

/// Encode a raster into the requested output format.
fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    quality: Quality,
) -> Result<Vec<u8>, ImagingError> {
    let mut buf = Vec::new();
    let result = match format {
        OutputFormat::Png => {
            DynamicImage::ImageRgba8(img.to_rgba8()).write_with_encoder(PngEncoder::new(&mut buf))
        }
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(
            JpegEncoder::new_with_quality(&mut buf, quality.value().clamp(1, 100) as u8),
        ),
    };
    result.map_err(|e| ImagingError::Encode(format!("{format:?} encode failed: {e}")))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn identify(&self, data: &[u8]) -> Result<Identified, ImagingError> {
        let (reader, format) = reader(data)?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| ImagingError::Decode(format!("Failed to read dimensions: {e}")))?;
        Ok(Identified {
            format,
            dimensions: Dimensions { width, height },
        })
    }

    fn thumbnail(&self, data: &[u8], params: &ThumbnailParams) -> Result<Vec<u8>, ImagingError> {
        let img = load_image(data)?;
        let resized = img.resize_exact(params.width, params.height, params.filter.into());
        encode_image(&resized, params.format, params.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::ResizeFilter;
    use crate::test_helpers::{encode_test_image, encode_test_jpeg, encode_test_png};

    fn params(width: u32, height: u32, format: OutputFormat) -> ThumbnailParams {
        ThumbnailParams {
            width,
            height,
            format,
            quality: Quality::default(),
            filter: ResizeFilter::Nearest,
        }
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let data = encode_test_jpeg(200, 150);

        let identified = RustBackend::new().identify(&data).unwrap();
        assert_eq!(identified.format, ImageFormat::Jpeg);
        assert_eq!(identified.dimensions, Dimensions { width: 200, height: 150 });
    }

    #[test]
    fn identify_synthetic_png() {
        let data = encode_test_png(30, 60);

        let identified = RustBackend::new().identify(&data).unwrap();
        assert_eq!(identified.format, ImageFormat::Png);
        assert_eq!(identified.dimensions, Dimensions { width: 30, height: 60 });
    }

    #[test]
    fn identify_empty_errors() {
        assert!(matches!(
            RustBackend::new().identify(&[]),
            Err(ImagingError::Decode(_))
        ));
    }

    #[test]
    fn identify_garbage_errors() {
        assert!(matches!(
            RustBackend::new().identify(b"definitely not an image"),
            Err(ImagingError::Decode(_))
        ));
    }

    #[test]
    fn thumbnail_corrupt_jpeg_errors() {
        // JPEG signature followed by noise: detected as JPEG, fails to decode
        let mut data = vec![0xFF, 0xD8, 0xFF];
        data.extend(std::iter::repeat_n(0x42, 64));

        let result = RustBackend::new().thumbnail(&data, &params(32, 32, OutputFormat::Png));
        assert!(matches!(result, Err(ImagingError::Decode(_))));
    }

    #[test]
    fn thumbnail_writes_png_with_exact_dimensions() {
        let data = encode_test_jpeg(400, 300);

        let out = RustBackend::new()
            .thumbnail(&data, &params(120, 90, OutputFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Png);
        assert_eq!((decoded.width(), decoded.height()), (120, 90));
    }

    #[test]
    fn thumbnail_writes_jpeg_from_alpha_source() {
        let data = encode_test_png(50, 100);

        let out = RustBackend::new()
            .thumbnail(&data, &params(25, 50, OutputFormat::Jpeg))
            .unwrap();

        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        assert_eq!((decoded.width(), decoded.height()), (25, 50));
    }

    #[test]
    fn thumbnail_decodes_bmp_source() {
        let data = encode_test_image(40, 20, ImageFormat::Bmp);

        let out = RustBackend::new()
            .thumbnail(&data, &params(20, 10, OutputFormat::Jpeg))
            .unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn lower_quality_produces_smaller_jpeg() {
        let data = encode_test_png(256, 256);
        let backend = RustBackend::new();

        let mut low = params(256, 256, OutputFormat::Jpeg);
        low.quality = Quality::new(10);
        let mut high = params(256, 256, OutputFormat::Jpeg);
        high.quality = Quality::new(100);

        let low = backend.thumbnail(&data, &low).unwrap();
        let high = backend.thumbnail(&data, &high).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn unclamped_quality_is_capped_at_100() {
        let data = encode_test_png(64, 64);
        let backend = RustBackend::new();

        let mut over = params(64, 64, OutputFormat::Jpeg);
        over.quality = Quality(300);
        let mut max = params(64, 64, OutputFormat::Jpeg);
        max.quality = Quality::new(100);

        assert_eq!(
            backend.thumbnail(&data, &over).unwrap(),
            backend.thumbnail(&data, &max).unwrap()
        );
    }
}
