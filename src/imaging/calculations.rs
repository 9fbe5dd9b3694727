//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::ImagingError;

/// Largest thumbnail raster, in pixels, that will be planned (8192 × 8192).
pub const MAX_THUMBNAIL_PIXELS: u64 = 8192 * 8192;

/// Calculate thumbnail dimensions that fit the longer edge to `max_size`.
///
/// The shorter edge is scaled by the same ratio and truncated toward zero.
/// Square sources produce `max_size × max_size`.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `max_size` - Target size of the longer edge in pixels
///
/// # Returns
/// * `(width, height)` - Final thumbnail dimensions
///
/// # Errors
/// [`ImagingError::InvalidDimensions`] when `max_size` is zero, the source
/// has a zero edge, the shorter edge would truncate to zero pixels, or the
/// result exceeds [`MAX_THUMBNAIL_PIXELS`].
///
/// # Examples
/// ```
/// # use universal_utils::imaging::calculate_thumbnail_dimensions;
/// // Landscape 600x400 at 150px → 150x100
/// assert_eq!(calculate_thumbnail_dimensions((600, 400), 150).unwrap(), (150, 100));
///
/// // Portrait 200x400 at 150px → 75x150
/// assert_eq!(calculate_thumbnail_dimensions((200, 400), 150).unwrap(), (75, 150));
/// ```
pub fn calculate_thumbnail_dimensions(
    source: (u32, u32),
    max_size: u32,
) -> Result<(u32, u32), ImagingError> {
    let (src_w, src_h) = source;

    if max_size == 0 {
        return Err(ImagingError::InvalidDimensions(
            "max_size must be greater than zero".into(),
        ));
    }
    if src_w == 0 || src_h == 0 {
        return Err(ImagingError::InvalidDimensions(format!(
            "source image has an empty edge ({src_w}x{src_h})"
        )));
    }

    let (w, h) = if src_w > src_h {
        // Landscape: width is the long edge
        let h = u64::from(max_size) * u64::from(src_h) / u64::from(src_w);
        (max_size, h as u32)
    } else {
        // Portrait or square: height is the long edge
        let w = u64::from(max_size) * u64::from(src_w) / u64::from(src_h);
        (w as u32, max_size)
    };

    if w == 0 || h == 0 {
        return Err(ImagingError::InvalidDimensions(format!(
            "{src_w}x{src_h} at max size {max_size} leaves an empty edge"
        )));
    }

    let pixels = u64::from(w) * u64::from(h);
    if pixels > MAX_THUMBNAIL_PIXELS {
        return Err(ImagingError::InvalidDimensions(format!(
            "{w}x{h} thumbnail exceeds the {MAX_THUMBNAIL_PIXELS} pixel limit"
        )));
    }

    Ok((w, h))
}
