//! Thumbnail generation in pure Rust, no system codecs.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::with_guessed_format` + `into_dimensions` |
//! | **Resize** | `resize_exact`, nearest-neighbor unless configured otherwise |
//! | **Encode** | JPEG source → PNG, any other source → JPEG (quality 80) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a thumbnail operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, Identified, ImageBackend, ImagingError};
pub use calculations::{MAX_THUMBNAIL_PIXELS, calculate_thumbnail_dimensions};
pub use operations::{
    Thumbnail, ThumbnailConfig, format_name, generate_thumbnail, generate_thumbnail_with,
    plan_thumbnail,
};
pub use params::{OutputFormat, Quality, ResizeFilter, ThumbnailParams};
pub use rust_backend::RustBackend;
