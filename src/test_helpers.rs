//! Shared test utilities for the universal-utils test suite.
//!
//! Provides in-memory image fixtures and scratch-directory builders so tests
//! never depend on the network or on the working directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let jpeg = encode_test_jpeg(600, 400);
//! let thumb = generate_thumbnail(&jpeg, 150).unwrap();
//!
//! let tmp = dir_with_files(&["testfile.txt", "testfile-1.txt"]);
//! assert_eq!(numbered_file(tmp.path(), "testfile.txt").unwrap(), "testfile-2.txt");
//! ```

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Image fixtures
// =========================================================================

/// Gradient RGB image encoded in `format`.
pub fn encode_test_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .unwrap();
    buf.into_inner()
}

/// A small valid JPEG with the given dimensions.
pub fn encode_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode_test_image(width, height, ImageFormat::Jpeg)
}

/// A small valid PNG with a varying alpha channel.
pub fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, ((x + y) % 256) as u8])
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

// =========================================================================
// Scratch directories
// =========================================================================

/// Temp directory holding one small file per name. Names may include
/// subdirectories (`"nested/a.txt"`); parents are created as needed.
pub fn dir_with_files(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        write_file(tmp.path(), name);
    }
    tmp
}

/// Write a small file at `root/name`, creating parents.
pub fn write_file(root: &Path, name: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"content").unwrap();
}

/// Sorted names of the direct children of `dir`.
pub fn child_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
