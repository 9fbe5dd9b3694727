//! Filename parsing and derivation.
//!
//! Pure string work on file names: no filesystem access happens here.
//! [`files::numbered_file`](crate::files::numbered_file) pairs these helpers
//! with a directory listing.
//!
//! ## Numbered Names
//!
//! A numbered name carries a `-N` suffix between stem and extension, where
//! `N` is a positive integer written without leading zeros:
//! - `testfile.txt` → stem="testfile", number=None, extension="txt"
//! - `testfile-2.txt` → stem="testfile", number=Some(2), extension="txt"
//! - `my-notes` → stem="my-notes", number=None, extension=""
//! - `scan-007.png` → stem="scan-007", number=None (leading zero)

use chrono::Utc;
use std::path::{Path, PathBuf};

/// Result of parsing a file name like `testfile-2.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Name part before the numeric suffix, dashes preserved.
    pub stem: String,
    /// Suffix number if present (e.g., `2` from `testfile-2.txt`).
    pub number: Option<u32>,
    /// Extension without the dot. Empty if none.
    pub extension: String,
}

/// Split a file name into `(stem, extension)` at the last dot.
///
/// Dotfiles such as `.env` have no extension.
pub fn split_name(filename: &str) -> (&str, &str) {
    let path = Path::new(filename);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(filename);
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    (stem, ext)
}

/// Parse a file name following the `stem-N.ext` convention.
pub fn parse_numbered_name(filename: &str) -> ParsedName {
    let (stem, ext) = split_name(filename);
    let suffix_number = stem
        .rsplit_once('-')
        .filter(|(base, suffix)| {
            !base.is_empty()
                && !suffix.starts_with('0')
                && suffix.bytes().all(|b| b.is_ascii_digit())
        })
        .and_then(|(base, suffix)| suffix.parse::<u32>().ok().map(|num| (base, num)));

    if let Some((base, num)) = suffix_number {
        return ParsedName {
            stem: base.to_string(),
            number: Some(num),
            extension: ext.to_string(),
        };
    }
    ParsedName {
        stem: stem.to_string(),
        number: None,
        extension: ext.to_string(),
    }
}

/// Build `stem-N.ext`, or `stem-N` when there is no extension.
pub fn numbered_name(stem: &str, number: u32, extension: &str) -> String {
    if extension.is_empty() {
        format!("{stem}-{number}")
    } else {
        format!("{stem}-{number}.{extension}")
    }
}

/// Extension of `path` without the leading dot, or `""`.
pub fn get_extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Base name of `path` without directory or extension.
pub fn get_filename(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Insert the current Unix time in milliseconds before the extension.
///
/// `uploads/photo.jpg` → `uploads/photo-1718000000000.jpg`
pub fn timestamped_file(path: impl AsRef<Path>) -> PathBuf {
    timestamped_file_at(path, Utc::now().timestamp_millis())
}

fn timestamped_file_at(path: impl AsRef<Path>, millis: i64) -> PathBuf {
    let path = path.as_ref();
    let stem = get_filename(path);
    let ext = get_extension(path);
    let name = if ext.is_empty() {
        format!("{stem}-{millis}")
    } else {
        format!("{stem}-{millis}.{ext}")
    };
    path.with_file_name(name)
}
