//! # Universal Utils
//!
//! Small, independent helpers that tend to get rewritten in every project:
//! thumbnails, file and path chores, numeric generics, `Option` helpers,
//! and string/web text utilities.
//!
//! Nothing here shares state. Every function is a stateless transformation
//! that can be called from any thread, and the only I/O happens in
//! [`files`] (and [`config::load_config`]).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Thumbnail generation: sniff, decode, nearest-neighbor resize, re-encode |
//! | [`files`] | Directory helpers, glob/regex lookups, MIME sniffing, collision-free names |
//! | [`naming`] | Pure filename parsing: extension, stem, `stem-N.ext`, timestamps |
//! | [`number`] | `abs`, rounding, `min`/`max` over every primitive number |
//! | [`nullable`] | `Option` helpers that treat a zero value as absent |
//! | [`strings`] | Character filtering, random tokens, slugs, number and regex formatting |
//! | [`web`] | Root-relative URLs and HTML sanitizing |
//! | [`config`] | Optional `utils.toml` tuning thumbnail and sanitizer defaults |
//!
//! The most used functions are re-exported at the crate root.
//!
//! # Design Decisions
//!
//! ## Inverted Thumbnail Encoding
//!
//! [`generate_thumbnail`] encodes JPEG sources as PNG and every other source
//! as JPEG at quality 80. This is the reverse of "keep the input format" and
//! is kept deliberately so existing consumers receive the bytes they expect.
//! See [`imaging::OutputFormat::for_source`].
//!
//! ## Errors Instead of Degenerate Thumbnails
//!
//! A zero `max_size`, an image with an empty edge, or a source so elongated
//! that its short edge truncates to zero pixels is rejected with
//! [`imaging::ImagingError::InvalidDimensions`] rather than producing an
//! empty image. So is a `max_size` that would plan a raster above
//! [`imaging::MAX_THUMBNAIL_PIXELS`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (thumbnail summaries, filesystem
//! mutations) and never installs a subscriber.

pub mod config;
pub mod files;
pub mod imaging;
pub mod naming;
pub mod nullable;
pub mod number;
pub mod strings;
pub mod web;

pub use files::{
    clear_directory, create_directory, file_exists, find_file, find_files, get_mime,
    get_subdirectories, is_directory, normalize_path, numbered_file,
};
pub use imaging::{Thumbnail, generate_thumbnail};
pub use naming::{get_extension, get_filename, timestamped_file};
pub use strings::{format_number, format_regex, slugify};
pub use web::{absolute_url, relative_url, sanitize_common, sanitize_raw};

#[cfg(test)]
pub(crate) mod test_helpers;
