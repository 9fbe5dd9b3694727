//! Filesystem helpers: directories, lookups, content sniffing.
//!
//! Every function here surfaces I/O failures directly as [`FsError`]. A
//! missing path is only treated as a normal answer by the existence checks
//! ([`is_directory`], [`file_exists`]), which return `Ok(false)`.
//!
//! ## Pattern flavours
//!
//! - [`find_file`] takes a glob (`*`, `?`, `[abc]`, `[!abc]`, `\` escapes)
//!   matched against the whole file name of direct children. A malformed
//!   glob is [`FsError::Glob`].
//! - [`find_files`] takes a regex matched anywhere in the file name of every
//!   file below the directory.

use crate::naming::{numbered_name, parse_numbered_name, split_name};
use mime::Mime;
use regex::Regex;
use serde::de::IgnoredAny;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid glob pattern: {0}")]
    Glob(String),
}

/// Result type for filesystem helpers.
pub type Result<T> = std::result::Result<T, FsError>;

/// Join path segments into a clean, forward-slash, rooted path.
///
/// Pure string work, no filesystem access. Backslashes become slashes,
/// repeated separators collapse, `.` is dropped and `..` pops a segment
/// (never above the root).
///
/// ```
/// # use universal_utils::files::normalize_path;
/// assert_eq!(normalize_path(["/a", "b", "c"]), "/a/b/c");
/// assert_eq!(normalize_path(["a\\b", "./c/../d"]), "/a/b/d");
/// ```
pub fn normalize_path<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("/{}", clean_segments(parts).join("/"))
}

/// Split path parts into cleaned segments, resolving `.` and `..`.
pub(crate) fn clean_segments<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segments: Vec<String> = Vec::new();
    for part in parts {
        for segment in part.as_ref().split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s.to_string()),
            }
        }
    }
    segments
}

/// Create `path` and all missing ancestors.
pub fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path)?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Whether `path` exists and is a directory.
pub fn is_directory(path: impl AsRef<Path>) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Whether `path` exists and is not a directory.
pub fn file_exists(path: impl AsRef<Path>) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(!meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Names of the immediate subdirectories of `path`, sorted.
pub fn get_subdirectories(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Delete every direct child of `path`, keeping `path` itself.
pub fn clear_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut removed = 0usize;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&child)?;
        } else {
            fs::remove_file(&child)?;
        }
        trace!(path = %child.display(), "removed");
        removed += 1;
    }
    debug!(path = %path.display(), removed, "cleared directory");
    Ok(())
}

/// First direct child of `dir` (by name) whose file name matches `pattern`.
///
/// Returns `dir` joined with the matching name.
pub fn find_file(dir: impl AsRef<Path>, pattern: &str) -> Result<Option<PathBuf>> {
    let dir = dir.as_ref();
    let matcher = Regex::new(&glob_to_regex(pattern)?)?;

    let mut names: Vec<String> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<_>>()?;
    names.sort();

    Ok(names
        .into_iter()
        .find(|name| matcher.is_match(name))
        .map(|name| dir.join(name)))
}

/// Every file below `dir` whose file name matches the regex `pattern`, sorted.
pub fn find_files(dir: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Regex::new(pattern)?;
    let mut matches = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && matcher.is_match(&entry.file_name().to_string_lossy())
        {
            matches.push(entry.into_path());
        }
    }
    Ok(matches)
}

/// Translate a shell glob into an anchored regex.
///
/// `\` escapes the next character, inside or outside a class. An
/// unterminated or empty class and a trailing `\` are rejected.
fn glob_to_regex(glob: &str) -> Result<String> {
    let bad = |reason: &str| FsError::Glob(format!("{glob:?}: {reason}"));

    let mut out = String::from("^");
    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '\\' => {
                let escaped = chars.next().ok_or_else(|| bad("trailing escape"))?;
                out.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4])));
            }
            '[' => {
                out.push('[');
                if chars.next_if_eq(&'!').is_some() {
                    out.push('^');
                }
                let mut empty = true;
                loop {
                    let member = match chars.next() {
                        None => return Err(bad("unterminated character class")),
                        Some(']') if empty => return Err(bad("empty character class")),
                        Some(']') => break,
                        Some('\\') => chars.next().ok_or_else(|| bad("trailing escape"))?,
                        Some(member) => member,
                    };
                    // Class metacharacters in the regex dialect, `-` stays a range
                    if matches!(member, '\\' | '[' | ']' | '^' | '&' | '~') {
                        out.push('\\');
                    }
                    out.push(member);
                    empty = false;
                }
                out.push(']');
            }
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push('$');
    Ok(out)
}

/// Sniff the MIME type of `data` from its content.
///
/// Known signatures come from `infer`, which also covers HTML and XML
/// markup. Valid UTF-8 is then checked for a JSON object or array
/// (`application/json`) and for comma-separated rows
/// (`text/csv; charset=utf-8`). Any other UTF-8, including an empty
/// buffer, is `text/plain; charset=utf-8`. The rest is
/// `application/octet-stream`.
pub fn get_mime(data: &[u8]) -> Mime {
    if let Some(mime) = infer::get(data).and_then(|kind| kind.mime_type().parse::<Mime>().ok()) {
        return mime;
    }
    match std::str::from_utf8(data) {
        Ok(text) if is_json(text) => mime::APPLICATION_JSON,
        Ok(text) if is_csv(text) => mime::TEXT_CSV_UTF_8,
        Ok(_) => mime::TEXT_PLAIN_UTF_8,
        Err(_) => mime::APPLICATION_OCTET_STREAM,
    }
}

fn is_json(text: &str) -> bool {
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<IgnoredAny>(trimmed).is_ok()
}

/// At least two rows, each with the same number (one or more) of commas
/// outside double quotes.
fn is_csv(text: &str) -> bool {
    let mut rows = text.lines().map(|line| line.trim_end_matches('\r'));
    let Some(separators) = rows.next().and_then(unquoted_commas) else {
        return false;
    };
    let mut count = 1;
    for row in rows.filter(|row| !row.is_empty()) {
        if unquoted_commas(row) != Some(separators) {
            return false;
        }
        count += 1;
    }
    separators > 0 && count >= 2
}

/// Commas outside quotes, or `None` when a quote is left open.
fn unquoted_commas(row: &str) -> Option<usize> {
    let mut quoted = false;
    let mut commas = 0;
    for c in row.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => commas += 1,
            _ => {}
        }
    }
    (!quoted).then_some(commas)
}

/// Pick a free name for `filename` inside `dir`.
///
/// Returns `filename` unchanged when it is not taken, otherwise
/// `stem-N.ext` for the lowest `N >= 1` not present in `dir`.
pub fn numbered_file(dir: impl AsRef<Path>, filename: &str) -> Result<String> {
    let dir = dir.as_ref();
    let existing: HashSet<String> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<_>>()?;

    if !existing.contains(filename) {
        return Ok(filename.to_string());
    }

    let (stem, ext) = split_name(filename);
    let taken: HashSet<u32> = existing
        .iter()
        .map(|name| parse_numbered_name(name))
        .filter(|p| p.stem == stem && p.extension == ext)
        .filter_map(|p| p.number)
        .collect();

    let number = (1..).find(|n| !taken.contains(n)).unwrap_or(u32::MAX);
    let name = numbered_name(stem, number, ext);
    debug!(dir = %dir.display(), requested = filename, resolved = %name, "numbered file");
    Ok(name)
}
