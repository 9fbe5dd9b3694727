//! Web text helpers: root-relative URLs and HTML sanitizing.
//!
//! URL helpers are pure string work over forward-slash paths and share the
//! segment cleaning used by [`files::normalize_path`](crate::files::normalize_path).
//! Sanitizing is done by `ammonia` (html5ever-based), so malformed markup is
//! parsed the way a browser would parse it before anything is kept.

use crate::config::SanitizeConfig;
use crate::files::clean_segments;
use ammonia::Builder;
use std::collections::HashSet;

/// Tags whose *content* is dropped along with the tag itself.
const CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Path formed by joining `parts`, relative to `root`.
///
/// Returns `""` when the path is the root itself. Paths outside `root` climb
/// with `..`.
///
/// ```
/// # use universal_utils::web::relative_url;
/// assert_eq!(relative_url("g:/mekramy", ["g:/mekramy/utils/web.go"]), "utils/web.go");
/// assert_eq!(relative_url("/srv/site", ["/srv/site", "css", "main.css"]), "css/main.css");
/// assert_eq!(relative_url("/srv/site", ["/srv/other"]), "../other");
/// ```
pub fn relative_url<I, S>(root: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let root = clean_segments([root]);
    let target = clean_segments(parts);

    let common = root
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    std::iter::repeat_n("..", root.len() - common)
        .chain(target[common..].iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("/")
}

/// [`relative_url`] with a leading `/`.
pub fn absolute_url<I, S>(root: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("/{}", relative_url(root, parts))
}

fn finish(cleaned: String, trim: bool) -> String {
    if trim {
        cleaned.trim().to_string()
    } else {
        cleaned
    }
}

/// Strip every tag, keeping only text. `script` and `style` content is
/// removed entirely.
///
/// ```
/// # use universal_utils::web::sanitize_raw;
/// assert_eq!(sanitize_raw("  <i>italic</i>  ", true), "italic");
/// ```
pub fn sanitize_raw(html: &str, trim: bool) -> String {
    let cleaned = Builder::empty()
        .clean_content_tags(CONTENT_TAGS.into_iter().collect())
        .clean(html)
        .to_string();
    finish(cleaned, trim)
}

/// Keep a common, safe subset of markup suitable for user-generated content:
/// formatting, links, lists, tables, images. Scripts, styles, event
/// handlers and unsafe URL schemes are removed.
pub fn sanitize_common(html: &str, trim: bool) -> String {
    finish(Builder::default().clean(html).to_string(), trim)
}

/// Sanitize against the allow-list in `config`.
///
/// Without an explicit allow-list this is [`sanitize_common`]. `script` and
/// `style` are never allowed.
pub fn sanitize_with(html: &str, trim: bool, config: &SanitizeConfig) -> String {
    let Some(allowed) = &config.allowed_tags else {
        return sanitize_common(html, trim);
    };
    let tags: HashSet<&str> = allowed
        .iter()
        .map(String::as_str)
        .filter(|tag| !CONTENT_TAGS.contains(tag))
        .collect();

    let cleaned = Builder::default().tags(tags).clean(html).to_string();
    finish(cleaned, trim)
}
