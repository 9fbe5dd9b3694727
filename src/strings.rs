//! String helpers: character filtering, random tokens, slugs, formatting.
//!
//! All helpers are total except [`format_regex`], which rejects an invalid
//! pattern. Empty input yields empty output.
//!
//! ## Persian variants
//!
//! [`extract_alphanum_persian`] and [`slugify_persian`] extend the ASCII
//! alphanumeric class with letters and digits from the Arabic-script blocks
//! Persian text is written in (including گ چ پ ژ and the Persian digits
//! ۰–۹). Arabic punctuation such as `؟` or `،` is still dropped.

use rand::Rng;
use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

const DIGITS: &[u8] = b"0123456789";
const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Format verbs understood by [`format_number`]: `%d`, `%v`, `%f`, `%.2f`, `%%`.
static VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:\.(\d+))?([dfv])|%%").expect("verb pattern is valid"));

fn is_persian_alphanumeric(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}'
    ) && c.is_alphanumeric()
}

fn is_persian_or_ascii(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_persian_alphanumeric(c)
}

/// Keep only ASCII digits.
pub fn extract_numbers(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only ASCII letters and digits.
pub fn extract_alphanum(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Keep ASCII letters and digits plus Persian letters and digits.
pub fn extract_alphanum_persian(s: &str) -> String {
    s.chars().filter(|&c| is_persian_or_ascii(c)).collect()
}

fn random_from(charset: &[u8], length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Random string of `length` decimal digits.
pub fn random_numeric(length: usize) -> String {
    random_from(DIGITS, length)
}

/// Random string of `length` characters from `A-Z0-9`.
pub fn random_alphanum(length: usize) -> String {
    random_from(ALPHANUM, length)
}

fn slugify_with<I, S>(parts: I, keep: fn(char) -> bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slug = String::new();
    let mut pending_dash = false;
    for part in parts {
        // Part boundaries separate words just like whitespace
        pending_dash = true;
        for c in part.as_ref().chars().flat_map(char::to_lowercase) {
            if keep(c) {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c);
            } else {
                pending_dash = true;
            }
        }
    }
    slug
}

/// Lowercase, hyphen-separated ASCII slug built from `parts`.
///
/// ```
/// # use universal_utils::strings::slugify;
/// assert_eq!(slugify(["Hello-- ", "  World!"]), "hello-world");
/// ```
pub fn slugify<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slugify_with(parts, |c| c.is_ascii_alphanumeric())
}

/// Like [`slugify`], but Persian letters and digits survive.
pub fn slugify_persian<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slugify_with(parts, is_persian_or_ascii)
}

/// Join the parts that are not blank with `sep`.
pub fn concat<I, S>(sep: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Insert `,` between groups of three digits in the integer part.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        // inf, NaN
        return number.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}{frac_part}")
}

/// Render `value` into `layout` with thousands separators.
///
/// `%d` and `%v` print the value as-is, `%f` prints six decimals and `%.Nf`
/// prints `N` decimals. `%%` is a literal percent sign. Every verb receives
/// the same value. A precision above 65535 is left in the output untouched.
///
/// ```
/// # use universal_utils::strings::format_number;
/// assert_eq!(format_number("%d Dollars", 100000), "100,000 Dollars");
/// assert_eq!(format_number("%.2f%%", 1234.5), "1,234.50%");
/// ```
pub fn format_number<T: Display>(layout: &str, value: T) -> String {
    let plain = value.to_string();
    VERB.replace_all(layout, |caps: &Captures| {
        let Some(verb) = caps.get(2) else {
            return "%".to_string();
        };
        let rendered = match (verb.as_str(), plain.parse::<f64>()) {
            ("f", Ok(number)) => {
                let precision = match caps.get(1) {
                    None => 6,
                    // fmt rejects precisions above u16::MAX
                    Some(p) => match p.as_str().parse::<u16>() {
                        Ok(precision) => usize::from(precision),
                        Err(_) => return caps[0].to_string(),
                    },
                };
                format!("{number:.precision$}")
            }
            _ => plain.clone(),
        };
        group_thousands(&rendered)
    })
    .into_owned()
}

/// Rewrite `data` with a regex replacement template.
///
/// Templates use `$1` / `${name}` group references.
///
/// ```
/// # use universal_utils::strings::format_regex;
/// let phone = format_regex("123456", r"(\d{3})(\d{2})(\d{1})", "($1) $2-$3").unwrap();
/// assert_eq!(phone, "(123) 45-6");
/// ```
pub fn format_regex(data: &str, pattern: &str, replacement: &str) -> Result<String, FormatError> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(data, replacement).into_owned())
}
