//! Built-in keyword rings and cyclic rotation
//!
//! A ring is an ordered list of interchangeable keywords. Shifting
//! moves one step through the ring and wraps at the ends, so repeated
//! shifts cycle. Matching against a ring is case-insensitive; the
//! engine re-applies the original case afterwards.

use crate::domain::context::Direction;

/// PHP-style member visibility keywords.
pub(crate) const ACCESS_KEYWORDS: &[&str] = &["public", "protected", "private"];

/// Doc-comment tags, alphabetical.
pub(crate) const DOC_TAGS: &[&str] = &[
    "author",
    "copyright",
    "deprecated",
    "example",
    "link",
    "package",
    "param",
    "return",
    "see",
    "since",
    "throws",
    "todo",
    "var",
    "version",
];

/// Doc-comment data types for PHP-style files.
const DOC_TYPES_PHP: &[&str] =
    &["array", "bool", "float", "int", "null", "object", "resource", "string"];

/// Doc-comment data types for JavaScript-family files.
const DOC_TYPES_JS: &[&str] = &["array", "boolean", "number", "object", "string", "undefined"];

/// Extensions that select the JavaScript data type flavor.
const JS_FAMILY: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "coffee"];

/// Picks the doc-comment data type ring for a file extension.
///
/// JavaScript-family files get the JS flavor; everything else,
/// including unknown extensions, gets the PHP flavor.
pub(crate) fn doc_data_type_ring(extension: Option<&str>) -> &'static [&'static str] {
    match extension {
        Some(ext) if JS_FAMILY.iter().any(|js| js.eq_ignore_ascii_case(ext)) => DOC_TYPES_JS,
        _ => DOC_TYPES_PHP,
    }
}

/// Whether `value` is a member of `ring`, ignoring case.
pub(crate) fn contains(ring: &[&str], value: &str) -> bool {
    ring.iter().any(|entry| entry.eq_ignore_ascii_case(value))
}

/// Rotates `value` one step through `ring`, wrapping at the ends.
///
/// Returns `None` when the value is not in the ring.
pub(crate) fn shifted(ring: &[&str], value: &str, direction: Direction) -> Option<String> {
    let index = ring.iter().position(|entry| entry.eq_ignore_ascii_case(value))?;
    Some(ring[step(index, ring.len(), direction)].to_string())
}

/// Index one step away from `index` in a cycle of `len` elements.
pub(crate) fn step(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(len > 0 && index < len);
    match direction {
        Direction::Up => (index + 1) % len,
        Direction::Down => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
    }
}
