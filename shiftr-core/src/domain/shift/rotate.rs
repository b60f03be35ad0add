//! Document-wide value rotation
//!
//! PHP variables and quoted string values shift by rotating through the
//! set of all such values in the document: collect, dedup, sort, then
//! step to the neighbor of the current value. A repeated "more" shift
//! switches to a reduced set with one representative per leading
//! character, which skips ahead alphabetically instead of stepping.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::context::{Direction, ShiftContext};
use crate::domain::shift::ring;

static PHP_VARIABLES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[a-zA-Z_][a-zA-Z0-9_]*").expect("pattern is valid"));
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^'\r\n]*)'").expect("pattern is valid"));
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\r\n]*)""#).expect("pattern is valid"));
static BACKTICK_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\r\n]*)`").expect("pattern is valid"));

/// Rotates a `$variable` through all variables in the document.
pub(crate) fn shifted_php_variable(ctx: &ShiftContext) -> Option<String> {
    let candidates: Vec<String> = PHP_VARIABLES
        .find_iter(&ctx.document_text)
        .map(|m| m.as_str().to_string())
        .collect();
    rotate(candidates, &ctx.selected_text, ctx.direction, ctx.more_count.is_some())
}

/// Rotates the value inside a quoted string through all values quoted
/// with the same character in the document.
pub(crate) fn shifted_quoted_value(ctx: &ShiftContext, quote: char) -> Option<String> {
    let pattern = match quote {
        '\'' => &SINGLE_QUOTED,
        '"' => &DOUBLE_QUOTED,
        '`' => &BACKTICK_QUOTED,
        _ => return None,
    };
    let candidates: Vec<String> = pattern
        .captures_iter(&ctx.document_text)
        .map(|c| c[1].to_string())
        .collect();
    rotate(candidates, &ctx.selected_text, ctx.direction, ctx.more_count.is_some())
}

/// Core rotation: dedup and sort the candidates, locate the current
/// value, and step once with wrap-around.
fn rotate(
    mut candidates: Vec<String>,
    current: &str,
    direction: Direction,
    reduced: bool,
) -> Option<String> {
    candidates.sort();
    candidates.dedup();
    if reduced {
        candidates = reduce_to_leading_char_representatives(candidates);
    }
    if candidates.len() < 2 {
        return None;
    }

    let index = if reduced {
        let lead = leading_key(current)?;
        candidates.iter().position(|c| leading_key(c) == Some(lead))?
    } else {
        candidates.iter().position(|c| c == current)?
    };

    let next = ring::step(index, candidates.len(), direction);
    Some(candidates[next].clone())
}

/// First character of the value, skipping a `$` sigil so PHP variables
/// reduce by name rather than all sharing the sigil.
fn leading_key(value: &str) -> Option<char> {
    value.trim_start_matches('$').chars().next()
}

/// Keeps the first candidate per distinct leading key. Input must
/// already be sorted.
fn reduce_to_leading_char_representatives(candidates: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if out.last().map(|prev| leading_key(prev)) != Some(leading_key(&candidate)) {
            out.push(candidate);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn php_ctx(selection: &str, document: &str, direction: Direction) -> ShiftContext {
        ShiftContext::new(selection, direction).with_document(document)
    }

    #[test]
    fn test_php_variable_steps_alphabetically() {
        let doc = "$zulu = 1; $alpha = 2; $mike = $alpha;";
        assert_eq!(
            shifted_php_variable(&php_ctx("$alpha", doc, Direction::Up)).unwrap(),
            "$mike"
        );
        assert_eq!(
            shifted_php_variable(&php_ctx("$mike", doc, Direction::Down)).unwrap(),
            "$alpha"
        );
    }

    #[test]
    fn test_php_variable_wraps() {
        let doc = "$a = $b;";
        assert_eq!(shifted_php_variable(&php_ctx("$b", doc, Direction::Up)).unwrap(), "$a");
        assert_eq!(shifted_php_variable(&php_ctx("$a", doc, Direction::Down)).unwrap(), "$b");
    }

    #[test]
    fn test_duplicates_collapse() {
        let doc = "$a; $b; $b; $b; $c;";
        assert_eq!(shifted_php_variable(&php_ctx("$b", doc, Direction::Up)).unwrap(), "$c");
    }

    #[test]
    fn test_lone_variable_is_none() {
        let doc = "$only = 1; $only += 1;";
        assert_eq!(shifted_php_variable(&php_ctx("$only", doc, Direction::Up)), None);
    }

    #[test]
    fn test_selection_missing_from_document_is_none() {
        let doc = "$a = $b;";
        assert_eq!(shifted_php_variable(&php_ctx("$zz", doc, Direction::Up)), None);
    }

    #[test]
    fn test_more_mode_skips_to_next_leading_char() {
        let doc = "$apple; $anchor; $berry; $cherry; $citrus;";
        let ctx = php_ctx("$anchor", doc, Direction::Up).with_more_count(1);
        // Reduced set: $anchor, $berry, $cherry.
        assert_eq!(shifted_php_variable(&ctx).unwrap(), "$berry");
    }

    #[test]
    fn test_quoted_value_rotation_respects_quote_kind() {
        let doc = r#"$a = 'one'; $b = "two"; $c = 'three';"#;
        let ctx = ShiftContext::new("one", Direction::Up).with_document(doc);
        // Only single-quoted values participate: one, three.
        assert_eq!(shifted_quoted_value(&ctx, '\'').unwrap(), "three");
        assert_eq!(shifted_quoted_value(&ctx, '"'), None);
    }

    #[test]
    fn test_quoted_value_wraps_sorted_order() {
        let doc = "'b' 'a' 'c'";
        let ctx = ShiftContext::new("c", Direction::Up).with_document(doc);
        assert_eq!(shifted_quoted_value(&ctx, '\'').unwrap(), "a");
    }
}
