//! Separated list and path resorting

use crate::domain::choice::ChoiceProvider;
use crate::domain::classify::ListDelimiter;
use crate::domain::compare::alphanumeric;
use crate::domain::context::{Direction, ShiftContext};

const DEDUP_OPTIONS: &[&str] = &["Keep duplicates", "Remove duplicates"];
const DEDUP_PROMPT: &str = "Duplicate items";

/// Resorts a delimited selection.
///
/// A 2-tuple swaps regardless of direction. Longer lists sort ascending
/// on Up and descending on Down with the alphanumeric comparator. The
/// whitespace around each delimiter is kept positionally, so `c, a,b`
/// resorts to `a, b,c`.
pub(crate) fn shifted(
    delimiter: ListDelimiter,
    ctx: &ShiftContext,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    match delimiter {
        ListDelimiter::Comma => shifted_char_list(&ctx.selected_text, ',', ctx.direction, choices),
        ListDelimiter::Pipe => shifted_char_list(&ctx.selected_text, '|', ctx.direction, choices),
        ListDelimiter::Whitespace => shifted_word_list(&ctx.selected_text, ctx.direction, choices),
        ListDelimiter::Minus => shifted_path(&ctx.selected_text, '-', ctx.direction, choices),
        ListDelimiter::Underscore => {
            shifted_path(&ctx.selected_text, '_', ctx.direction, choices)
        }
    }
}

fn shifted_char_list(
    text: &str,
    delimiter: char,
    direction: Direction,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    let parts: Vec<&str> = text.split(delimiter).collect();
    let cores: Vec<String> = parts.iter().map(|p| p.trim().to_string()).collect();
    if cores.iter().any(|c| c.is_empty()) {
        return None;
    }

    let sorted = resorted(cores, direction, choices)?;

    let mut out = String::with_capacity(text.len());
    for (idx, core) in sorted.iter().enumerate() {
        if idx > 0 {
            out.push(delimiter);
        }
        let shell = parts.get(idx).copied().unwrap_or("");
        out.push_str(leading_ws(shell));
        out.push_str(core);
        out.push_str(trailing_ws(shell));
    }
    Some(out)
}

fn shifted_word_list(
    text: &str,
    direction: Direction,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    let (gaps, tokens) = split_words(text);
    if tokens.len() < 2 {
        return None;
    }

    let cores: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    let sorted = resorted(cores, direction, choices)?;

    let mut out = String::with_capacity(text.len());
    for (idx, core) in sorted.iter().enumerate() {
        out.push_str(gaps.get(idx).copied().unwrap_or(" "));
        out.push_str(core);
    }
    out.push_str(gaps.last().copied().unwrap_or(""));
    Some(out)
}

fn shifted_path(
    text: &str,
    delimiter: char,
    direction: Direction,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    let segments: Vec<String> = text.split(delimiter).map(|s| s.to_string()).collect();
    let sorted = resorted(segments, direction, choices)?;
    Some(sorted.join(&delimiter.to_string()))
}

/// Swap for 2-tuples, comparator sort for longer lists, with the
/// duplicate prompt when sorting exposes equal neighbors.
fn resorted(
    mut cores: Vec<String>,
    direction: Direction,
    choices: &dyn ChoiceProvider,
) -> Option<Vec<String>> {
    if cores.len() < 2 {
        return None;
    }
    if cores.len() == 2 {
        cores.swap(0, 1);
        return Some(cores);
    }

    cores.sort_by(|a, b| alphanumeric::compare(a, b));
    if direction == Direction::Down {
        cores.reverse();
    }

    let has_duplicates = cores.windows(2).any(|w| w[0] == w[1]);
    if has_duplicates && choices.select(DEDUP_PROMPT, DEDUP_OPTIONS) == Some(1) {
        cores.dedup();
    }
    Some(cores)
}

/// Splits into whitespace gaps and word tokens. `gaps` always has one
/// more entry than `tokens`: leading, between each pair, trailing.
fn split_words(text: &str) -> (Vec<&str>, Vec<&str>) {
    let mut gaps = Vec::new();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (idx, c) in text.char_indices() {
        let word_char = !c.is_whitespace();
        if word_char != in_word {
            if in_word {
                tokens.push(&text[start..idx]);
            } else {
                gaps.push(&text[start..idx]);
            }
            start = idx;
            in_word = word_char;
        }
    }
    if in_word {
        tokens.push(&text[start..]);
        gaps.push("");
    } else {
        gaps.push(&text[start..]);
    }
    if gaps.len() == tokens.len() {
        // Text started with a word; synthesize the empty leading gap.
        gaps.insert(0, "");
    }
    (gaps, tokens)
}

fn leading_ws(part: &str) -> &str {
    &part[..part.len() - part.trim_start().len()]
}

fn trailing_ws(part: &str) -> &str {
    &part[part.trim_end().len()..]
}
