//! PHP-specific shifts: array syntax toggling and concatenation swaps

use crate::domain::classify::PhpForm;
use crate::domain::context::ShiftContext;
use crate::domain::shift::rotate;

/// Dispatches the three PHP forms: variables rotate through the
/// document, arrays toggle between long and short syntax.
pub(crate) fn shifted(form: PhpForm, ctx: &ShiftContext) -> Option<String> {
    match form {
        PhpForm::Variable => rotate::shifted_php_variable(ctx),
        PhpForm::LongArray => long_to_short(&ctx.selected_text),
        PhpForm::ShortArray => short_to_long(&ctx.selected_text),
    }
}

/// `array( ... )` to `[ ... ]`, keeping interior text, a trailing
/// semicolon and surrounding whitespace as they were.
fn long_to_short(text: &str) -> Option<String> {
    let (lead, body, trail) = split_surrounding_whitespace(text);
    let (body, semicolon) = split_trailing_semicolon(body);

    let after_keyword = body.strip_prefix("array")?.trim_start();
    let interior = after_keyword.strip_prefix('(')?.strip_suffix(')')?;
    Some(format!("{lead}[{interior}]{semicolon}{trail}"))
}

/// `[ ... ]` to `array( ... )`.
fn short_to_long(text: &str) -> Option<String> {
    let (lead, body, trail) = split_surrounding_whitespace(text);
    let (body, semicolon) = split_trailing_semicolon(body);

    let interior = body.strip_prefix('[')?.strip_suffix(']')?;
    Some(format!("{lead}array({interior}){semicolon}{trail}"))
}

/// Swaps the two operands of a concatenation at its first top-level
/// dot, preserving the whitespace around the dot.
pub(crate) fn shifted_concatenation(text: &str) -> Option<String> {
    let (lead, body, trail) = split_surrounding_whitespace(text);
    let dot = concatenation_split(body)?;

    let left = &body[..dot];
    let right = &body[dot + 1..];

    let left_core = left.trim_end();
    let left_glue = &left[left_core.len()..];
    let right_glue_len = right.len() - right.trim_start().len();
    let (right_glue, right_core) = right.split_at(right_glue_len);

    Some(format!("{lead}{right_core}{left_glue}.{right_glue}{left_core}{trail}"))
}

/// Byte index of the first `.` outside quotes that plausibly separates
/// two concatenated operands. Digits on both sides are rejected so
/// decimal literals never split.
pub(crate) fn concatenation_split(text: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut in_quote: Option<char> = None;
    let mut escaped = false;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '\'' | '"' => match in_quote {
                Some(q) if q == c => in_quote = None,
                Some(_) => {}
                None => in_quote = Some(c),
            },
            '.' if in_quote.is_none() => {
                if pos == 0 || pos + 1 == chars.len() {
                    continue;
                }
                let before = chars[pos - 1].1;
                let after = chars[pos + 1].1;
                let left_ok = before.is_whitespace() || before == '\'' || before == '"';
                let right_ok =
                    after.is_whitespace() || after == '\'' || after == '"' || after == '$';
                if left_ok && right_ok {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_surrounding_whitespace(text: &str) -> (&str, &str, &str) {
    let trimmed_start = text.trim_start();
    let lead = &text[..text.len() - trimmed_start.len()];
    let body = trimmed_start.trim_end();
    let trail = &trimmed_start[body.len()..];
    (lead, body, trail)
}

fn split_trailing_semicolon(body: &str) -> (&str, &str) {
    match body.strip_suffix(';') {
        Some(stripped) => (stripped.trim_end(), ";"),
        None => (body, ""),
    }
}
