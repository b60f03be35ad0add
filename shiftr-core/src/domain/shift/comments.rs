//! Comment shifting: style conversion, merging and trailing moves

use crate::domain::choice::ChoiceProvider;
use crate::domain::classify::CommentForm;
use crate::domain::compare::natural;
use crate::domain::context::ShiftContext;

/// Dispatches on the matched comment form.
pub(crate) fn shifted(
    form: CommentForm,
    ctx: &ShiftContext,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    match form {
        CommentForm::Line => line_to_block(&ctx.selected_text),
        CommentForm::Block => block_to_line(&ctx.selected_text),
        CommentForm::LineRun => shifted_line_run(&ctx.selected_text, choices),
        CommentForm::MultiLineBlock => shifted_multi_line_block(&ctx.selected_text, choices),
    }
}

/// `// note` to `/* note */`, keeping indentation.
fn line_to_block(text: &str) -> Option<String> {
    let (lead, body, trail) = split_ws(text);
    let content = body.strip_prefix("//")?;
    Some(format!("{lead}/*{content} */{trail}"))
}

/// Single-line `/* note */` to `// note`.
fn block_to_line(text: &str) -> Option<String> {
    let (lead, body, trail) = split_ws(text);
    let content = body.strip_prefix("/*")?.strip_suffix("*/")?.trim_end();
    Some(format!("{lead}//{content}{trail}"))
}

const LINE_RUN_OPTIONS: &[&str] = &[
    "Convert to block comment",
    "Merge into one line",
    "Sort lines ascending",
    "Sort lines descending",
];

/// A run of `//` lines. The provider picks the transformation; without
/// an answer the run converts to a block comment.
fn shifted_line_run(text: &str, choices: &dyn ChoiceProvider) -> Option<String> {
    let choice = choices.select("Shift comment lines", LINE_RUN_OPTIONS).unwrap_or(0);
    match choice {
        0 => line_run_to_block(text),
        1 => merge_line_run(text),
        2 => sort_line_run(text, false),
        3 => sort_line_run(text, true),
        _ => None,
    }
}

fn line_run_to_block(text: &str) -> Option<String> {
    let indent = first_indent(text);
    let mut out = format!("{indent}/*\n");
    for line in comment_lines(text) {
        let content = line.trim_start().strip_prefix("//")?.trim();
        out.push_str(&format!("{indent} * {content}\n"));
    }
    out.push_str(&format!("{indent} */"));
    Some(out)
}

fn merge_line_run(text: &str) -> Option<String> {
    let indent = first_indent(text);
    let mut parts = Vec::new();
    for line in comment_lines(text) {
        parts.push(line.trim_start().strip_prefix("//")?.trim().to_string());
    }
    Some(format!("{indent}// {}", parts.join(" ")))
}

fn sort_line_run(text: &str, descending: bool) -> Option<String> {
    let mut lines = comment_lines(text);
    lines.sort_by(|a, b| natural::compare(a, b));
    if descending {
        lines.reverse();
    }
    Some(lines.join("\n"))
}

const BLOCK_OPTIONS: &[&str] = &["Convert to line comments", "Merge into one line"];

/// A `/* ... */` spanning lines. Converts to `//` lines by default,
/// merges to a single-line block on request.
fn shifted_multi_line_block(text: &str, choices: &dyn ChoiceProvider) -> Option<String> {
    let (lead, body, _) = split_ws(text);
    let interior = body.strip_prefix("/*")?.strip_suffix("*/")?;
    let indent = leading_spaces(lead);

    let mut contents = Vec::new();
    for line in interior.lines() {
        let line = line.trim_start().trim_start_matches('*').trim();
        if !line.is_empty() {
            contents.push(line.to_string());
        }
    }
    if contents.is_empty() {
        return None;
    }

    match choices.select("Shift block comment", BLOCK_OPTIONS).unwrap_or(0) {
        0 => Some(
            contents
                .iter()
                .map(|c| format!("{indent}// {c}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        1 => Some(format!("{indent}/* {} */", contents.join(" "))),
        _ => None,
    }
}

/// Moves a trailing `//` comment onto its own line above the code,
/// reusing the caret line's indentation. A selection that includes its
/// line terminator keeps it, unless the line is the document's last.
pub(crate) fn shifted_trailing(ctx: &ShiftContext) -> Option<String> {
    let (text, terminator) = match ctx.selected_text.strip_suffix('\n') {
        Some(stripped) => match stripped.strip_suffix('\r') {
            Some(stripped) => (stripped, "\r\n"),
            None => (stripped, "\n"),
        },
        None => (ctx.selected_text.as_str(), ""),
    };
    let slashes = find_trailing_slashes(text)?;

    let code = text[..slashes].trim_end();
    let comment = &text[slashes..];
    if code.trim().is_empty() || code.trim_start().starts_with("//") {
        return None;
    }

    let terminator = if ctx.is_last_line { "" } else { terminator };
    let indent = leading_spaces(&ctx.caret_line);
    Some(format!("{indent}{comment}\n{indent}{}{terminator}", code.trim_start()))
}

/// Byte index of the `//` that starts the trailing comment: the first
/// occurrence preceded by whitespace and outside quotes, so protocol
/// separators like `http://` are not split points.
fn find_trailing_slashes(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut in_quote: Option<u8> = None;
    let mut idx = 0;

    while idx + 1 < bytes.len() {
        let b = bytes[idx];
        match in_quote {
            Some(q) => {
                if b == q {
                    in_quote = None;
                }
            }
            None => {
                if b == b'\'' || b == b'"' {
                    in_quote = Some(b);
                } else if b == b'/'
                    && bytes[idx + 1] == b'/'
                    && idx > 0
                    && bytes[idx - 1].is_ascii_whitespace()
                {
                    return Some(idx);
                }
            }
        }
        idx += 1;
    }
    None
}

fn comment_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

fn first_indent(text: &str) -> &str {
    comment_lines(text).first().map(|l| leading_spaces(l)).unwrap_or("")
}

fn leading_spaces(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn split_ws(text: &str) -> (&str, &str, &str) {
    let trimmed_start = text.trim_start();
    let lead = &text[..text.len() - trimmed_start.len()];
    let body = trimmed_start.trim_end();
    let trail = &trimmed_start[body.len()..];
    (lead, body, trail)
}
