//! Matcher predicates, one per shiftable type
//!
//! Every matcher inspects the context and either claims the selection,
//! returning a [`MatchResult`] with whatever state the executor will
//! need, or passes with `None`. Matchers must stay cheap and free of
//! side effects; the expensive work happens in the executors.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::classify::{
    CommentForm, ListDelimiter, MatchResult, MatchState, PhpForm, ShiftableType,
};
use crate::domain::context::ShiftContext;
use crate::domain::dictionary::Dictionary;
use crate::domain::shift::{php, ring};

static PHP_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[a-zA-Z_][a-zA-Z0-9_]*$").expect("pattern is valid"));
static PHP_LONG_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^array\s*\(.*\)\s*;?$").expect("pattern is valid"));
static PHP_SHORT_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\[.*\]\s*;?$").expect("pattern is valid"));
static DOC_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/?\*+\s*@[a-zA-Z]").expect("pattern is valid"));
static RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("pattern is valid"));
static CSS_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(%|ch|cm|em|ex|in|mm|pc|pt|px|rem|vh|vmax|vmin|vw)$")
        .expect("pattern is valid")
});
static NUMERIC_POSTFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\D\d+$").expect("pattern is valid"));
static SIZZLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:\$|jQuery)\(\s*['"]([#.]?[A-Za-z][-\w]*)['"]\s*\)$"#)
        .expect("pattern is valid")
});
static TRAILING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\S\s+//.*$").expect("pattern is valid"));
static CAMEL_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-z0-9]*[A-Z][a-z0-9]+$").expect("pattern is valid"));
static PATH_MINUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+(-[a-zA-Z0-9]+)+$").expect("pattern is valid"));
static PATH_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+(_[a-zA-Z0-9]+)+$").expect("pattern is valid"));
static JS_VAR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*var\s+[^;]+;\s*$").expect("pattern is valid"));

pub(super) fn php_variable_or_array(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if PHP_VARIABLE.is_match(&ctx.selected_text) {
        return Some(MatchResult::with_state(
            ShiftableType::PhpVariableOrArray,
            MatchState::Php(PhpForm::Variable),
        ));
    }
    let trimmed = ctx.selected_text.trim();
    if PHP_LONG_ARRAY.is_match(trimmed) {
        return Some(MatchResult::with_state(
            ShiftableType::PhpVariableOrArray,
            MatchState::Php(PhpForm::LongArray),
        ));
    }
    if PHP_SHORT_ARRAY.is_match(trimmed) {
        return Some(MatchResult::with_state(
            ShiftableType::PhpVariableOrArray,
            MatchState::Php(PhpForm::ShortArray),
        ));
    }
    None
}

/// `@tag` words on doc-comment lines. Membership in the tag ring is not
/// required here; unknown tags classify and then shift as a no-op.
pub(super) fn doc_comment_tag(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if ctx.prefix_char != Some('@') {
        return None;
    }
    if !DOC_TAG_LINE.is_match(&ctx.caret_line) {
        return None;
    }
    if ctx.selected_text.is_empty() || !ctx.selected_text.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::DocCommentTag))
}

/// Data type words on doc-comment lines that carry a tag. Unlike tags,
/// these have no anchoring prefix, so ring membership is required or
/// every word of a tag description would classify here.
pub(super) fn doc_comment_data_type(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let line = ctx.caret_line.trim_start();
    if !(line.starts_with('*') || line.starts_with("/*")) {
        return None;
    }
    if !line.contains('@') {
        return None;
    }
    if !ring::contains(ring::doc_data_type_ring(ctx.extension()), &ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::DocCommentDataType))
}

pub(super) fn access_keyword(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if ctx.prefix_char == Some('@') {
        return None;
    }
    if !ring::contains(ring::ACCESS_KEYWORDS, &ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::AccessKeyword))
}

pub(super) fn dictionary_term_ext_specific(
    ctx: &ShiftContext,
    dict: &Dictionary,
) -> Option<MatchResult> {
    let hit = dict.locate(&ctx.selected_text, ctx.extension())?;
    Some(MatchResult::with_state(
        ShiftableType::DictionaryTermExtSpecific,
        MatchState::Dictionary(hit),
    ))
}

pub(super) fn ternary_expression(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let trimmed = ctx.selected_text.trim();
    let leads_with_question = trimmed.starts_with('?') || ctx.prefix_char == Some('?');
    if !leads_with_question || !trimmed.contains(':') {
        return None;
    }
    Some(MatchResult::new(ShiftableType::TernaryExpression))
}

pub(super) fn quoted_string(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let quote = ctx.prefix_char?;
    if !matches!(quote, '\'' | '"' | '`') || ctx.postfix_char != Some(quote) {
        return None;
    }
    if ctx.selected_text.contains(quote) {
        return None;
    }
    Some(MatchResult::with_state(ShiftableType::QuotedString, MatchState::Quote(quote)))
}

/// A selection carrying its own quotes: exactly one at each end and
/// none inside, e.g. `'hello'` selected including the quotes.
pub(super) fn quote_wrapped_string(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let text = &ctx.selected_text;
    let first = text.chars().next()?;
    let last = text.chars().last()?;
    if text.chars().count() < 2 || first != last || !matches!(first, '\'' | '"') {
        return None;
    }
    if text.matches(first).count() != 2 {
        return None;
    }
    Some(MatchResult::with_state(ShiftableType::QuoteWrappedString, MatchState::QuoteWrapped(first)))
}

pub(super) fn rgb_color(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if ctx.prefix_char != Some('#') || !RGB.is_match(&ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::RgbColor))
}

pub(super) fn css_length_value(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if !CSS_LENGTH.is_match(&ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::CssLengthValue))
}

pub(super) fn numeric_value(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let text = &ctx.selected_text;
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::NumericValue))
}

pub(super) fn roman_numeral(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let text = &ctx.selected_text;
    if text.is_empty() || !text.chars().all(|c| "IVXLCDM".contains(c)) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::RomanNumeral))
}

pub(super) fn operator_sign(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let trimmed = ctx.selected_text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(sign), None) if "+-*/<>".contains(sign) => {
            Some(MatchResult::new(ShiftableType::OperatorSign))
        }
        _ => None,
    }
}

pub(super) fn logical_operator(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    match ctx.selected_text.trim() {
        "&&" | "||" => Some(MatchResult::new(ShiftableType::LogicalOperator)),
        _ => None,
    }
}

pub(super) fn mono_character_string(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let mut chars = ctx.selected_text.chars();
    let first = chars.next()?;
    let mut rest = chars.peekable();
    if rest.peek().is_none() {
        return None;
    }
    if !rest.all(|c| c.eq_ignore_ascii_case(&first)) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::MonoCharacterString))
}

pub(super) fn dictionary_term_global(ctx: &ShiftContext, dict: &Dictionary) -> Option<MatchResult> {
    let hit = dict.locate_global(&ctx.selected_text, ctx.extension())?;
    Some(MatchResult::with_state(ShiftableType::DictionaryTermGlobal, MatchState::Dictionary(hit)))
}

pub(super) fn html_encodable_string(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if !crate::domain::shift::html::is_shiftable(&ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::HtmlEncodableString))
}

pub(super) fn numeric_postfix(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if !NUMERIC_POSTFIX.is_match(&ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::NumericPostfix))
}

pub(super) fn sizzle_selector(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if !SIZZLE.is_match(ctx.selected_text.trim()) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::SizzleSelector))
}

pub(super) fn comment(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let trimmed = ctx.selected_text.trim();
    if trimmed.starts_with("//") {
        return Some(MatchResult::with_state(
            ShiftableType::Comment,
            MatchState::Comment(CommentForm::Line),
        ));
    }
    if trimmed.len() >= 4 && trimmed.starts_with("/*") && trimmed.ends_with("*/") {
        return Some(MatchResult::with_state(
            ShiftableType::Comment,
            MatchState::Comment(CommentForm::Block),
        ));
    }
    None
}

/// Code followed by a `//` comment on the same line. Only fires when
/// nothing follows the selection on its line, otherwise the comment is
/// not actually trailing. The selection may carry its line terminator.
pub(super) fn trailing_comment(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let line = match ctx.selected_text.strip_suffix('\n') {
        Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped),
        None => &ctx.selected_text,
    };
    let at_line_end = line.len() < ctx.selected_text.len()
        || matches!(ctx.postfix_char, None | Some('\n'))
        || ctx.is_last_line;
    if !at_line_end {
        return None;
    }
    if line.trim_start().starts_with("//") {
        return None;
    }
    if !TRAILING_COMMENT.is_match(line) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::TrailingComment))
}

pub(super) fn php_concatenation(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    php::concatenation_split(ctx.selected_text.trim())?;
    Some(MatchResult::new(ShiftableType::PhpConcatenation))
}

pub(super) fn camel_case_word_pair(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if !CAMEL_PAIR.is_match(&ctx.selected_text) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::CamelCaseWordPair))
}

pub(super) fn separated_path(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let text = &ctx.selected_text;
    if PATH_MINUS.is_match(text) {
        return Some(MatchResult::with_state(
            ShiftableType::SeparatedPath,
            MatchState::Delimiter(ListDelimiter::Minus),
        ));
    }
    if PATH_UNDERSCORE.is_match(text) {
        return Some(MatchResult::with_state(
            ShiftableType::SeparatedPath,
            MatchState::Delimiter(ListDelimiter::Underscore),
        ));
    }
    None
}

pub(super) fn separated_list(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let text = &ctx.selected_text;
    for (delimiter, ch) in [(ListDelimiter::Comma, ','), (ListDelimiter::Pipe, '|')] {
        if !text.contains(ch) {
            continue;
        }
        let parts: Vec<&str> = text.split(ch).collect();
        if parts.len() >= 2 && parts.iter().all(|p| !p.trim().is_empty()) {
            return Some(MatchResult::with_state(
                ShiftableType::SeparatedList,
                MatchState::Delimiter(delimiter),
            ));
        }
    }
    if text.trim().split_whitespace().count() >= 2 {
        return Some(MatchResult::with_state(
            ShiftableType::SeparatedList,
            MatchState::Delimiter(ListDelimiter::Whitespace),
        ));
    }
    None
}

pub(super) fn js_variable_declarations(
    ctx: &ShiftContext,
    _dict: &Dictionary,
) -> Option<MatchResult> {
    let lines: Vec<&str> = ctx.selected_text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 || !lines.iter().all(|l| JS_VAR_LINE.is_match(l)) {
        return None;
    }
    Some(MatchResult::new(ShiftableType::JsVariableDeclarations))
}

pub(super) fn multi_line_comment(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    let trimmed = ctx.selected_text.trim();
    if trimmed.starts_with("/*") && trimmed.ends_with("*/") {
        return Some(MatchResult::with_state(
            ShiftableType::Comment,
            MatchState::Comment(CommentForm::MultiLineBlock),
        ));
    }
    let lines: Vec<&str> = ctx.selected_text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() >= 2 && lines.iter().all(|l| l.trim_start().starts_with("//")) {
        return Some(MatchResult::with_state(
            ShiftableType::Comment,
            MatchState::Comment(CommentForm::LineRun),
        ));
    }
    None
}

pub(super) fn line_sort(ctx: &ShiftContext, _dict: &Dictionary) -> Option<MatchResult> {
    if ctx.selected_text.lines().count() < 2 {
        return None;
    }
    Some(MatchResult::new(ShiftableType::LineSort))
}
