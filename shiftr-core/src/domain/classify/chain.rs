//! Priority-ordered matcher chains
//!
//! The order of these tables is a behavioral contract: earlier entries
//! shadow later ones, and several matchers are only correct because a
//! more specific matcher runs first. Reorder with care and keep the
//! chain tests in sync.

use crate::domain::classify::{matchers, MatchResult, ShiftableType};
use crate::domain::context::ShiftContext;
use crate::domain::dictionary::Dictionary;

/// One slot in a matcher chain.
pub struct MatcherEntry {
    /// Type this slot classifies as; mirrors what the matcher returns.
    pub shiftable_type: ShiftableType,
    /// The predicate itself.
    pub matches: fn(&ShiftContext, &Dictionary) -> Option<MatchResult>,
}

/// Chain applied to selections without a newline.
pub static SINGLE_LINE_CHAIN: &[MatcherEntry] = &[
    MatcherEntry {
        shiftable_type: ShiftableType::PhpVariableOrArray,
        matches: matchers::php_variable_or_array,
    },
    MatcherEntry { shiftable_type: ShiftableType::DocCommentTag, matches: matchers::doc_comment_tag },
    MatcherEntry {
        shiftable_type: ShiftableType::DocCommentDataType,
        matches: matchers::doc_comment_data_type,
    },
    MatcherEntry { shiftable_type: ShiftableType::AccessKeyword, matches: matchers::access_keyword },
    MatcherEntry {
        shiftable_type: ShiftableType::DictionaryTermExtSpecific,
        matches: matchers::dictionary_term_ext_specific,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::TernaryExpression,
        matches: matchers::ternary_expression,
    },
    MatcherEntry { shiftable_type: ShiftableType::QuotedString, matches: matchers::quoted_string },
    MatcherEntry {
        shiftable_type: ShiftableType::QuoteWrappedString,
        matches: matchers::quote_wrapped_string,
    },
    MatcherEntry { shiftable_type: ShiftableType::RgbColor, matches: matchers::rgb_color },
    MatcherEntry {
        shiftable_type: ShiftableType::CssLengthValue,
        matches: matchers::css_length_value,
    },
    MatcherEntry { shiftable_type: ShiftableType::NumericValue, matches: matchers::numeric_value },
    // Before the mono-character matcher so II and XX shift as numerals.
    MatcherEntry { shiftable_type: ShiftableType::RomanNumeral, matches: matchers::roman_numeral },
    MatcherEntry { shiftable_type: ShiftableType::OperatorSign, matches: matchers::operator_sign },
    // Before the mono-character matcher so && and || toggle instead of
    // cycling as repeated characters.
    MatcherEntry {
        shiftable_type: ShiftableType::LogicalOperator,
        matches: matchers::logical_operator,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::MonoCharacterString,
        matches: matchers::mono_character_string,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::DictionaryTermGlobal,
        matches: matchers::dictionary_term_global,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::HtmlEncodableString,
        matches: matchers::html_encodable_string,
    },
    MatcherEntry { shiftable_type: ShiftableType::NumericPostfix, matches: matchers::numeric_postfix },
    MatcherEntry { shiftable_type: ShiftableType::SizzleSelector, matches: matchers::sizzle_selector },
    MatcherEntry { shiftable_type: ShiftableType::Comment, matches: matchers::comment },
    // After the plain comment matcher, so a selection that is itself a
    // comment never counts as code with a trailing comment.
    MatcherEntry {
        shiftable_type: ShiftableType::TrailingComment,
        matches: matchers::trailing_comment,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::PhpConcatenation,
        matches: matchers::php_concatenation,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::CamelCaseWordPair,
        matches: matchers::camel_case_word_pair,
    },
    MatcherEntry { shiftable_type: ShiftableType::SeparatedPath, matches: matchers::separated_path },
    MatcherEntry { shiftable_type: ShiftableType::SeparatedList, matches: matchers::separated_list },
];

/// Chain applied to selections containing a newline.
pub static MULTI_LINE_CHAIN: &[MatcherEntry] = &[
    MatcherEntry {
        shiftable_type: ShiftableType::PhpVariableOrArray,
        matches: matchers::php_variable_or_array,
    },
    MatcherEntry {
        shiftable_type: ShiftableType::JsVariableDeclarations,
        matches: matchers::js_variable_declarations,
    },
    MatcherEntry { shiftable_type: ShiftableType::Comment, matches: matchers::multi_line_comment },
    MatcherEntry { shiftable_type: ShiftableType::LineSort, matches: matchers::line_sort },
];

/// Classifies a selection by walking the applicable chain and stopping
/// at the first matcher that claims it.
pub fn classify(ctx: &ShiftContext, dictionary: &Dictionary) -> Option<MatchResult> {
    if ctx.selected_text.is_empty() {
        return None;
    }
    let chain = if ctx.is_multi_line() { MULTI_LINE_CHAIN } else { SINGLE_LINE_CHAIN };
    chain.iter().find_map(|entry| (entry.matches)(ctx, dictionary))
}
