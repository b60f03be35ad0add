//! Shift executors, one per shiftable type
//!
//! Each executor turns a classified selection into its next or
//! previous value. Executors return `None` for every precondition
//! failure and fixed point; the engine translates that into "input
//! unchanged". Dispatch from a [`MatchResult`] happens in [`execute`].

pub(crate) mod camel;
pub(crate) mod comments;
pub(crate) mod html;
pub(crate) mod js;
pub(crate) mod lines;
pub(crate) mod lists;
pub(crate) mod mono;
pub(crate) mod numeric;
pub(crate) mod operators;
pub(crate) mod php;
pub(crate) mod quotes;
pub(crate) mod rgb;
pub(crate) mod ring;
pub(crate) mod roman;
pub(crate) mod rotate;
pub(crate) mod ternary;

use crate::domain::choice::ChoiceProvider;
use crate::domain::classify::{MatchResult, MatchState, ShiftableType};
use crate::domain::context::ShiftContext;
use crate::domain::dictionary::{Dictionary, DictionaryHit};

/// Runs the executor belonging to a classification result.
///
/// The match arms pair each type with the state its matcher recorded;
/// a state that does not fit the type can only come from a bug in the
/// matcher chain and falls through to `None`.
pub(crate) fn execute(
    result: &MatchResult,
    ctx: &ShiftContext,
    dictionary: &Dictionary,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    let text = &ctx.selected_text;
    let direction = ctx.direction;

    match (result.shiftable_type, &result.state) {
        (ShiftableType::PhpVariableOrArray, MatchState::Php(form)) => php::shifted(*form, ctx),
        (ShiftableType::DocCommentTag, _) => ring::shifted(ring::DOC_TAGS, text, direction),
        (ShiftableType::DocCommentDataType, _) => {
            ring::shifted(ring::doc_data_type_ring(ctx.extension()), text, direction)
        }
        (ShiftableType::AccessKeyword, _) => {
            ring::shifted(ring::ACCESS_KEYWORDS, text, direction)
        }
        (
            ShiftableType::DictionaryTermExtSpecific | ShiftableType::DictionaryTermGlobal,
            MatchState::Dictionary(hit),
        ) => shifted_dictionary_term(dictionary, hit, ctx),
        (ShiftableType::TernaryExpression, _) => ternary::shifted(text),
        (ShiftableType::QuotedString, MatchState::Quote(quote)) => {
            rotate::shifted_quoted_value(ctx, *quote)
        }
        (ShiftableType::QuoteWrappedString, MatchState::QuoteWrapped(quote)) => {
            quotes::toggled(text, *quote)
        }
        (ShiftableType::RgbColor, _) => rgb::shifted(text, direction),
        (ShiftableType::CssLengthValue, _) => numeric::shifted_css_length(text, direction),
        (ShiftableType::NumericValue, _) => numeric::shifted_value(text, direction),
        (ShiftableType::RomanNumeral, _) => roman::shifted(text, direction),
        (ShiftableType::OperatorSign, _) => operators::shifted_sign(text),
        (ShiftableType::LogicalOperator, _) => operators::shifted_logical(text),
        (ShiftableType::MonoCharacterString, _) => mono::shifted(text, direction),
        (ShiftableType::HtmlEncodableString, _) => html::shifted(text),
        (ShiftableType::NumericPostfix, _) => numeric::shifted_postfix(text, direction),
        (ShiftableType::SizzleSelector, _) => js::selector_assignment(text),
        (ShiftableType::Comment, MatchState::Comment(form)) => {
            comments::shifted(*form, ctx, choices)
        }
        (ShiftableType::TrailingComment, _) => comments::shifted_trailing(ctx),
        (ShiftableType::PhpConcatenation, _) => php::shifted_concatenation(text),
        (ShiftableType::CamelCaseWordPair, _) => camel::shifted_pair(text),
        (
            ShiftableType::SeparatedPath | ShiftableType::SeparatedList,
            MatchState::Delimiter(delimiter),
        ) => lists::shifted(*delimiter, ctx, choices),
        (ShiftableType::JsVariableDeclarations, _) => js::merged_declarations(text),
        (ShiftableType::LineSort, _) => lines::shifted(text, direction, choices),
        _ => None,
    }
}

/// Rotates a matched dictionary term one step through its list,
/// re-resolving the hit against the injected dictionary in case the
/// caller swapped snapshots between classify and shift.
fn shifted_dictionary_term(
    dictionary: &Dictionary,
    hit: &DictionaryHit,
    ctx: &ShiftContext,
) -> Option<String> {
    let list = dictionary.term_list(hit)?;
    if hit.index >= list.len() {
        return None;
    }
    let next = ring::step(hit.index, list.len(), ctx.direction);
    Some(list.terms()[next].clone())
}
