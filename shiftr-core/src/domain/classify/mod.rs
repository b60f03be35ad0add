//! Token classification
//!
//! Classification walks a priority-ordered chain of matchers and stops
//! at the first hit. Two chains exist: one for single-line selections
//! and one for selections containing a newline. The chains are
//! published as static data so hosts can inspect or display the
//! decision order.

mod chain;
mod matchers;

pub use chain::{classify, MatcherEntry, MULTI_LINE_CHAIN, SINGLE_LINE_CHAIN};

use serde::Serialize;

use crate::domain::dictionary::DictionaryHit;

/// Semantic category a selection was classified as.
///
/// Variants are ordered by their single-line chain priority; multi-line
/// only categories follow at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftableType {
    PhpVariableOrArray,
    DocCommentTag,
    DocCommentDataType,
    AccessKeyword,
    DictionaryTermExtSpecific,
    TernaryExpression,
    QuotedString,
    QuoteWrappedString,
    RgbColor,
    CssLengthValue,
    NumericValue,
    RomanNumeral,
    OperatorSign,
    LogicalOperator,
    MonoCharacterString,
    DictionaryTermGlobal,
    HtmlEncodableString,
    NumericPostfix,
    SizzleSelector,
    Comment,
    TrailingComment,
    PhpConcatenation,
    CamelCaseWordPair,
    SeparatedPath,
    SeparatedList,
    JsVariableDeclarations,
    LineSort,
}

impl ShiftableType {
    /// Stable kebab-case name, used by the CLI and log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhpVariableOrArray => "php-variable-or-array",
            Self::DocCommentTag => "doc-comment-tag",
            Self::DocCommentDataType => "doc-comment-data-type",
            Self::AccessKeyword => "access-keyword",
            Self::DictionaryTermExtSpecific => "dictionary-term-ext-specific",
            Self::TernaryExpression => "ternary-expression",
            Self::QuotedString => "quoted-string",
            Self::QuoteWrappedString => "quote-wrapped-string",
            Self::RgbColor => "rgb-color",
            Self::CssLengthValue => "css-length-value",
            Self::NumericValue => "numeric-value",
            Self::RomanNumeral => "roman-numeral",
            Self::OperatorSign => "operator-sign",
            Self::LogicalOperator => "logical-operator",
            Self::MonoCharacterString => "mono-character-string",
            Self::DictionaryTermGlobal => "dictionary-term-global",
            Self::HtmlEncodableString => "html-encodable-string",
            Self::NumericPostfix => "numeric-postfix",
            Self::SizzleSelector => "sizzle-selector",
            Self::Comment => "comment",
            Self::TrailingComment => "trailing-comment",
            Self::PhpConcatenation => "php-concatenation",
            Self::CamelCaseWordPair => "camel-case-word-pair",
            Self::SeparatedPath => "separated-path",
            Self::SeparatedList => "separated-list",
            Self::JsVariableDeclarations => "js-variable-declarations",
            Self::LineSort => "line-sort",
        }
    }

    /// Whether shifted values of this type get the original token's
    /// case pattern re-applied.
    pub fn preserves_case(&self) -> bool {
        matches!(
            self,
            Self::AccessKeyword
                | Self::DocCommentTag
                | Self::DocCommentDataType
                | Self::DictionaryTermExtSpecific
                | Self::DictionaryTermGlobal
                | Self::MonoCharacterString
        )
    }
}

impl std::fmt::Display for ShiftableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// PHP construct a `PhpVariableOrArray` match resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpForm {
    /// `$identifier`
    Variable,
    /// `array( ... )`
    LongArray,
    /// `[ ... ]`
    ShortArray,
}

/// Delimiter a separated list or path was split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDelimiter {
    Comma,
    Pipe,
    Whitespace,
    Minus,
    Underscore,
}

/// Concrete comment shape behind a `Comment` match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentForm {
    /// Single `// ...` line.
    Line,
    /// Single-line `/* ... */`.
    Block,
    /// Two or more consecutive `//` lines.
    LineRun,
    /// `/* ... */` spanning multiple lines.
    MultiLineBlock,
}

/// Facts a matcher established that the executor reuses.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchState {
    /// Nothing beyond the type itself.
    None,
    /// Quote character enclosing the selection.
    Quote(char),
    /// Quote character wrapping the selection ends.
    QuoteWrapped(char),
    /// Which PHP construct matched.
    Php(PhpForm),
    /// Where in the dictionary the term was found.
    Dictionary(DictionaryHit),
    /// Delimiter the selection splits on.
    Delimiter(ListDelimiter),
    /// Which comment shape matched.
    Comment(CommentForm),
}

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub shiftable_type: ShiftableType,
    pub state: MatchState,
}

impl MatchResult {
    pub(crate) fn new(shiftable_type: ShiftableType) -> Self {
        Self { shiftable_type, state: MatchState::None }
    }

    pub(crate) fn with_state(shiftable_type: ShiftableType, state: MatchState) -> Self {
        Self { shiftable_type, state }
    }
}
