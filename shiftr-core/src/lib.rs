//! Token classification and bidirectional shift engine
//!
//! Given a caret word or selection plus its surrounding context, the
//! engine classifies it into one of ~30 semantic categories (numbers,
//! hex colors, Roman numerals, quoted strings, keyword rings,
//! dictionary terms, comments, delimited lists, ...) and computes the
//! deterministic "next" or "previous" value for that category. Think
//! increment/decrement, generalized far beyond arithmetic.
//!
//! # Architecture
//!
//! - **Domain layer** ([`domain`]): comparators, the dictionary store,
//!   the matcher chains and the shift executors. Pure, synchronous
//!   functions throughout.
//! - **API layer** ([`api`]): the [`ShiftEngine`] facade that wires
//!   classifier, executor dispatch and case restoration together.
//!
//! # Example
//!
//! ```rust
//! use shiftr_core::{Direction, ShiftContext, ShiftEngine};
//!
//! let engine = ShiftEngine::new();
//!
//! // Keywords rotate through their ring.
//! let ctx = ShiftContext::new("private", Direction::Up);
//! assert_eq!(engine.shift(&ctx).text, "public");
//!
//! // Hex colors lighten and darken channel-wise.
//! let ctx = ShiftContext::new("111", Direction::Up).with_prefix('#');
//! assert_eq!(engine.shift(&ctx).text, "121212");
//!
//! // Unclassifiable input comes back unchanged, never as an error.
//! let ctx = ShiftContext::new("???", Direction::Up);
//! let outcome = engine.shift(&ctx);
//! assert_eq!(outcome.text, "???");
//! assert!(!outcome.changed);
//! ```

pub mod api;
pub mod domain;

pub use api::{Error, Result, ShiftEngine, ShiftOutcome};
pub use domain::choice::{ChoiceProvider, FixedChoice, HeadlessChoices};
pub use domain::classify::{
    classify, MatchResult, MatchState, ShiftableType, MULTI_LINE_CHAIN, SINGLE_LINE_CHAIN,
};
pub use domain::context::{Direction, ShiftContext};
pub use domain::dictionary::{Dictionary, ParseIssue, TermList};
pub use domain::error::DomainError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exported_entry_points_compose() {
        let ctx = ShiftContext::new("2px", Direction::Up);
        let result = classify(&ctx, &Dictionary::embedded()).unwrap();
        assert_eq!(result.shiftable_type, ShiftableType::CssLengthValue);
        assert_eq!(ShiftEngine::new().shift(&ctx).text, "3px");
    }

    #[test]
    fn test_chain_tables_are_exported() {
        assert!(!SINGLE_LINE_CHAIN.is_empty());
        assert!(!MULTI_LINE_CHAIN.is_empty());
    }
}
