//! Engine facade composing classifier, executors and case restoration

use std::path::Path;
use std::sync::Arc;

use crate::api::{Error, ShiftOutcome};
use crate::domain::casing;
use crate::domain::choice::{self, ChoiceProvider};
use crate::domain::classify::{classify, MatchResult};
use crate::domain::context::ShiftContext;
use crate::domain::dictionary::Dictionary;
use crate::domain::shift;

/// The complete pipeline behind one shift gesture.
///
/// An engine is cheap to build and holds only immutable shared state:
/// a dictionary snapshot and a choice provider. Swapping either means
/// building a new engine, never mutating a live one.
///
/// # Example
///
/// ```rust
/// use shiftr_core::{Direction, ShiftContext, ShiftEngine};
///
/// let engine = ShiftEngine::new();
/// let ctx = ShiftContext::new("public", Direction::Up);
/// assert_eq!(engine.shift(&ctx).text, "protected");
/// ```
pub struct ShiftEngine {
    dictionary: Arc<Dictionary>,
    choices: Arc<dyn ChoiceProvider>,
    preserve_case: bool,
}

impl ShiftEngine {
    /// Engine with the embedded dictionary, headless choices and case
    /// preservation on.
    pub fn new() -> Self {
        Self {
            dictionary: Dictionary::embedded(),
            choices: choice::headless(),
            preserve_case: true,
        }
    }

    /// Replaces the dictionary snapshot.
    pub fn with_dictionary(mut self, dictionary: Arc<Dictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Loads the dictionary snapshot from a file.
    pub fn with_dictionary_file(self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let dictionary = Dictionary::from_file(path)?;
        Ok(self.with_dictionary(Arc::new(dictionary)))
    }

    /// Replaces the choice provider consulted by multi-valued shifts.
    pub fn with_choices(mut self, choices: Arc<dyn ChoiceProvider>) -> Self {
        self.choices = choices;
        self
    }

    /// Turns re-application of the original case pattern on or off.
    pub fn with_preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }

    /// The dictionary snapshot this engine classifies against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Classifies a selection without shifting it.
    pub fn classify(&self, ctx: &ShiftContext) -> Option<MatchResult> {
        classify(ctx, &self.dictionary)
    }

    /// Classifies and shifts a selection.
    ///
    /// Never fails: an unmatched selection, a fixed point or a failed
    /// executor precondition all come back as the input unchanged,
    /// with [`ShiftOutcome::changed`] telling them apart from a real
    /// shift.
    pub fn shift(&self, ctx: &ShiftContext) -> ShiftOutcome {
        let Some(result) = self.classify(ctx) else {
            return ShiftOutcome::unchanged(&ctx.selected_text, None);
        };

        let Some(shifted) = shift::execute(&result, ctx, &self.dictionary, &*self.choices) else {
            return ShiftOutcome::unchanged(&ctx.selected_text, Some(result.shiftable_type));
        };

        let text = if self.preserve_case && result.shiftable_type.preserves_case() {
            casing::apply(casing::detect(&ctx.selected_text), &shifted)
        } else {
            shifted
        };
        ShiftOutcome::shifted(text, result.shiftable_type, &ctx.selected_text)
    }
}

impl Default for ShiftEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::FixedChoice;
    use crate::domain::classify::ShiftableType;
    use crate::domain::context::Direction;

    fn shift(text: &str, direction: Direction) -> ShiftOutcome {
        ShiftEngine::new().shift(&ShiftContext::new(text, direction))
    }

    #[test]
    fn test_unmatched_selection_is_returned_unchanged() {
        let outcome = shift("@@##!!", Direction::Up);
        assert_eq!(outcome.text, "@@##!!");
        assert_eq!(outcome.shiftable_type, None);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_no_op_shift_keeps_the_matched_type() {
        // Roman numeral I cannot decrement; the type still reports.
        let outcome = shift("I", Direction::Down);
        assert_eq!(outcome.text, "I");
        assert_eq!(outcome.shiftable_type, Some(ShiftableType::RomanNumeral));
        assert!(!outcome.changed);
    }

    #[test]
    fn test_case_is_preserved_for_keywords() {
        assert_eq!(shift("PUBLIC", Direction::Up).text, "PROTECTED");
        assert_eq!(shift("Public", Direction::Up).text, "Protected");
        assert_eq!(shift("public", Direction::Up).text, "protected");
    }

    #[test]
    fn test_case_preservation_can_be_disabled() {
        let engine = ShiftEngine::new().with_preserve_case(false);
        let outcome = engine.shift(&ShiftContext::new("PUBLIC", Direction::Up));
        assert_eq!(outcome.text, "protected");
    }

    #[test]
    fn test_custom_dictionary_snapshot() {
        let dict = Arc::new(Dictionary::parse("(|*|) {\n\t|north|east|south|west|\n}\n"));
        let engine = ShiftEngine::new().with_dictionary(dict);
        let outcome = engine.shift(&ShiftContext::new("west", Direction::Up));
        assert_eq!(outcome.text, "north");
        assert_eq!(outcome.shiftable_type, Some(ShiftableType::DictionaryTermExtSpecific));
    }

    #[test]
    fn test_choice_provider_reaches_executors() {
        let engine = ShiftEngine::new().with_choices(Arc::new(FixedChoice::new(1)));
        let ctx = ShiftContext::new("// one\n// two", Direction::Up);
        assert_eq!(engine.shift(&ctx).text, "// one two");
    }

    #[test]
    fn test_missing_dictionary_file_errors() {
        let result = ShiftEngine::new().with_dictionary_file("/nonexistent/terms.dict");
        assert!(matches!(result, Err(Error::Domain(_))));
    }
}
