//! Public result type of a shift call

use serde::Serialize;

use crate::domain::classify::ShiftableType;

/// What one engine invocation produced.
///
/// `text` always holds something usable: the shifted value, or the
/// original selection when nothing matched or the shift was a no-op.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftOutcome {
    /// The output text, shifted or unchanged.
    pub text: String,
    /// The matched category, if classification succeeded. A matched
    /// type with `changed == false` means the executor hit a fixed
    /// point or a precondition failure.
    pub shiftable_type: Option<ShiftableType>,
    /// Whether `text` differs from the input selection.
    pub changed: bool,
}

impl ShiftOutcome {
    /// Outcome for a selection nothing claimed or changed.
    pub(crate) fn unchanged(text: impl Into<String>, shiftable_type: Option<ShiftableType>) -> Self {
        Self { text: text.into(), shiftable_type, changed: false }
    }

    /// Outcome for a successful shift.
    pub(crate) fn shifted(text: String, shiftable_type: ShiftableType, original: &str) -> Self {
        let changed = text != original;
        Self { text, shiftable_type: Some(shiftable_type), changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_outcome() {
        let outcome = ShiftOutcome::unchanged("abc", None);
        assert_eq!(outcome.text, "abc");
        assert!(!outcome.changed);
        assert!(outcome.shiftable_type.is_none());
    }

    #[test]
    fn test_shifted_detects_identity_results() {
        let outcome =
            ShiftOutcome::shifted("42".to_string(), ShiftableType::NumericValue, "42");
        assert!(!outcome.changed);
        let outcome =
            ShiftOutcome::shifted("43".to_string(), ShiftableType::NumericValue, "42");
        assert!(outcome.changed);
    }
}
