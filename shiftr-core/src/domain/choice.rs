//! Interactive choice seam
//!
//! A handful of executors have more than one reasonable outcome: a
//! multi-line comment can be converted or merged, and resorting may
//! discover duplicates the caller might want removed. The engine never
//! decides these itself; it asks a [`ChoiceProvider`] injected at
//! construction time. Hosts without an interactive surface use
//! [`HeadlessChoices`] and get the documented defaults.

use std::sync::Arc;

/// Resolves a multi-outcome shift to one of the offered options.
///
/// Implementations must be thread-safe; the engine shares the provider
/// behind an [`Arc`].
pub trait ChoiceProvider: Send + Sync {
    /// Picks one of `options`. Returning `None` declines the choice and
    /// makes the executor fall back to its default behavior.
    fn select(&self, prompt: &str, options: &[&str]) -> Option<usize>;
}

/// Provider that declines every choice.
///
/// Executors then apply their defaults: duplicates are kept on resort,
/// and comment shifts convert between styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessChoices;

impl ChoiceProvider for HeadlessChoices {
    fn select(&self, _prompt: &str, _options: &[&str]) -> Option<usize> {
        None
    }
}

/// Provider that always answers with a fixed option index.
///
/// Used by the CLI `--choose` flag and by tests that drive a specific
/// branch of an executor.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice {
    index: usize,
}

impl FixedChoice {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ChoiceProvider for FixedChoice {
    fn select(&self, _prompt: &str, options: &[&str]) -> Option<usize> {
        (self.index < options.len()).then_some(self.index)
    }
}

/// Shared default provider for engines built without an explicit one.
pub(crate) fn headless() -> Arc<dyn ChoiceProvider> {
    Arc::new(HeadlessChoices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_declines() {
        assert_eq!(HeadlessChoices.select("pick", &["a", "b"]), None);
    }

    #[test]
    fn test_fixed_choice_answers_in_range() {
        assert_eq!(FixedChoice::new(1).select("pick", &["a", "b"]), Some(1));
    }

    #[test]
    fn test_fixed_choice_declines_out_of_range() {
        assert_eq!(FixedChoice::new(5).select("pick", &["a", "b"]), None);
    }
}
