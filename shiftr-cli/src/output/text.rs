//! Plain text output: the shifted (or unchanged) text only

use shiftr_core::ShiftOutcome;

/// Renders an outcome as the bare output text, which makes the command
/// composable in pipelines.
pub fn render(outcome: &ShiftOutcome) -> &str {
    &outcome.text
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftr_core::{Direction, ShiftContext, ShiftEngine};

    #[test]
    fn test_renders_bare_text() {
        let outcome = ShiftEngine::new().shift(&ShiftContext::new("41", Direction::Up));
        assert_eq!(render(&outcome), "42");
    }
}
