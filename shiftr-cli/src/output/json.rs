//! JSON output formatter

use anyhow::Result;

use shiftr_core::ShiftOutcome;

/// Renders an outcome as a pretty-printed JSON object with the output
/// text, the matched type (kebab-case, `null` when nothing matched)
/// and the change flag.
pub fn render(outcome: &ShiftOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftr_core::{Direction, ShiftContext, ShiftEngine};

    #[test]
    fn test_json_shape() {
        let outcome = ShiftEngine::new().shift(&ShiftContext::new("public", Direction::Up));
        let json: serde_json::Value = serde_json::from_str(&render(&outcome).unwrap()).unwrap();
        assert_eq!(json["text"], "protected");
        assert_eq!(json["shiftable_type"], "access-keyword");
        assert_eq!(json["changed"], true);
    }

    #[test]
    fn test_unmatched_type_serializes_as_null() {
        let outcome = ShiftEngine::new().shift(&ShiftContext::new("@@##!!", Direction::Up));
        let json: serde_json::Value = serde_json::from_str(&render(&outcome).unwrap()).unwrap();
        assert!(json["shiftable_type"].is_null());
        assert_eq!(json["changed"], false);
    }
}
