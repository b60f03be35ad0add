//! Case pattern capture and re-application
//!
//! Keyword and dictionary shifts run on lowercase ring entries, so the
//! engine captures the case shape of the original token first and
//! re-applies it to the shifted value. Only three shapes are
//! distinguished; anything else passes through untouched.

/// Case shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Every cased character is uppercase, e.g. `PUBLIC`.
    AllUpper,
    /// Leading character is uppercase, e.g. `Public`.
    FirstUpper,
    /// Any other shape, left as the executor produced it.
    Other,
}

/// Captures the case pattern of `text`.
pub fn detect(text: &str) -> CasePattern {
    let mut cased = text.chars().filter(|c| c.is_alphabetic()).peekable();
    if cased.peek().is_some() && cased.all(char::is_uppercase) {
        return CasePattern::AllUpper;
    }
    match text.chars().next() {
        Some(first) if first.is_uppercase() => CasePattern::FirstUpper,
        _ => CasePattern::Other,
    }
}

/// Re-applies a captured case pattern to a shifted value.
pub fn apply(pattern: CasePattern, text: &str) -> String {
    match pattern {
        CasePattern::AllUpper => text.to_uppercase(),
        CasePattern::FirstUpper => upper_first(text),
        CasePattern::Other => text.to_string(),
    }
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_all_upper() {
        assert_eq!(detect("PUBLIC"), CasePattern::AllUpper);
        assert_eq!(detect("I"), CasePattern::AllUpper);
    }

    #[test]
    fn test_detect_first_upper() {
        assert_eq!(detect("Public"), CasePattern::FirstUpper);
    }

    #[test]
    fn test_detect_other() {
        assert_eq!(detect("public"), CasePattern::Other);
        assert_eq!(detect("pubLic"), CasePattern::Other);
        assert_eq!(detect(""), CasePattern::Other);
        assert_eq!(detect("123"), CasePattern::Other);
    }

    #[test]
    fn test_apply_round_trip() {
        assert_eq!(apply(detect("PRIVATE"), "public"), "PUBLIC");
        assert_eq!(apply(detect("Private"), "public"), "Public");
        assert_eq!(apply(detect("private"), "public"), "public");
    }

    #[test]
    fn test_apply_to_empty() {
        assert_eq!(apply(CasePattern::FirstUpper, ""), "");
    }
}
