//! Operator and logical operator toggling

/// Toggle pairs; both directions map the same way, so shifting an
/// operator is its own inverse.
const SIGN_PAIRS: &[(char, char)] = &[('+', '-'), ('<', '>'), ('*', '/')];

/// Toggles an arithmetic or comparison sign, keeping surrounding
/// whitespace of the selection intact.
pub(crate) fn shifted_sign(text: &str) -> Option<String> {
    let sign = text.trim().chars().next()?;
    let toggled = toggle(sign)?;
    Some(text.replacen(sign, &toggled.to_string(), 1))
}

fn toggle(sign: char) -> Option<char> {
    for &(a, b) in SIGN_PAIRS {
        if sign == a {
            return Some(b);
        }
        if sign == b {
            return Some(a);
        }
    }
    None
}

/// Toggles `&&` and `||`, keeping surrounding whitespace intact.
pub(crate) fn shifted_logical(text: &str) -> Option<String> {
    match text.trim() {
        "&&" => Some(text.replacen("&&", "||", 1)),
        "||" => Some(text.replacen("||", "&&", 1)),
        _ => None,
    }
}
