//! Mono-character string shifting

use crate::domain::context::Direction;

/// Shifts a repeated-character string to the neighboring letter,
/// keeping the length: `aaa` becomes `bbb`. The alphabet is cyclic, so
/// `z` wraps to `a`. Non-letter characters have no neighbor and do not
/// shift. Case restoration happens in the engine, so output is
/// lowercase.
pub(crate) fn shifted(text: &str, direction: Direction) -> Option<String> {
    let first = text.chars().next()?;
    let lower = first.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return None;
    }

    let next = match direction {
        Direction::Up => {
            if lower == 'z' {
                'a'
            } else {
                (lower as u8 + 1) as char
            }
        }
        Direction::Down => {
            if lower == 'a' {
                'z'
            } else {
                (lower as u8 - 1) as char
            }
        }
    };
    Some(std::iter::repeat(next).take(text.chars().count()).collect())
}
