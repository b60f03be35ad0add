//! RGB hex color shifting

use crate::domain::context::Direction;

/// Shifts every channel of a 3 or 6 digit hex color by one, clamping at
/// the channel bounds. Pure white cannot shift up and pure black cannot
/// shift down. Output is always 6 lowercase digits.
pub(crate) fn shifted(text: &str, direction: Direction) -> Option<String> {
    let expanded = expand(text)?;
    let channels = [
        u8::from_str_radix(&expanded[0..2], 16).ok()?,
        u8::from_str_radix(&expanded[2..4], 16).ok()?,
        u8::from_str_radix(&expanded[4..6], 16).ok()?,
    ];

    let shifted: [u8; 3] = match direction {
        Direction::Up => {
            if channels.iter().all(|&c| c == u8::MAX) {
                return None;
            }
            channels.map(|c| c.saturating_add(1))
        }
        Direction::Down => {
            if channels.iter().all(|&c| c == 0) {
                return None;
            }
            channels.map(|c| c.saturating_sub(1))
        }
    };

    Some(format!("{:02x}{:02x}{:02x}", shifted[0], shifted[1], shifted[2]))
}

/// Normalizes to 6 lowercase hex digits, doubling each digit of the
/// shorthand form.
fn expand(text: &str) -> Option<String> {
    if !text.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match text.len() {
        3 => Some(
            text.chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_lowercase(),
        ),
        6 => Some(text.to_lowercase()),
        _ => None,
    }
}
