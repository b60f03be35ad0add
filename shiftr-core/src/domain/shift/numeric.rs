//! Numeric shifts: plain integers, UNIX timestamps, CSS lengths and
//! numeric postfixes

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::context::Direction;

/// Digit counts up to this length shift by one; anything longer is
/// treated as a UNIX timestamp in seconds.
const TIMESTAMP_DIGIT_THRESHOLD: usize = 7;

const SECONDS_PER_DAY: i64 = 86_400;

static CSS_LENGTH_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([a-z%]+)$").expect("pattern is valid"));
static POSTFIX_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\D)(\d+)$").expect("pattern is valid"));

/// Shifts a pure digit selection.
///
/// Short values move by one, preserving any zero padding. Values longer
/// than seven digits are interpreted as UNIX timestamps and move by one
/// day; a timestamp that would go negative is left alone.
pub(crate) fn shifted_value(text: &str, direction: Direction) -> Option<String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: i64 = text.parse().ok()?;
    let delta = if text.len() <= TIMESTAMP_DIGIT_THRESHOLD { 1 } else { SECONDS_PER_DAY };
    let next = match direction {
        Direction::Up => value.checked_add(delta)?,
        Direction::Down => value.checked_sub(delta)?,
    };
    if next < 0 {
        return None;
    }
    Some(repad(text, next))
}

/// Shifts the number of a `<int><unit>` CSS length, keeping the unit.
pub(crate) fn shifted_css_length(text: &str, direction: Direction) -> Option<String> {
    let captures = CSS_LENGTH_PARTS.captures(text)?;
    let number: i64 = captures[1].parse().ok()?;
    let next = match direction {
        Direction::Up => number + 1,
        Direction::Down => number - 1,
    };
    Some(format!("{next}{}", &captures[2]))
}

/// Shifts the trailing digit run of a token like `item10`.
///
/// The digit width is preserved so `item09` moves to `item10` and back.
/// Shifting `...0` down is a no-op rather than producing a negative
/// postfix.
pub(crate) fn shifted_postfix(text: &str, direction: Direction) -> Option<String> {
    let captures = POSTFIX_PARTS.captures(text)?;
    let prefix = &captures[1];
    let digits = &captures[2];
    let value: u64 = digits.parse().ok()?;

    let next = match direction {
        Direction::Up => value.checked_add(1)?,
        Direction::Down => value.checked_sub(1)?,
    };
    Some(format!("{prefix}{}", repad(digits, next as i64)))
}

/// Formats `value` with the zero padding of the original digit run.
fn repad(original: &str, value: i64) -> String {
    if original.starts_with('0') && original.len() > 1 {
        format!("{value:0width$}", width = original.len())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_number_steps_by_one() {
        assert_eq!(shifted_value("111", Direction::Up).unwrap(), "112");
        assert_eq!(shifted_value("111", Direction::Down).unwrap(), "110");
        assert_eq!(shifted_value("0", Direction::Up).unwrap(), "1");
    }

    #[test]
    fn test_zero_padding_is_preserved() {
        assert_eq!(shifted_value("007", Direction::Up).unwrap(), "008");
        assert_eq!(shifted_value("010", Direction::Down).unwrap(), "009");
    }

    #[test]
    fn test_unpadded_number_does_not_gain_padding() {
        assert_eq!(shifted_value("100", Direction::Down).unwrap(), "99");
    }

    #[test]
    fn test_zero_down_underflows_to_none() {
        assert_eq!(shifted_value("0", Direction::Down), None);
    }

    #[test]
    fn test_long_number_shifts_by_one_day() {
        assert_eq!(shifted_value("1262304000", Direction::Up).unwrap(), "1262390400");
        assert_eq!(shifted_value("1262304000", Direction::Down).unwrap(), "1262217600");
    }

    #[test]
    fn test_seven_digits_still_steps_by_one() {
        assert_eq!(shifted_value("9999999", Direction::Up).unwrap(), "10000000");
    }

    #[test]
    fn test_timestamp_underflow_is_none() {
        assert_eq!(shifted_value("00000001", Direction::Down), None);
    }

    #[test]
    fn test_css_length() {
        assert_eq!(shifted_css_length("2px", Direction::Up).unwrap(), "3px");
        assert_eq!(shifted_css_length("3%", Direction::Up).unwrap(), "4%");
        assert_eq!(shifted_css_length("1em", Direction::Down).unwrap(), "0em");
        assert_eq!(shifted_css_length("0px", Direction::Down).unwrap(), "-1px");
    }

    #[test]
    fn test_postfix_steps_and_preserves_width() {
        assert_eq!(shifted_postfix("item10", Direction::Up).unwrap(), "item11");
        assert_eq!(shifted_postfix("pic09", Direction::Up).unwrap(), "pic10");
        assert_eq!(shifted_postfix("pic010", Direction::Down).unwrap(), "pic009");
    }

    #[test]
    fn test_postfix_zero_down_is_none() {
        assert_eq!(shifted_postfix("item0", Direction::Down), None);
    }
}
