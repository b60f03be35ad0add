//! Roman numeral parsing, encoding and ±1 shifting

use crate::domain::context::Direction;

/// Greedy encoding table, largest value first.
const ENCODE_TABLE: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn digit_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parses a numeral with standard subtractive notation: a digit smaller
/// than its successor subtracts instead of adding, so `IV` is 4.
pub(crate) fn parse(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    let values: Vec<u32> = text.chars().map(digit_value).collect::<Option<_>>()?;

    let mut total: u32 = 0;
    for (idx, &value) in values.iter().enumerate() {
        if values.get(idx + 1).is_some_and(|&next| next > value) {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
        }
    }
    Some(total)
}

/// Encodes a value greedily into canonical form.
pub(crate) fn encode(mut value: u32) -> String {
    let mut out = String::new();
    for &(step, digits) in ENCODE_TABLE {
        while value >= step {
            out.push_str(digits);
            value -= step;
        }
    }
    out
}

/// Shifts a numeral by one. `I` never shifts below itself, and any
/// non-canonical input comes back canonical.
pub(crate) fn shifted(text: &str, direction: Direction) -> Option<String> {
    let value = parse(text)?;
    let next = match direction {
        Direction::Up => value.checked_add(1)?,
        Direction::Down => {
            if value <= 1 {
                return None;
            }
            value - 1
        }
    };
    Some(encode(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_subtractive() {
        assert_eq!(parse("III").unwrap(), 3);
        assert_eq!(parse("IV").unwrap(), 4);
        assert_eq!(parse("XIV").unwrap(), 14);
        assert_eq!(parse("MCMXCIX").unwrap(), 1999);
    }

    #[test]
    fn test_encode_is_canonical() {
        assert_eq!(encode(4), "IV");
        assert_eq!(encode(1999), "MCMXCIX");
        assert_eq!(encode(3888), "MMMDCCCLXXXVIII");
    }

    #[test]
    fn test_shift_up_and_down() {
        assert_eq!(shifted("III", Direction::Up).unwrap(), "IV");
        assert_eq!(shifted("IV", Direction::Down).unwrap(), "III");
        assert_eq!(shifted("IX", Direction::Up).unwrap(), "X");
    }

    #[test]
    fn test_one_never_shifts_below_itself() {
        assert_eq!(shifted("I", Direction::Down), None);
    }

    #[test]
    fn test_non_canonical_input_becomes_canonical() {
        // IIII parses as 4; shifting up yields canonical V.
        assert_eq!(shifted("IIII", Direction::Up).unwrap(), "V");
    }

    #[test]
    fn test_round_trip_over_range() {
        for value in 1..=400 {
            assert_eq!(parse(&encode(value)).unwrap(), value);
        }
    }
}
