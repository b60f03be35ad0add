//! Natural-order comparator for whole lines
//!
//! Walks both strings in lockstep, skipping leading spaces and zeros
//! while counting consecutive zeros per side. When both cursors sit on
//! a digit the whole run is compared: the longer run wins outright,
//! equal-length runs fall back to the first differing digit. Non-digit
//! characters compare by code point, and a full tie is broken in favor
//! of the side with fewer leading zeros.

use std::cmp::Ordering;

/// Compares two strings in natural order.
pub fn compare(left: &str, right: &str) -> Ordering {
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();

    let mut ia = 0;
    let mut ib = 0;
    let mut zeros_a = 0;
    let mut zeros_b = 0;

    loop {
        let mut ca = char_at(&a, ia);
        let mut cb = char_at(&b, ib);

        while ca == ' ' || ca == '0' {
            if ca == '0' {
                zeros_a += 1;
            } else {
                // Only consecutive zeros directly before the run count.
                zeros_a = 0;
            }
            ia += 1;
            ca = char_at(&a, ia);
        }
        while cb == ' ' || cb == '0' {
            if cb == '0' {
                zeros_b += 1;
            } else {
                zeros_b = 0;
            }
            ib += 1;
            cb = char_at(&b, ib);
        }

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let ordering = compare_digit_runs(&a[ia..], &b[ib..]);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        if ca == '\0' && cb == '\0' {
            // Identical up to zero-padding; fewer leading zeros first.
            return zeros_a.cmp(&zeros_b);
        }

        match ca.cmp(&cb) {
            Ordering::Equal => {}
            other => return other,
        }

        ia += 1;
        ib += 1;
    }
}

fn char_at(chars: &[char], idx: usize) -> char {
    chars.get(idx).copied().unwrap_or('\0')
}

/// Compares two digit runs starting at the slice heads.
///
/// The longer run always wins. For equal-length runs the first
/// difference decides, but it is only recorded as a bias while the scan
/// confirms both runs end together.
fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let mut bias = Ordering::Equal;
    let mut ia = 0;
    let mut ib = 0;

    loop {
        let ca = char_at(a, ia);
        let cb = char_at(b, ib);

        match (ca.is_ascii_digit(), cb.is_ascii_digit()) {
            (false, false) => return bias,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {
                if bias == Ordering::Equal {
                    bias = ca.cmp(&cb);
                }
            }
        }

        ia += 1;
        ib += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| compare(a, b));
        items
    }

    #[test]
    fn test_zero_padded_numbers_sort_by_value() {
        assert_eq!(sorted(vec!["pic2", "pic01", "pic10"]), vec!["pic01", "pic2", "pic10"]);
    }

    #[test]
    fn test_longer_digit_run_wins() {
        assert_eq!(compare("a99", "a100"), Ordering::Less);
        assert_eq!(compare("a100", "a99"), Ordering::Greater);
    }

    #[test]
    fn test_fewer_leading_zeros_sort_first() {
        assert_eq!(compare("pic1", "pic01"), Ordering::Less);
        assert_eq!(compare("pic001", "pic01"), Ordering::Greater);
    }

    #[test]
    fn test_plain_text_compares_by_code_point() {
        assert_eq!(compare("alpha", "beta"), Ordering::Less);
        assert_eq!(compare("Zeta", "alpha"), Ordering::Less);
    }

    #[test]
    fn test_leading_spaces_are_skipped() {
        assert_eq!(compare("  x", "x"), Ordering::Equal);
    }

    #[test]
    fn test_identical_lines_compare_equal() {
        assert_eq!(compare("同じ行", "同じ行"), Ordering::Equal);
    }

    #[test]
    fn test_multi_digit_runs_in_sequence() {
        assert_eq!(sorted(vec!["v1.10.0", "v1.2.0", "v1.2.10"]), vec!["v1.2.0", "v1.2.10", "v1.10.0"]);
    }
}
