//! Case-insensitive alphanumeric comparator
//!
//! Splits both strings into maximal digit and non-digit runs, left-pads
//! every digit run with zeros to a fixed width, lowercases the rest, and
//! compares the resulting chunk sequences. Embedded numbers therefore
//! compare by value rather than by code point: `item9` sorts before
//! `item10`.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// Digit runs are padded to this width before comparison, so numbers up
/// to ten digits compare by value.
const DIGIT_RUN_WIDTH: usize = 10;

/// Compares two strings alphanumerically, ignoring case.
///
/// The final tie-break is the original string length, so `a01` and `a1`
/// order deterministically even though their normalized forms match.
pub fn compare(left: &str, right: &str) -> Ordering {
    let left_norm = normalize(left);
    let right_norm = normalize(right);

    let left_chunks = chunks(&left_norm);
    let right_chunks = chunks(&right_norm);

    for (a, b) in left_chunks.iter().zip(right_chunks.iter()) {
        let ordering = compare_chunks(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left_chunks
        .len()
        .cmp(&right_chunks.len())
        .then_with(|| left.len().cmp(&right.len()))
}

/// Lowercases the input and left-pads every digit run to
/// [`DIGIT_RUN_WIDTH`] characters.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut digits = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            flush_digit_run(&mut out, &mut digits);
            out.extend(ch.to_lowercase());
        }
    }
    flush_digit_run(&mut out, &mut digits);
    out
}

fn flush_digit_run(out: &mut String, digits: &mut String) {
    if digits.is_empty() {
        return;
    }
    for _ in digits.len()..DIGIT_RUN_WIDTH {
        out.push('0');
    }
    out.push_str(digits);
    digits.clear();
}

/// Splits a normalized string into maximal digit/non-digit chunks.
fn chunks(text: &str) -> SmallVec<[&str; 8]> {
    let mut parts: SmallVec<[&str; 8]> = SmallVec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, ch) in text.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(previous) if previous != is_digit => {
                parts.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

fn compare_chunks(a: &str, b: &str) -> Ordering {
    let a_digits = !a.is_empty() && a.bytes().all(|b| b.is_ascii_digit());
    let b_digits = !b.is_empty() && b.bytes().all(|b| b.is_ascii_digit());

    if a_digits && b_digits {
        // Runs wider than the pad width escape normalization, so the
        // longer run must win before the lexical pass.
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}
