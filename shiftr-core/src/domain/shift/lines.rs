//! Multi-line selection resorting

use crate::domain::choice::ChoiceProvider;
use crate::domain::compare::natural;
use crate::domain::context::Direction;

const DEDUP_OPTIONS: &[&str] = &["Keep duplicates", "Remove duplicates"];
const DEDUP_PROMPT: &str = "Duplicate lines";

/// Sorts the lines of a selection in natural order, ascending on Up
/// and descending on Down. A trailing newline stays where it was.
/// When sorting reveals duplicate lines the provider decides whether
/// to drop them; declined means they stay.
pub(crate) fn shifted(
    text: &str,
    direction: Direction,
    choices: &dyn ChoiceProvider,
) -> Option<String> {
    let trailing_newline = text.ends_with('\n');
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return None;
    }

    lines.sort_by(|a, b| natural::compare(a, b));
    if direction == Direction::Down {
        lines.reverse();
    }

    let has_duplicates = lines.windows(2).any(|w| w[0] == w[1]);
    if has_duplicates && choices.select(DEDUP_PROMPT, DEDUP_OPTIONS) == Some(1) {
        lines.dedup();
    }

    let mut out = lines.join("\n");
    if trailing_newline {
        out.push('\n');
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::{FixedChoice, HeadlessChoices};

    #[test]
    fn test_sorts_ascending_on_up() {
        assert_eq!(
            shifted("pic10\npic2\npic01", Direction::Up, &HeadlessChoices).unwrap(),
            "pic01\npic2\npic10"
        );
    }

    #[test]
    fn test_sorts_descending_on_down() {
        assert_eq!(
            shifted("pic01\npic2\npic10", Direction::Down, &HeadlessChoices).unwrap(),
            "pic10\npic2\npic01"
        );
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(shifted("b\na\n", Direction::Up, &HeadlessChoices).unwrap(), "a\nb\n");
        assert_eq!(shifted("b\na", Direction::Up, &HeadlessChoices).unwrap(), "a\nb");
    }

    #[test]
    fn test_duplicates_kept_without_an_answer() {
        assert_eq!(
            shifted("b\na\nb", Direction::Up, &HeadlessChoices).unwrap(),
            "a\nb\nb"
        );
    }

    #[test]
    fn test_duplicates_removed_on_request() {
        assert_eq!(
            shifted("b\na\nb", Direction::Up, &FixedChoice::new(1)).unwrap(),
            "a\nb"
        );
    }

    #[test]
    fn test_single_line_is_none() {
        assert_eq!(shifted("only", Direction::Up, &HeadlessChoices), None);
    }
}
