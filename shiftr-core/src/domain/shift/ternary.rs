//! Ternary expression branch swapping

/// Swaps the then and else parts of a ternary selection around the
/// first unescaped `:`, leaving a leading `?`, a trailing `;` and all
/// whitespace shapes where they were.
pub(crate) fn shifted(text: &str) -> Option<String> {
    let trimmed_start = text.trim_start();
    let lead_ws = &text[..text.len() - trimmed_start.len()];
    let body = trimmed_start.trim_end();
    let trail_ws = &trimmed_start[body.len()..];

    let (question, body) = match body.strip_prefix('?') {
        Some(rest) => ("?", rest),
        None => ("", body),
    };
    let (body, semicolon) = match body.strip_suffix(';') {
        Some(rest) => (rest, ";"),
        None => (body, ""),
    };

    let colon = first_unescaped_colon(body)?;
    let then_part = &body[..colon];
    let else_part = &body[colon + 1..];
    if then_part.trim().is_empty() || else_part.trim().is_empty() {
        return None;
    }

    Some(format!(
        "{lead_ws}{question}{}{}{}:{}{}{}{semicolon}{trail_ws}",
        leading_ws(then_part),
        else_part.trim(),
        trailing_ws(then_part),
        leading_ws(else_part),
        then_part.trim(),
        trailing_ws(else_part),
    ))
}

/// Byte index of the first `:` not preceded by a backslash, excluding
/// the first and last positions where a split would leave an empty
/// branch.
fn first_unescaped_colon(body: &str) -> Option<usize> {
    let mut previous: Option<char> = None;
    for (idx, c) in body.char_indices() {
        if c == ':' && previous != Some('\\') && idx > 0 && idx + 1 < body.len() {
            return Some(idx);
        }
        previous = Some(c);
    }
    None
}

fn leading_ws(part: &str) -> &str {
    &part[..part.len() - part.trim_start().len()]
}

fn trailing_ws(part: &str) -> &str {
    let trimmed = part.trim_end();
    &part[trimmed.len()..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_branches() {
        assert_eq!(shifted("? 1 : 0").unwrap(), "? 0 : 1");
    }

    #[test]
    fn test_without_leading_question() {
        assert_eq!(shifted("1 : 0").unwrap(), "0 : 1");
    }

    #[test]
    fn test_trailing_semicolon_stays() {
        assert_eq!(shifted("? 'yes' : 'no';").unwrap(), "? 'no' : 'yes';");
    }

    #[test]
    fn test_tab_glue_is_preserved() {
        assert_eq!(shifted("?\ta\t:\tb").unwrap(), "?\tb\t:\ta");
    }

    #[test]
    fn test_tight_spacing_is_preserved() {
        assert_eq!(shifted("?1:0").unwrap(), "?0:1");
    }

    #[test]
    fn test_escaped_colon_is_skipped() {
        assert_eq!(shifted(r"? 'a\:b' : 'c'").unwrap(), r"? 'c' : 'a\:b'");
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        assert_eq!(shifted("  ? x : y  ").unwrap(), "  ? y : x  ");
    }

    #[test]
    fn test_missing_colon_is_none() {
        assert_eq!(shifted("? 1"), None);
    }

    #[test]
    fn test_empty_branch_is_none() {
        assert_eq!(shifted("? : 0"), None);
    }
}
