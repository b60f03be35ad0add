//! JavaScript shifts: declaration merging and selector extraction

use std::sync::LazyLock;

use regex::Regex;

static VAR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)var\s+(.+?);\s*$").expect("pattern is valid"));
static SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:\$|jQuery)\(\s*['"]([#.]?[A-Za-z][-\w]*)['"]\s*\)$"#)
        .expect("pattern is valid")
});

/// Merges consecutive `var` declarations into one comma-separated
/// statement, keeping the first line's indentation:
///
/// ```text
/// var a = 1;        var a = 1,
/// var b = 2;    =>      b = 2;
/// ```
pub(crate) fn merged_declarations(text: &str) -> Option<String> {
    let mut indent = "";
    let mut declarations = Vec::new();

    for (idx, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let captures = VAR_LINE.captures(line)?;
        if idx == 0 {
            indent = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        }
        declarations.push(captures[2].to_string());
    }
    if declarations.len() < 2 {
        return None;
    }
    Some(format!("{indent}var {};", declarations.join(",\n    ")))
}

/// Turns a bare Sizzle selector into a variable assignment named after
/// the selector: `$('#main-nav')` becomes `var $mainNav = $('#main-nav');`.
pub(crate) fn selector_assignment(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let captures = SELECTOR.captures(trimmed)?;
    let name = camelize(captures[1].trim_start_matches(['#', '.']));
    Some(format!("var ${name} = {trimmed};"))
}

/// `main-nav` to `mainNav`; underscores split the same way.
fn camelize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;
    for c in raw.chars() {
        if c == '-' || c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_two_declarations() {
        let text = "var a = 1;\nvar b = 2;";
        assert_eq!(merged_declarations(text).unwrap(), "var a = 1,\n    b = 2;");
    }

    #[test]
    fn test_merge_keeps_first_indent() {
        let text = "    var x = 'a';\n    var y = 'b';\n    var z = 'c';";
        assert_eq!(
            merged_declarations(text).unwrap(),
            "    var x = 'a',\n    y = 'b',\n    z = 'c';"
        );
    }

    #[test]
    fn test_merge_rejects_non_declaration() {
        assert_eq!(merged_declarations("var a = 1;\nreturn a;"), None);
    }

    #[test]
    fn test_selector_assignment_from_id() {
        assert_eq!(
            selector_assignment("$('#main-nav')").unwrap(),
            "var $mainNav = $('#main-nav');"
        );
    }

    #[test]
    fn test_selector_assignment_from_class() {
        assert_eq!(
            selector_assignment("jQuery('.list_item')").unwrap(),
            "var $listItem = jQuery('.list_item');"
        );
    }

    #[test]
    fn test_selector_assignment_plain_tag() {
        assert_eq!(selector_assignment("$('header')").unwrap(), "var $header = $('header');");
    }

    #[test]
    fn test_non_selector_is_none() {
        assert_eq!(selector_assignment("$(element)"), None);
    }
}
