//! Lenient parser for the dictionary block grammar

use super::store::{Block, Dictionary, TermList};

/// A construct the parser skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Raw text of the dictionary shipped with the crate.
pub fn default_dictionary_text() -> &'static str {
    include_str!("../../../configs/dictionary/default.dict")
}

/// A block whose closing brace has not been seen yet.
struct OpenBlock {
    start_line: usize,
    extensions: Vec<String>,
    wildcard: bool,
    lists: Vec<TermList>,
}

impl OpenBlock {
    fn close(self) -> Block {
        Block::new(self.extensions, self.wildcard, self.lists)
    }
}

/// Parses dictionary text into blocks, collecting issues for every
/// construct that had to be skipped.
pub(super) fn parse(text: &str) -> (Dictionary, Vec<ParseIssue>) {
    let mut blocks = Vec::new();
    let mut issues = Vec::new();
    let mut current: Option<OpenBlock> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match &mut current {
            None => {
                if let Some(header) = line.strip_prefix('(') {
                    match parse_header(header) {
                        Ok((extensions, wildcard)) => {
                            current = Some(OpenBlock {
                                start_line: line_no,
                                extensions,
                                wildcard,
                                lists: Vec::new(),
                            });
                        }
                        Err(message) => issues.push(ParseIssue { line: line_no, message }),
                    }
                } else {
                    issues.push(ParseIssue {
                        line: line_no,
                        message: format!("expected block header, found '{line}'"),
                    });
                }
            }
            Some(block) => {
                if line == "}" {
                    let block = current.take().unwrap();
                    if block.lists.is_empty() {
                        issues.push(ParseIssue {
                            line: line_no,
                            message: "block closed without any term lists".to_string(),
                        });
                    } else {
                        blocks.push(block.close());
                    }
                } else {
                    match parse_term_line(line) {
                        Ok(list) => block.lists.push(list),
                        Err(message) => issues.push(ParseIssue { line: line_no, message }),
                    }
                }
            }
        }
    }

    if let Some(block) = current {
        issues.push(ParseIssue {
            line: block.start_line,
            message: "block is never closed".to_string(),
        });
        if !block.lists.is_empty() {
            blocks.push(block.close());
        }
    }

    (Dictionary::with_blocks(blocks), issues)
}

/// Parses the remainder of a header line after the opening `(`.
///
/// Expected shape: `|ext|ext|) {`, with the opening brace on the same
/// line as the extension list.
fn parse_header(rest: &str) -> Result<(Vec<String>, bool), String> {
    let Some(close) = rest.find(')') else {
        return Err("block header is missing ')'".to_string());
    };
    let ext_part = &rest[..close];
    let tail = rest[close + 1..].trim();
    if tail != "{" {
        return Err("block header must end with '{'".to_string());
    }

    if !ext_part.starts_with('|') || !ext_part.ends_with('|') {
        return Err("extension list must be pipe-delimited".to_string());
    }

    let mut extensions = Vec::new();
    let mut wildcard = false;
    for ext in ext_part.split('|').filter(|e| !e.trim().is_empty()) {
        let ext = ext.trim();
        if ext == "*" {
            wildcard = true;
        } else {
            extensions.push(ext.to_lowercase());
        }
    }

    if extensions.is_empty() && !wildcard {
        return Err("extension list is empty".to_string());
    }
    Ok((extensions, wildcard))
}

fn parse_term_line(line: &str) -> Result<TermList, String> {
    if !line.starts_with('|') || !line.ends_with('|') || line.len() < 2 {
        return Err(format!("expected pipe-delimited term list, found '{line}'"));
    }

    let terms: Vec<String> = line[1..line.len() - 1]
        .split('|')
        .map(|t| t.trim().to_string())
        .collect();

    if terms.iter().any(|t| t.is_empty()) {
        return Err("term list contains an empty term".to_string());
    }
    if terms.len() < 2 {
        return Err("term list needs at least two terms".to_string());
    }
    Ok(TermList::new(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_block() {
        let (dict, issues) = parse("(|css|) {\n\t|margin|padding|\n}\n");
        assert!(issues.is_empty());
        assert_eq!(dict.blocks().len(), 1);
        assert_eq!(dict.blocks()[0].extensions(), &["css"]);
        assert_eq!(dict.blocks()[0].term_lists()[0].terms(), &["margin", "padding"]);
    }

    #[test]
    fn test_parse_wildcard_block() {
        let (dict, issues) = parse("(|*|) {\n|on|off|\n}\n");
        assert!(issues.is_empty());
        assert!(dict.blocks()[0].is_wildcard());
        assert!(dict.blocks()[0].matches_extension(Some("anything")));
        assert!(dict.blocks()[0].matches_extension(None));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let (dict, issues) = parse("# heading\n\n(|js|) {\n# inside\n|a|b|\n}\n");
        assert!(issues.is_empty());
        assert_eq!(dict.term_list_count(), 1);
    }

    #[test]
    fn test_malformed_term_line_is_skipped() {
        let (dict, issues) = parse("(|js|) {\n|a|b|\nnot a list\n|c|d|\n}\n");
        assert_eq!(dict.term_list_count(), 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
    }

    #[test]
    fn test_header_without_brace_is_rejected() {
        let (dict, issues) = parse("(|js|)\n|a|b|\n}\n");
        assert!(dict.is_empty());
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_empty_extension_list_is_rejected() {
        let (dict, issues) = parse("(||) {\n|a|b|\n}\n");
        assert!(dict.is_empty());
        assert_eq!(issues[0].line, 1);
    }

    #[test]
    fn test_single_term_list_is_rejected() {
        let (_, issues) = parse("(|js|) {\n|alone|\n}\n");
        assert!(issues.iter().any(|i| i.message.contains("at least two")));
    }

    #[test]
    fn test_unclosed_block_keeps_parsed_lists() {
        let (dict, issues) = parse("(|js|) {\n|a|b|\n");
        assert_eq!(dict.term_list_count(), 1);
        assert!(issues.iter().any(|i| i.message.contains("never closed")));
    }

    #[test]
    fn test_extensions_lowercased() {
        let (dict, _) = parse("(|JS|Vue|) {\n|a|b|\n}\n");
        assert_eq!(dict.blocks()[0].extensions(), &["js", "vue"]);
    }

    #[test]
    fn test_default_dictionary_parses_cleanly() {
        let (dict, issues) = parse(default_dictionary_text());
        assert!(issues.is_empty(), "issues in shipped dictionary: {issues:?}");
        assert!(dict.blocks().len() >= 4);
        assert!(dict.blocks().iter().any(|b| b.is_wildcard()));
    }

    #[test]
    fn test_issue_display() {
        let issue = ParseIssue { line: 7, message: "boom".to_string() };
        assert_eq!(issue.to_string(), "line 7: boom");
    }
}
