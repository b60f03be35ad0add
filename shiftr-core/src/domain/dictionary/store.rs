//! Dictionary data model and lookup tiers

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::domain::error::DomainError;

use super::parser;

/// One cyclic list of interchangeable terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermList {
    terms: Vec<String>,
}

impl TermList {
    pub(crate) fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Case-sensitive position of `term`.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t == term)
    }

    /// Case-insensitive position of `term`.
    pub fn position_ignore_case(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.eq_ignore_ascii_case(term))
    }
}

/// A group of term lists scoped to a set of file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    extensions: Vec<String>,
    wildcard: bool,
    term_lists: Vec<TermList>,
}

impl Block {
    pub(crate) fn new(extensions: Vec<String>, wildcard: bool, term_lists: Vec<TermList>) -> Self {
        Self { extensions, wildcard, term_lists }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn term_lists(&self) -> &[TermList] {
        &self.term_lists
    }

    /// Whether this block applies to a file with the given extension.
    ///
    /// Wildcard blocks apply to every file, including files without an
    /// extension. Comparison is case-insensitive.
    pub fn matches_extension(&self, extension: Option<&str>) -> bool {
        if self.wildcard {
            return true;
        }
        extension
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

/// Location of a matched term inside a [`Dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryHit {
    /// Index of the containing block.
    pub block: usize,
    /// Index of the term list within the block.
    pub list: usize,
    /// Index of the matched term within the list.
    pub index: usize,
}

/// Parsed dictionary, ready for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    blocks: Vec<Block>,
}

impl Dictionary {
    pub(crate) fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parses dictionary text leniently, dropping malformed parts.
    pub fn parse(text: &str) -> Self {
        let (dictionary, _) = Self::parse_with_report(text);
        dictionary
    }

    /// Parses dictionary text and reports every skipped construct.
    pub fn parse_with_report(text: &str) -> (Self, Vec<parser::ParseIssue>) {
        parser::parse(text)
    }

    /// Loads and parses a dictionary file.
    ///
    /// Fails if the file cannot be read or contains no usable blocks.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DomainError::DictionaryIo {
            path: path.display().to_string(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        if dictionary.is_empty() {
            return Err(DomainError::DictionaryParse(format!(
                "no valid blocks in '{}'",
                path.display()
            )));
        }
        Ok(dictionary)
    }

    /// The dictionary shipped with the crate, parsed once.
    pub fn embedded() -> Arc<Dictionary> {
        static EMBEDDED: OnceLock<Arc<Dictionary>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| Arc::new(Dictionary::parse(parser::default_dictionary_text())))
            .clone()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of term lists across all blocks.
    pub fn term_list_count(&self) -> usize {
        self.blocks.iter().map(|b| b.term_lists().len()).sum()
    }

    /// Finds `term` in blocks scoped to `extension`.
    ///
    /// Runs a case-sensitive pass over every matching block before
    /// falling back to a case-insensitive pass.
    pub fn locate(&self, term: &str, extension: Option<&str>) -> Option<DictionaryHit> {
        self.locate_where(term, |block| block.matches_extension(extension))
    }

    /// Finds `term` in blocks NOT scoped to `extension`.
    ///
    /// Together with [`Dictionary::locate`] this partitions the blocks,
    /// so the global tier never re-reports an extension-specific hit.
    pub fn locate_global(&self, term: &str, extension: Option<&str>) -> Option<DictionaryHit> {
        self.locate_where(term, |block| !block.matches_extension(extension))
    }

    /// Term list behind a previously returned hit.
    pub fn term_list(&self, hit: &DictionaryHit) -> Option<&TermList> {
        self.blocks.get(hit.block)?.term_lists().get(hit.list)
    }

    /// Convenience wrapper over [`Dictionary::locate`] returning the
    /// matched list directly.
    pub fn lookup(&self, term: &str, extension: Option<&str>) -> Option<&TermList> {
        self.locate(term, extension).and_then(|hit| self.term_list(&hit))
    }

    /// Convenience wrapper over [`Dictionary::locate_global`].
    pub fn lookup_global(&self, term: &str, extension: Option<&str>) -> Option<&TermList> {
        self.locate_global(term, extension).and_then(|hit| self.term_list(&hit))
    }

    fn locate_where(&self, term: &str, relevant: impl Fn(&Block) -> bool) -> Option<DictionaryHit> {
        for (block_idx, block) in self.blocks.iter().enumerate() {
            if !relevant(block) {
                continue;
            }
            for (list_idx, list) in block.term_lists().iter().enumerate() {
                if let Some(index) = list.position(term) {
                    return Some(DictionaryHit { block: block_idx, list: list_idx, index });
                }
            }
        }
        for (block_idx, block) in self.blocks.iter().enumerate() {
            if !relevant(block) {
                continue;
            }
            for (list_idx, list) in block.term_lists().iter().enumerate() {
                if let Some(index) = list.position_ignore_case(term) {
                    return Some(DictionaryHit { block: block_idx, list: list_idx, index });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::parse(
            "(|js|ts|) {\n\
             \t|var|let|const|\n\
             }\n\
             (|*|) {\n\
             \t|true|false|\n\
             \t|setTimeout|setInterval|\n\
             }\n",
        )
    }

    #[test]
    fn test_extension_scoped_lookup() {
        let dict = sample();
        let list = dict.lookup("let", Some("js")).unwrap();
        assert_eq!(list.terms(), &["var", "let", "const"]);
        // The wildcard block also matches js files.
        assert!(dict.lookup("true", Some("js")).is_some());
    }

    #[test]
    fn test_global_lookup_skips_extension_matched_blocks() {
        let dict = sample();
        // For a js file the js block and the wildcard block are both
        // extension-matched, so the global tier sees neither.
        assert!(dict.lookup_global("var", Some("js")).is_none());
        assert!(dict.lookup_global("true", Some("js")).is_none());
        // For a php file the js block lands in the global tier.
        assert!(dict.lookup_global("var", Some("php")).is_some());
    }

    #[test]
    fn test_case_sensitive_pass_wins() {
        let dict = sample();
        let hit = dict.locate("setTimeout", None).unwrap();
        assert_eq!(dict.term_list(&hit).unwrap().terms()[hit.index], "setTimeout");
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let dict = sample();
        let hit = dict.locate("SETTIMEOUT", None).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_missing_term() {
        let dict = sample();
        assert!(dict.lookup("nonexistent", Some("js")).is_none());
        assert!(dict.locate_global("nonexistent", None).is_none());
    }

    #[test]
    fn test_no_extension_matches_wildcard_only() {
        let dict = sample();
        assert!(dict.lookup("true", None).is_some());
        assert!(dict.lookup("var", None).is_none());
        // js block is global for extension-less files.
        assert!(dict.lookup_global("var", None).is_some());
    }

    #[test]
    fn test_embedded_dictionary_is_shared() {
        let a = Dictionary::embedded();
        let b = Dictionary::embedded();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }
}
