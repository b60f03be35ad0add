//! Shift request context
//!
//! [`ShiftContext`] is the single input contract of the engine: the
//! selected text plus the surrounding document state a host editor or
//! CLI front end can supply. Classification never mutates the context,
//! and executors only read from it.

/// Direction of a shift request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Shift to the next value.
    Up,
    /// Shift to the previous value.
    Down,
}

/// Input to a classify or shift call.
///
/// Only `selected_text` and `direction` are mandatory. The remaining
/// fields default to values that make standalone usage work: the caret
/// line and document fall back to the selection itself, and the file
/// extension to `None`.
#[derive(Debug, Clone)]
pub struct ShiftContext {
    /// The text to classify and shift. A caret word or an explicit
    /// selection, possibly spanning multiple lines.
    pub selected_text: String,
    /// Character immediately before the selection, if any.
    pub prefix_char: Option<char>,
    /// Character immediately after the selection, if any.
    pub postfix_char: Option<char>,
    /// Full text of the line the caret is on.
    pub caret_line: String,
    /// Full document text, used by document-wide rotation.
    pub document_text: String,
    /// Lowercase file extension without the dot, if known.
    pub file_extension: Option<String>,
    /// Shift direction.
    pub direction: Direction,
    /// Set when the host requested a "more" shift; the value is the
    /// repeat count and switches rotation into its reduced mode.
    pub more_count: Option<u32>,
    /// Whether the caret line is the last line of the document.
    pub is_last_line: bool,
}

impl ShiftContext {
    /// Creates a context for a bare selection.
    pub fn new(selected_text: impl Into<String>, direction: Direction) -> Self {
        let selected_text = selected_text.into();
        Self {
            caret_line: selected_text.clone(),
            document_text: selected_text.clone(),
            selected_text,
            prefix_char: None,
            postfix_char: None,
            file_extension: None,
            direction,
            more_count: None,
            is_last_line: false,
        }
    }

    /// Sets the character preceding the selection.
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix_char = Some(prefix);
        self
    }

    /// Sets the character following the selection.
    pub fn with_postfix(mut self, postfix: char) -> Self {
        self.postfix_char = Some(postfix);
        self
    }

    /// Sets the full caret line.
    pub fn with_caret_line(mut self, line: impl Into<String>) -> Self {
        self.caret_line = line.into();
        self
    }

    /// Sets the full document text.
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document_text = document.into();
        self
    }

    /// Sets the file extension. Stored lowercase; pass it without the
    /// leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = Some(extension.into().to_lowercase());
        self
    }

    /// Marks the request as a repeated "more" shift.
    pub fn with_more_count(mut self, count: u32) -> Self {
        self.more_count = Some(count);
        self
    }

    /// Marks the caret line as the last line of the document.
    pub fn with_last_line(mut self, is_last_line: bool) -> Self {
        self.is_last_line = is_last_line;
        self
    }

    /// Extension as a borrowed `&str`, the form lookups want.
    pub fn extension(&self) -> Option<&str> {
        self.file_extension.as_deref()
    }

    /// Whether the selection spans multiple lines. A single trailing
    /// line terminator does not count; a full-line selection including
    /// its newline is still one line of content.
    pub fn is_multi_line(&self) -> bool {
        let text = self.selected_text.strip_suffix('\n').unwrap_or(&self.selected_text);
        text.contains('\n')
    }
}
