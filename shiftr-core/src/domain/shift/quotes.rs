//! Quote style toggling for selections carrying their own quotes

/// Swaps the wrapping quote pair of a selection like `'hello'` to
/// `"hello"` and back. Both directions toggle the same way. The
/// interior is kept verbatim; a selection whose interior contains the
/// target quote would become ambiguous and is left alone.
pub(crate) fn toggled(text: &str, quote: char) -> Option<String> {
    let other = match quote {
        '\'' => '"',
        '"' => '\'',
        _ => return None,
    };
    let interior = text.strip_prefix(quote)?.strip_suffix(quote)?;
    if interior.contains(other) {
        return None;
    }
    Some(format!("{other}{interior}{other}"))
}
