//! Camel case word pair swapping

/// Swaps the two humps of a two-word camel case token: `dataType`
/// becomes `typeData`, `DataType` becomes `TypeData`.
pub(crate) fn shifted_pair(text: &str) -> Option<String> {
    let split = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_uppercase())
        .map(|(idx, _)| idx)?;

    let first = &text[..split];
    let second = &text[split..];
    let first_was_capitalized = first.chars().next()?.is_ascii_uppercase();

    let new_first = if first_was_capitalized {
        second.to_string()
    } else {
        decapitalize(second)
    };
    Some(format!("{new_first}{}", capitalize(first)))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel_swap() {
        assert_eq!(shifted_pair("dataType").unwrap(), "typeData");
        assert_eq!(shifted_pair("maxValue").unwrap(), "valueMax");
    }

    #[test]
    fn test_upper_camel_swap() {
        assert_eq!(shifted_pair("DataType").unwrap(), "TypeData");
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        assert_eq!(shifted_pair(&shifted_pair("dataType").unwrap()).unwrap(), "dataType");
    }

    #[test]
    fn test_digits_stay_with_their_word() {
        assert_eq!(shifted_pair("utf8Name").unwrap(), "nameUtf8");
    }

    #[test]
    fn test_single_word_is_none() {
        assert_eq!(shifted_pair("data"), None);
    }
}
