//! HTML entity encoding and decoding
//!
//! Shifting an HTML-encodable string toggles between entity-encoded and
//! decoded forms: decoding wins when the text contains entities,
//! otherwise the text is encoded. Covers the basic markup entities, the
//! named Latin-1 set and numeric character references.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Characters that must be encoded for markup safety. Order matters for
/// documentation only; encoding is a single pass.
const BASIC_ENTITIES: &[(char, &str)] = &[('&', "amp"), ('<', "lt"), ('>', "gt"), ('"', "quot")];

/// Named entities for the Latin-1 supplement, code points 160 to 255.
const LATIN1_ENTITIES: &[(char, &str)] = &[
    ('\u{a0}', "nbsp"),
    ('¡', "iexcl"),
    ('¢', "cent"),
    ('£', "pound"),
    ('¤', "curren"),
    ('¥', "yen"),
    ('¦', "brvbar"),
    ('§', "sect"),
    ('¨', "uml"),
    ('©', "copy"),
    ('ª', "ordf"),
    ('«', "laquo"),
    ('¬', "not"),
    ('\u{ad}', "shy"),
    ('®', "reg"),
    ('¯', "macr"),
    ('°', "deg"),
    ('±', "plusmn"),
    ('²', "sup2"),
    ('³', "sup3"),
    ('´', "acute"),
    ('µ', "micro"),
    ('¶', "para"),
    ('·', "middot"),
    ('¸', "cedil"),
    ('¹', "sup1"),
    ('º', "ordm"),
    ('»', "raquo"),
    ('¼', "frac14"),
    ('½', "frac12"),
    ('¾', "frac34"),
    ('¿', "iquest"),
    ('À', "Agrave"),
    ('Á', "Aacute"),
    ('Â', "Acirc"),
    ('Ã', "Atilde"),
    ('Ä', "Auml"),
    ('Å', "Aring"),
    ('Æ', "AElig"),
    ('Ç', "Ccedil"),
    ('È', "Egrave"),
    ('É', "Eacute"),
    ('Ê', "Ecirc"),
    ('Ë', "Euml"),
    ('Ì', "Igrave"),
    ('Í', "Iacute"),
    ('Î', "Icirc"),
    ('Ï', "Iuml"),
    ('Ð', "ETH"),
    ('Ñ', "Ntilde"),
    ('Ò', "Ograve"),
    ('Ó', "Oacute"),
    ('Ô', "Ocirc"),
    ('Õ', "Otilde"),
    ('Ö', "Ouml"),
    ('×', "times"),
    ('Ø', "Oslash"),
    ('Ù', "Ugrave"),
    ('Ú', "Uacute"),
    ('Û', "Ucirc"),
    ('Ü', "Uuml"),
    ('Ý', "Yacute"),
    ('Þ', "THORN"),
    ('ß', "szlig"),
    ('à', "agrave"),
    ('á', "aacute"),
    ('â', "acirc"),
    ('ã', "atilde"),
    ('ä', "auml"),
    ('å', "aring"),
    ('æ', "aelig"),
    ('ç', "ccedil"),
    ('è', "egrave"),
    ('é', "eacute"),
    ('ê', "ecirc"),
    ('ë', "euml"),
    ('ì', "igrave"),
    ('í', "iacute"),
    ('î', "icirc"),
    ('ï', "iuml"),
    ('ð', "eth"),
    ('ñ', "ntilde"),
    ('ò', "ograve"),
    ('ó', "oacute"),
    ('ô', "ocirc"),
    ('õ', "otilde"),
    ('ö', "ouml"),
    ('÷', "divide"),
    ('ø', "oslash"),
    ('ù', "ugrave"),
    ('ú', "uacute"),
    ('û', "ucirc"),
    ('ü', "uuml"),
    ('ý', "yacute"),
    ('þ', "thorn"),
    ('ÿ', "yuml"),
];

fn name_to_char() -> &'static HashMap<&'static str, char> {
    static MAP: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    MAP.get_or_init(|| {
        BASIC_ENTITIES
            .iter()
            .chain(LATIN1_ENTITIES.iter())
            .map(|&(c, name)| (name, c))
            .collect()
    })
}

fn char_to_name(c: char) -> Option<&'static str> {
    BASIC_ENTITIES
        .iter()
        .chain(LATIN1_ENTITIES.iter())
        .find(|&&(entity_char, _)| entity_char == c)
        .map(|&(_, name)| name)
}

/// Encodes every encodable character as a named entity.
pub(crate) fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match char_to_name(c) {
            Some(name) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            None => out.push(c),
        }
    }
    out
}

/// Decodes named and numeric entities; anything unrecognized is kept
/// verbatim.
pub(crate) fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match parse_entity(tail) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses one entity at the head of `text` (which starts with `&`).
/// Returns the decoded character and the byte length consumed.
fn parse_entity(text: &str) -> Option<(char, usize)> {
    let semi = text.find(';')?;
    // Entity names are short; a distant semicolon is unrelated.
    if semi < 2 || semi > 9 {
        return None;
    }
    let body = &text[1..semi];

    let decoded = if let Some(digits) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X"))
    {
        char::from_u32(u32::from_str_radix(digits, 16).ok()?)?
    } else if let Some(digits) = body.strip_prefix('#') {
        char::from_u32(digits.parse().ok()?)?
    } else {
        *name_to_char().get(body)?
    };
    Some((decoded, semi + 1))
}

/// Whether encoding or decoding would change the text at all.
pub(crate) fn is_shiftable(text: &str) -> bool {
    decode(text) != text || encode(text) != text
}

/// Toggles between forms: decode when the text contains entities,
/// otherwise encode.
pub(crate) fn shifted(text: &str) -> Option<String> {
    let decoded = decode(text);
    if decoded != text {
        return Some(decoded);
    }
    let encoded = encode(text);
    if encoded != text {
        return Some(encoded);
    }
    None
}
