//! Character-reference helpers shared by the length metric and the renderer.
//!
//! The pipeline only needs a small slice of the HTML entity machinery:
//! - decoding references so visible-length counting treats `&amp;` as one
//!   character, and
//! - escaping attribute values when emitting image markup.
//!
//! Unknown named references are left untouched (fail-open, consistent with
//! the rest of the pipeline).

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a single character reference: numeric decimal, numeric hex, or a
/// short named form. The length caps keep the scan from running away on
/// text that merely contains a stray `&`.
static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("Invalid entity regex pattern")
});

/// Anchored variant used when walking character-by-character: does a
/// reference start exactly here?
static ENTITY_AT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("Invalid anchored entity regex pattern")
});

/// Resolve the body of a character reference (without `&` and `;`) to its
/// character, or None when it is not one we recognize.
fn resolve_entity(body: &str) -> Option<char> {
    if let Some(digits) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        let code = u32::from_str_radix(digits, 16).ok()?;
        return char::from_u32(code);
    }
    if let Some(digits) = body.strip_prefix('#') {
        let code: u32 = digits.parse().ok()?;
        return char::from_u32(code);
    }
    // The short named set that shows up in pasted overview content.
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "lbrace" => Some('{'),
        "rbrace" => Some('}'),
        _ => None,
    }
}

/// Decode recognized character references; everything else passes through
/// verbatim. Used by the visible-length metric, never to build output
/// markup.
pub fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            match resolve_entity(&caps[1]) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// If a recognized character reference starts at the beginning of `text`,
/// return its byte length. The truncator uses this so a cut never lands
/// inside a reference it would count as one character. Unrecognized
/// references are plain literal text to both the counter and the cut, so
/// they return None here.
pub fn entity_len_at(text: &str) -> Option<usize> {
    let caps = ENTITY_AT_REGEX.captures(text)?;
    resolve_entity(&caps[1])?;
    Some(caps.get(0).expect("regex match has group 0").end())
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
