//! Plain-text structuring.
//!
//! When a participant types (or pastes) plain text with no markup at all,
//! the rendering surface would collapse every line break. This stage wraps
//! blank-line-separated paragraphs in `<p>` and turns single line breaks
//! into `<br>` so the content renders legibly. Content that already
//! carries any tag is assumed to have meaningful markup and passes through
//! untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any angle-bracket tag: element, closing tag, comment, or doctype.
static TAG_HEURISTIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z/!]").expect("Invalid tag heuristic regex pattern"));

/// Blank-line paragraph boundary (allows whitespace on the blank line).
static PARAGRAPH_SPLIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid paragraph split regex pattern"));

/// Wrap plain text in minimal structural markup; no-op when `content`
/// already contains a tag, or has no line breaks to preserve.
pub fn structure_plain_text(content: &str) -> String {
    if content.is_empty() || !content.contains('\n') || TAG_HEURISTIC_REGEX.is_match(content) {
        return content.to_string();
    }

    let paragraphs: Vec<String> = PARAGRAPH_SPLIT_REGEX
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", p.replace('\n', "<br>")))
        .collect();

    paragraphs.join("")
}
