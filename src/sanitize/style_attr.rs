//! Inline style filtering and highlight normalization.
//!
//! Pasted overview content keeps only purely typographic inline styling.
//! Color and background declarations are dropped, with one rewrite: a
//! yellow highlight background becomes the fixed accent color so pasted
//! highlighted text stays visually distinguishable without carrying
//! arbitrary attacker-chosen colors.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed accent color replacing any recognized yellow highlight
/// background.
pub const HIGHLIGHT_ACCENT: &str = "#ffd54a";

/// Inline style properties that survive sanitization.
const ALLOWED_PROPERTIES: &[&str] = &[
    "font-weight",
    "font-size",
    "text-decoration",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "line-height",
    "text-align",
];

static STYLE_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s+style\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("Invalid style attribute regex pattern")
});

/// Common "yellow highlight" background values seen in pastes from real
/// result pages and word processors.
static YELLOW_HIGHLIGHT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:yellow|#ff0\b|#ffff00|#ffff99|#fff2a8|#ffeb3b|rgb\(\s*255\s*,\s*255\s*,\s*0\s*\))",
    )
    .expect("Invalid yellow highlight regex pattern")
});

static MARK_OPEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<mark\b[^>]*>").expect("Invalid mark open regex pattern"));

static MARK_CLOSE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</mark\s*>").expect("Invalid mark close regex pattern"));

/// Filter every `style="…"` attribute in `text` down to the typographic
/// allow-list. Attributes left with no surviving declarations are removed
/// entirely.
pub fn filter_style_attributes(text: &str) -> String {
    STYLE_ATTR_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let declarations = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            let filtered = filter_declarations(declarations);
            if filtered.is_empty() {
                String::new()
            } else {
                format!(" style=\"{}\"", filtered)
            }
        })
        .into_owned()
}

/// Keep allow-listed declarations; rewrite yellow highlight backgrounds to
/// the accent color; drop everything else.
fn filter_declarations(declarations: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    for declaration in declarations.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if ALLOWED_PROPERTIES.contains(&property.as_str()) {
            kept.push(format!("{}: {}", property, value));
        } else if (property == "background" || property == "background-color")
            && YELLOW_HIGHLIGHT_REGEX.is_match(value)
        {
            kept.push(format!("background-color: {}", HIGHLIGHT_ACCENT));
        }
    }
    kept.join("; ")
}

/// Normalize `<mark>` to strong emphasis with a highlight class. Any
/// attributes on the original element are discarded.
pub fn normalize_mark_elements(text: &str) -> String {
    let text = MARK_OPEN_REGEX.replace_all(text, "<strong class=\"overview-highlight\">");
    MARK_CLOSE_REGEX.replace_all(&text, "</strong>").into_owned()
}
