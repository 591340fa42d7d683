//! Sanitization of pasted overview content.
//!
//! Pasted content arrives straight from a rich clipboard and can carry
//! executable markup, platform tracking attributes, and arbitrary inline
//! styling. This module reduces it to text plus simple typographic
//! formatting before any other stage sees it:
//!
//! - blocked elements removed with their content (script/style/iframe/
//!   object/embed and interactive controls)
//! - inline event handlers and platform-authoring attributes stripped
//! - `style` attributes filtered against a typographic allow-list, with
//!   yellow highlight backgrounds remapped to a fixed accent color
//! - `<mark>` normalized to strong emphasis with a highlight class
//! - runs of spaces/tabs collapsed to one space (newlines survive; the
//!   plain-text structurer needs blank-line boundaries)
//!
//! Unsanitized text must never reach the image-token expander.

mod style_attr;

pub use style_attr::HIGHLIGHT_ACCENT;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::PipelineConfig;

/// Elements whose opening tag, content, and closing tag are all removed.
const BLOCKED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "form", "button", "select", "textarea",
];

/// One element-with-content regex per blocked tag. The regex crate has no
/// backreferences, so a shared alternation could pair `<script>` with
/// `</style>`; per-tag patterns keep open and close matched.
static BLOCKED_ELEMENT_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    BLOCKED_ELEMENTS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                .expect("Invalid blocked element regex pattern")
        })
        .collect()
});

/// Leftover open/close tags of blocked elements (unclosed or orphaned),
/// plus the void `<input>` control.
static BLOCKED_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)</?(?:script|style|iframe|object|embed|form|button|select|textarea|input)\b[^>]*>",
    )
    .expect("Invalid blocked tag regex pattern")
});

/// Inline event handlers in any quoting form: onclick="..", onload='..',
/// onerror=bare.
static EVENT_HANDLER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s+on[a-z]+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#)
        .expect("Invalid event handler regex pattern")
});

/// Platform tracking/automation attributes that ride along on pastes from
/// real result pages. A value is required so hyphenated prose like
/// "data-driven" is never eaten.
static PLATFORM_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\s+(?:data-[a-z0-9_-]+|jsaction|jscontroller|jsname|jsdata|ping|nonce)\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#,
    )
    .expect("Invalid platform attribute regex pattern")
});

/// HTML comments, including the StartFragment/EndFragment markers some
/// platforms wrap a clipboard paste in.
static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex pattern"));

/// Head-only tags that leak into clipboard HTML.
static HEAD_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<meta\b[^>]*>|<link\b[^>]*>|<title\b[^>]*>.*?</title\s*>")
        .expect("Invalid head tag regex pattern")
});

/// Runs of horizontal whitespace. Newlines are deliberately excluded.
static HORIZONTAL_WS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("Invalid whitespace regex pattern"));

/// Zero-width and BOM characters that survive a platform paste.
const ZERO_WIDTH_CHARS: &[char] = &['\u{200b}', '\u{200c}', '\u{200e}', '\u{200f}', '\u{feff}'];

/// Sanitize raw pasted content according to `config`.
///
/// Returns an empty string for empty input; no later pipeline stage runs
/// on empty content.
pub fn sanitize(raw: &str, config: &PipelineConfig) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Normalize line endings first so every later pass sees plain \n.
    let mut text = raw.replace("\r\n", "\n").replace('\r', "\n");

    if config.strip_paste_artifacts {
        text = strip_paste_artifacts(&text);
    }

    for re in BLOCKED_ELEMENT_REGEXES.iter() {
        text = re.replace_all(&text, "").into_owned();
    }
    text = BLOCKED_TAG_REGEX.replace_all(&text, "").into_owned();

    text = EVENT_HANDLER_REGEX.replace_all(&text, "").into_owned();
    text = PLATFORM_ATTR_REGEX.replace_all(&text, "").into_owned();

    text = style_attr::filter_style_attributes(&text);
    text = style_attr::normalize_mark_elements(&text);

    text = HORIZONTAL_WS_REGEX.replace_all(&text, " ").into_owned();

    tracing::trace!(input_len = raw.len(), output_len = text.len(), "sanitized content");
    text
}

/// Remove platform paste artifacts: comments, head-only tags, and
/// zero-width characters.
fn strip_paste_artifacts(text: &str) -> String {
    let text = COMMENT_REGEX.replace_all(text, "");
    let text = HEAD_TAG_REGEX.replace_all(&text, "");
    text.chars().filter(|c| !ZERO_WIDTH_CHARS.contains(c)).collect()
}
