//! Visible-length measurement and segment-preserving truncation.
//!
//! The collapsed preview must cut visible text at a fixed budget while
//! keeping every image block before the cut fully intact, never splitting
//! a tag, a token, or a character reference. The decision works on the
//! *original raw* content; the shortened slice is re-run through the
//! normal pipeline afterwards.

use crate::segment::{parse_segments, Segment, IMAGE_URL_ANYWHERE_REGEX};
use crate::entities::{decode_entities, entity_len_at};

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex pattern"));

/// Result of the raw-content cut. The caller re-renders `raw_slice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOutcome {
    /// The (possibly shortened) raw content.
    pub raw_slice: String,
    /// Whether a cut was made.
    pub was_truncated: bool,
}

impl TruncateOutcome {
    fn unchanged(raw: &str) -> Self {
        Self {
            raw_slice: raw.to_string(),
            was_truncated: false,
        }
    }
}

/// Count the visible text characters of `raw`: image-URL-looking
/// substrings removed, tags removed, character references counted as one.
pub fn visible_length(raw: &str) -> usize {
    let without_images = IMAGE_URL_ANYWHERE_REGEX.replace_all(raw, "");
    let without_tags = TAG_REGEX.replace_all(&without_images, "");
    decode_entities(&without_tags).chars().count()
}

/// Visible characters of one text segment during the walk: tags are free,
/// a character reference counts as one.
fn segment_visible_chars(text: &str) -> usize {
    let without_tags = TAG_REGEX.replace_all(text, "");
    decode_entities(&without_tags).chars().count()
}

/// Copy at most `budget` visible characters from `text`, never stopping
/// inside a tag or a character reference.
fn take_visible_prefix(text: &str, budget: usize) -> String {
    let mut out = String::new();
    let mut counted = 0usize;
    let mut rest = text;

    // Stop exactly at the budget; a tag reached before that point is
    // copied whole without counting.
    while !rest.is_empty() && counted < budget {
        if let Some(stripped) = rest.strip_prefix('<') {
            match stripped.find('>') {
                Some(i) => {
                    out.push_str(&rest[..i + 2]);
                    rest = &rest[i + 2..];
                }
                None => {
                    // Unterminated tag: keep it whole and stop counting.
                    out.push_str(rest);
                    break;
                }
            }
            continue;
        }
        if let Some(len) = entity_len_at(rest) {
            out.push_str(&rest[..len]);
            rest = &rest[len..];
            counted += 1;
            continue;
        }
        let c = rest.chars().next().expect("non-empty rest has a char");
        out.push(c);
        rest = &rest[c.len_utf8()..];
        counted += 1;
    }

    out
}

/// Walk the segments of `raw`, keeping image blocks whole (they never
/// count) and cutting the first text segment that would exceed the
/// remaining budget. Nothing after the cut is kept, image blocks
/// included.
fn budget_cut(raw: &str, budget: usize) -> Option<String> {
    let segments = parse_segments(raw);
    if segments.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut remaining = budget;

    for segment in &segments {
        match segment {
            Segment::Image { .. } | Segment::ImageGroup { .. } => {
                out.push_str(segment.raw_text());
            }
            Segment::Text(text) => {
                let visible = segment_visible_chars(text);
                if visible <= remaining {
                    out.push_str(text);
                    remaining -= visible;
                } else {
                    out.push_str(&take_visible_prefix(text, remaining));
                    break;
                }
            }
        }
    }

    Some(out)
}

/// Shorten `raw` so its visible length fits `budget`.
///
/// Never fails: an internal fault degrades to the untruncated content, a
/// study session must not be blocked on a formatting problem.
pub fn truncate_raw(raw: &str, budget: usize) -> TruncateOutcome {
    if raw.is_empty() {
        return TruncateOutcome::unchanged(raw);
    }
    if visible_length(raw) <= budget {
        return TruncateOutcome::unchanged(raw);
    }

    match budget_cut(raw, budget) {
        Some(raw_slice) => TruncateOutcome {
            raw_slice,
            was_truncated: true,
        },
        None => {
            tracing::warn!(budget, "truncation degraded to full content");
            TruncateOutcome::unchanged(raw)
        }
    }
}
