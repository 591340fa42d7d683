//! Tokenizer for the image notation embedded in overview content.
//!
//! Operators paste image references using an informal bracket/brace
//! notation. The grammar, documented verbatim for interop with the host
//! page:
//!
//! ```text
//! image        := "[" url "]"
//! group        := lbrace image+ rbrace
//! lbrace       := "{" | "&#123;" | "&lbrace;"
//! rbrace       := "}" | "&#125;" | "&rbrace;"
//! url (valid)  := "http://" | "https://" ... one of {jpg,jpeg,png,gif,webp,svg,bmp} [ "?" querystring ]
//! ```
//!
//! Any `image` or `group` whose inner URL(s) fail the valid-url test is
//! left as literal text, not dropped.
//!
//! The tokenizer scans left to right and produces a typed segment list.
//! Each syntactic unit is consumed exactly once, so the renderer never
//! re-matches content that was already expanded; there is no placeholder
//! pass. A group's closing brace must use the same encoding as its
//! opening brace, and the three encodings are tried in a fixed order
//! (literal, numeric reference, named reference) when matches start at
//! the same position.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of the input classified by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any invalid tokens left as-is.
    Text(String),
    /// A single valid bare image token.
    Image {
        /// The image URL exactly as written.
        url: String,
        /// The full matched source slice, `[url]`.
        raw: String,
    },
    /// A brace group with at least one valid image token.
    ImageGroup {
        /// Valid URLs in order; invalid inner tokens are skipped.
        urls: Vec<String>,
        /// The full matched source slice including braces.
        raw: String,
    },
}

impl Segment {
    /// The exact source text this segment covers.
    pub fn raw_text(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Image { raw, .. } => raw,
            Segment::ImageGroup { raw, .. } => raw,
        }
    }

    /// Whether this segment renders as an image block.
    pub fn is_image_block(&self) -> bool {
        matches!(self, Segment::Image { .. } | Segment::ImageGroup { .. })
    }
}

/// Full-token validity test for an image URL: absolute http(s), one of the
/// recognized raster/vector extensions, optional query string.
static VALID_IMAGE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(?:jpg|jpeg|png|gif|webp|svg|bmp)(?:\?\S*)?$")
        .expect("Invalid image URL regex pattern")
});

/// Unanchored variant used by the truncator to find image-URL-looking
/// substrings in running text.
pub(crate) static IMAGE_URL_ANYWHERE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://\S+\.(?:jpg|jpeg|png|gif|webp|svg|bmp)(?:\?\S*)?")
        .expect("Invalid unanchored image URL regex pattern")
});

/// A bracketed token candidate. Validity of the inner URL is checked
/// separately so invalid candidates can stay literal.
static IMAGE_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("Invalid image token regex pattern"));

/// Group patterns, one per brace encoding, in the fixed recognition
/// order. Inner content must be adjacent bracket tokens only.
static GROUP_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\{((?:\[[^\[\]]*\])+)\}",
        r"&#123;((?:\[[^\[\]]*\])+)&#125;",
        r"&lbrace;((?:\[[^\[\]]*\])+)&rbrace;",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid image group regex pattern"))
    .collect()
});

/// Does `url` pass the image-extension test?
pub fn is_valid_image_url(url: &str) -> bool {
    VALID_IMAGE_URL_REGEX.is_match(url)
}

/// One candidate match during the scan.
struct Candidate {
    start: usize,
    end: usize,
    /// Inner token run for groups, None for a bare image token.
    group_inner: Option<String>,
}

/// Find the earliest token match at or after `pos`. Group encodings win
/// over a bare image token at the same position, in their fixed order.
fn earliest_candidate(text: &str, pos: usize) -> Option<Candidate> {
    let haystack = &text[pos..];
    let mut best: Option<Candidate> = None;

    for re in GROUP_REGEXES.iter() {
        if let Some(caps) = re.captures(haystack) {
            let m = caps.get(0).expect("regex match has group 0");
            if best.as_ref().map_or(true, |b| m.start() + pos < b.start) {
                best = Some(Candidate {
                    start: m.start() + pos,
                    end: m.end() + pos,
                    group_inner: Some(caps[1].to_string()),
                });
            }
        }
    }

    if let Some(m) = IMAGE_TOKEN_REGEX.find(haystack) {
        if best.as_ref().map_or(true, |b| m.start() + pos < b.start) {
            best = Some(Candidate {
                start: m.start() + pos,
                end: m.end() + pos,
                group_inner: None,
            });
        }
    }

    best
}

/// Split `text` into literal text, image, and image-group segments.
///
/// Fail-open: candidates whose URLs all fail the validity test are folded
/// back into the surrounding literal text.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(candidate) = earliest_candidate(text, pos) else {
            break;
        };

        literal.push_str(&text[pos..candidate.start]);
        let raw = text[candidate.start..candidate.end].to_string();

        match candidate.group_inner {
            Some(inner) => {
                let urls: Vec<String> = IMAGE_TOKEN_REGEX
                    .captures_iter(&inner)
                    .map(|caps| caps[1].to_string())
                    .filter(|url| is_valid_image_url(url))
                    .collect();
                if urls.is_empty() {
                    // No valid image inside: the whole group stays literal.
                    literal.push_str(&raw);
                } else {
                    flush_literal(&mut segments, &mut literal);
                    tracing::debug!(images = urls.len(), "matched image group");
                    segments.push(Segment::ImageGroup { urls, raw });
                }
            }
            None => {
                let url = raw[1..raw.len() - 1].to_string();
                if is_valid_image_url(&url) {
                    flush_literal(&mut segments, &mut literal);
                    tracing::debug!(%url, "matched bare image token");
                    segments.push(Segment::Image { url, raw });
                } else {
                    literal.push_str(&raw);
                }
            }
        }

        pos = candidate.end;
    }

    literal.push_str(&text[pos..]);
    flush_literal(&mut segments, &mut literal);
    segments
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Text(std::mem::take(literal)));
    }
}
