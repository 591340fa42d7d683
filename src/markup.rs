//! Single-pass renderer from segments to markup.
//!
//! Text segments pass through verbatim (they are already sanitized);
//! image segments become standalone blocks; group segments become
//! horizontally-scrollable rows. Row container ids are unique within a
//! render pass: a random per-call suffix plus a running row index, so
//! repeated renders of the same content on one page cannot collide.

use uuid::Uuid;

use crate::entities::escape_attr;
use crate::segment::Segment;

/// Class on a standalone image block.
pub const IMAGE_BLOCK_CLASS: &str = "overview-image";

/// Class on a scrollable image-row container.
pub const IMAGE_ROW_CLASS: &str = "overview-image-row";

/// Prefix of every generated row container id.
pub const IMAGE_ROW_ID_PREFIX: &str = "overview-row";

/// Render a segment list to markup.
///
/// The scroll-affordance collaborator looks up row containers by the ids
/// generated here; ids only need to be unique for the lifetime of one
/// render pass.
pub fn render_segments(segments: &[Segment]) -> String {
    let pass_suffix = Uuid::new_v4().simple().to_string();
    let pass_suffix = &pass_suffix[..8];
    let mut row_index = 0usize;

    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Image { url, .. } => {
                out.push_str(&render_single_image(url));
            }
            Segment::ImageGroup { urls, .. } => {
                let id = format!("{}-{}-{}", IMAGE_ROW_ID_PREFIX, pass_suffix, row_index);
                row_index += 1;
                out.push_str(&render_image_row(&id, urls));
            }
        }
    }
    out
}

/// A standalone single-image block.
fn render_single_image(url: &str) -> String {
    format!(
        r#"<div class="{}"><img src="{}" alt=""></div>"#,
        IMAGE_BLOCK_CLASS,
        escape_attr(url)
    )
}

/// A horizontally-scrollable row with one `<img>` per valid URL.
fn render_image_row(id: &str, urls: &[String]) -> String {
    let mut row = format!(r#"<div class="{}" id="{}">"#, IMAGE_ROW_CLASS, id);
    for url in urls {
        row.push_str(&format!(r#"<img src="{}" alt="">"#, escape_attr(url)));
    }
    row.push_str("</div>");
    row
}
