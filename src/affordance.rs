//! Scroll-affordance registry for image rows.
//!
//! A horizontally-scrollable image row shows edge affordances (fades or
//! arrows) when there is more content in that direction. The rendering
//! surface registers each row container here after paint and reports
//! scroll/resize updates; the registry answers which edges need an
//! affordance. Rows are addressed by the container id generated during
//! rendering.
//!
//! The registry owns all per-row state explicitly — there is no ambient
//! global scroll handler. It tolerates lookups for containers that do not
//! exist yet (attach happens after paint) and detach of containers that
//! already disappeared on re-render (no-op cleanup).

use std::collections::HashMap;

/// Which edges of a row currently need a scroll affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAffordances {
    /// Content is hidden before the visible area.
    pub show_start: bool,
    /// Content is hidden past the visible area.
    pub show_end: bool,
}

/// Geometry and scroll position of one registered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowState {
    viewport_width: u32,
    content_width: u32,
    scroll_offset: u32,
}

impl RowState {
    fn max_offset(&self) -> u32 {
        self.content_width.saturating_sub(self.viewport_width)
    }

    fn edges(&self) -> EdgeAffordances {
        EdgeAffordances {
            show_start: self.scroll_offset > 0,
            show_end: self.scroll_offset < self.max_offset(),
        }
    }
}

/// Registry mapping row container ids to their scroll state.
#[derive(Debug, Default)]
pub struct ScrollAffordanceRegistry {
    rows: HashMap<String, RowState>,
}

impl ScrollAffordanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a row container after paint. Re-attaching an id replaces
    /// its state and resets the scroll position.
    pub fn attach(&mut self, container_id: &str, viewport_width: u32, content_width: u32) {
        tracing::debug!(container_id, viewport_width, content_width, "attach image row");
        self.rows.insert(
            container_id.to_string(),
            RowState {
                viewport_width,
                content_width,
                scroll_offset: 0,
            },
        );
    }

    /// Remove a row. Unknown ids are a no-op: the container may already
    /// have disappeared on re-render.
    pub fn detach(&mut self, container_id: &str) {
        if self.rows.remove(container_id).is_some() {
            tracing::debug!(container_id, "detach image row");
        }
    }

    /// Record a scroll update. The offset is clamped to the scrollable
    /// range. Returns true if the edge affordances changed (the surface
    /// only repaints then). Unknown ids return false.
    pub fn on_scroll(&mut self, container_id: &str, offset: u32) -> bool {
        let Some(row) = self.rows.get_mut(container_id) else {
            return false;
        };
        let before = row.edges();
        row.scroll_offset = offset.min(row.max_offset());
        before != row.edges()
    }

    /// Record a resize of a row's viewport/content. The current offset is
    /// re-clamped. Unknown ids are a no-op.
    pub fn on_resize(&mut self, container_id: &str, viewport_width: u32, content_width: u32) {
        let Some(row) = self.rows.get_mut(container_id) else {
            return;
        };
        row.viewport_width = viewport_width;
        row.content_width = content_width;
        row.scroll_offset = row.scroll_offset.min(row.max_offset());
    }

    /// Current edge affordances for a row, or None when it is not
    /// attached (yet).
    pub fn edges(&self, container_id: &str) -> Option<EdgeAffordances> {
        self.rows.get(container_id).map(RowState::edges)
    }

    /// Whether a row is currently attached.
    pub fn is_attached(&self, container_id: &str) -> bool {
        self.rows.contains_key(container_id)
    }

    /// Number of attached rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are attached.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row, e.g. on a full re-render.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
