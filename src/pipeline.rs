//! Pipeline orchestration and the public rendering API.
//!
//! Control flow: raw content → sanitizer → tokenizer → renderer
//! (+ plain-text structurer when nothing else produced markup). The
//! truncating variant decides the cut on the *original* raw content and
//! then re-runs the same transform over the shortened slice, so image
//! blocks survive whole and the preview never contains a half-open tag.
//!
//! Every function here is a pure transformation: same input, same output
//! (modulo random row-id suffixes), no I/O, safe to memoize (see
//! `crate::cache`).

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::markup::render_segments;
use crate::sanitize::sanitize;
use crate::segment::parse_segments;
use crate::structure::structure_plain_text;
use crate::truncate::truncate_raw;

/// Result of a truncating render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    /// Sanitized, transformation-complete markup.
    pub markup: String,
    /// Whether the visible text was cut to fit the budget.
    pub was_truncated: bool,
}

/// The rich overview content pipeline.
///
/// # Example
///
/// ```
/// use serp_overview::pipeline::OverviewPipeline;
///
/// let pipeline = OverviewPipeline::default();
/// let markup = pipeline.render("Hello {[http://a.com/1.jpg]} world");
/// assert!(markup.contains("overview-image-row"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverviewPipeline {
    config: PipelineConfig,
}

impl OverviewPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Full transform, no truncation.
    ///
    /// Empty input returns an empty string without running any stage.
    pub fn render(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let sanitized = sanitize(raw, &self.config);
        if sanitized.is_empty() {
            return String::new();
        }

        let segments = parse_segments(&sanitized);
        let expanded = render_segments(&segments);
        let markup = structure_plain_text(&expanded);
        tracing::trace!(raw_len = raw.len(), markup_len = markup.len(), "rendered content");
        markup
    }

    /// Length-bounded transform. `expanded = true` bypasses truncation and
    /// returns the same markup as [`render`](Self::render).
    pub fn render_truncated(&self, raw: &str, budget: usize, expanded: bool) -> RenderOutcome {
        if expanded || raw.is_empty() {
            return RenderOutcome {
                markup: self.render(raw),
                was_truncated: false,
            };
        }

        let cut = truncate_raw(raw, budget);
        RenderOutcome {
            markup: self.render(&cut.raw_slice),
            was_truncated: cut.was_truncated,
        }
    }

    /// Truncating render using the configured default budget.
    pub fn render_preview(&self, raw: &str, expanded: bool) -> RenderOutcome {
        self.render_truncated(raw, self.config.default_budget, expanded)
    }
}

/// Render with the default configuration.
pub fn render(raw: &str) -> String {
    OverviewPipeline::default().render(raw)
}

/// Truncating render with the default configuration.
pub fn render_truncated(raw: &str, budget: usize, expanded: bool) -> RenderOutcome {
    OverviewPipeline::default().render_truncated(raw, budget, expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
        let outcome = render_truncated("", 100, false);
        assert_eq!(outcome.markup, "");
        assert!(!outcome.was_truncated);
    }

    #[test]
    fn test_script_stripped_end_to_end() {
        assert_eq!(render("<script>alert(1)</script>Hello"), "Hello");
    }

    #[test]
    fn test_group_flanked_by_text() {
        let markup = render("Hello {[http://a.com/1.jpg][http://a.com/2.jpg]} world");
        assert!(markup.contains("Hello "));
        assert!(markup.contains(" world"));
        assert_eq!(markup.matches("overview-image-row").count(), 1);
        assert_eq!(markup.matches("<img ").count(), 2);
    }

    #[test]
    fn test_plain_text_gets_structured() {
        assert_eq!(render("one\n\ntwo"), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_structurer_skipped_when_images_present() {
        let markup = render("text\n\n[http://a.com/x.png]");
        assert!(!markup.contains("<p>"));
        assert!(markup.contains("overview-image"));
    }

    #[test]
    fn test_invalid_token_survives_as_literal() {
        let markup = render("[not-a-url]");
        assert!(markup.contains("[not-a-url]"));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn test_expanded_bypasses_truncation() {
        let raw = "x".repeat(2000);
        let outcome = render_truncated(&raw, 100, true);
        assert!(!outcome.was_truncated);
        assert_eq!(outcome.markup, render(&raw));
    }

    #[test]
    fn test_truncated_flag_set() {
        let raw = "x".repeat(2000);
        let outcome = render_truncated(&raw, 100, false);
        assert!(outcome.was_truncated);
    }

    #[test]
    fn test_render_outcome_serializes() {
        let outcome = render_truncated("hi", 100, false);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"was_truncated\":false"));
        assert!(json.contains("\"markup\""));
    }

    #[test]
    fn test_render_preview_uses_configured_budget() {
        let pipeline =
            OverviewPipeline::new(PipelineConfig::default().with_default_budget(10));
        let outcome = pipeline.render_preview(&"x".repeat(100), false);
        assert!(outcome.was_truncated);
        assert_eq!(outcome.markup.chars().count(), 10);
    }

    #[test]
    fn test_custom_config_flows_through() {
        let pipeline = OverviewPipeline::new(
            PipelineConfig::default().with_strip_paste_artifacts(false),
        );
        assert!(pipeline.render("a\u{200b}b").contains('\u{200b}'));
        assert!(!render("a\u{200b}b").contains('\u{200b}'));
    }
}
