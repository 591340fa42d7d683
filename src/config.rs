//! Pipeline configuration types.
//!
//! A single `PipelineConfig` covers both historical variants of the
//! pipeline: the study editor ran one copy that scrubbed platform paste
//! artifacts and one copy that did not. That difference is now the
//! `strip_paste_artifacts` flag.

use serde::{Deserialize, Serialize};

/// Default visible-character budget for a collapsed preview.
pub const DEFAULT_TRUNCATION_BUDGET: usize = 750;

/// Configuration for the overview content pipeline.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```
/// use serp_overview::config::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_strip_paste_artifacts(false)
///     .with_default_budget(500);
/// assert_eq!(config.default_budget, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Remove platform paste artifacts (fragment comments, head tags,
    /// zero-width characters) during sanitization (default: true)
    pub strip_paste_artifacts: bool,
    /// Visible-character budget used when the caller does not pass one
    pub default_budget: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strip_paste_artifacts: true,
            default_budget: DEFAULT_TRUNCATION_BUDGET,
        }
    }
}

impl PipelineConfig {
    /// Create a new PipelineConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether platform paste artifacts are stripped.
    pub fn with_strip_paste_artifacts(mut self, strip: bool) -> Self {
        self.strip_paste_artifacts = strip;
        self
    }

    /// Set the default truncation budget.
    pub fn with_default_budget(mut self, budget: usize) -> Self {
        self.default_budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.strip_paste_artifacts);
        assert_eq!(config.default_budget, DEFAULT_TRUNCATION_BUDGET);
    }

    #[test]
    fn test_builder_methods() {
        let config = PipelineConfig::new()
            .with_strip_paste_artifacts(false)
            .with_default_budget(300);
        assert!(!config.strip_paste_artifacts);
        assert_eq!(config.default_budget, 300);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PipelineConfig::default().with_default_budget(800);
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
