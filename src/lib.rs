//! serp-overview - Rich overview content pipeline for a mock search-results page
//!
//! Turns arbitrary pasted/typed rich content into sanitized renderable
//! markup, expands an informal image-grouping notation into scrollable
//! image rows, and produces length-bounded previews that keep image
//! blocks intact and never cut inside a tag.

pub mod affordance;
pub mod cache;
pub mod cli;
pub mod config;
pub mod entities;
pub mod error;
pub mod markup;
pub mod pipeline;
pub mod sanitize;
pub mod segment;
pub mod structure;
pub mod truncate;

pub use config::PipelineConfig;
pub use error::{OverviewError, OverviewResult};
pub use pipeline::{render, render_truncated, OverviewPipeline, RenderOutcome};
