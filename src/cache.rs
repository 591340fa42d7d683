//! Memoization cache for pipeline rendering.
//!
//! Caches rendered output keyed by a hash of the raw content plus the
//! truncation budget and expanded/collapsed state. The host page re-runs
//! the pipeline whenever the overview re-renders; by caching, unchanged
//! content never pays for re-sanitizing and re-tokenizing. Correctness
//! does not depend on the cache — the pipeline is pure — it only saves
//! work.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::config::PipelineConfig;
use crate::pipeline::{OverviewPipeline, RenderOutcome};

/// Maximum number of entries in the render cache before eviction.
pub const RENDER_CACHE_MAX_ENTRIES: usize = 200;

/// Memoization cache in front of an [`OverviewPipeline`].
pub struct RenderCache {
    pipeline: OverviewPipeline,
    /// Cache entries keyed by (content, budget, expanded) hash
    entries: HashMap<u64, RenderOutcome>,
    /// Insertion order for LRU-style eviction (oldest first)
    insertion_order: Vec<u64>,
    /// Statistics: cache hits
    hits: u64,
    /// Statistics: cache misses
    misses: u64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl RenderCache {
    /// Create an empty cache around a pipeline with the given config.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            pipeline: OverviewPipeline::new(config),
            entries: HashMap::new(),
            insertion_order: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Compute the cache key for one invocation.
    fn hash_key(raw: &str, budget: usize, expanded: bool) -> u64 {
        let mut hasher = DefaultHasher::new();
        raw.hash(&mut hasher);
        budget.hash(&mut hasher);
        expanded.hash(&mut hasher);
        hasher.finish()
    }

    /// Truncating render with caching.
    ///
    /// A cached result is returned verbatim, so repeat renders of the
    /// same content keep their container ids stable for the lifetime of
    /// the entry.
    pub fn render_truncated(&mut self, raw: &str, budget: usize, expanded: bool) -> RenderOutcome {
        let key = Self::hash_key(raw, budget, expanded);

        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            tracing::trace!(key, "render cache hit");
            return cached.clone();
        }

        self.misses += 1;
        let outcome = self.pipeline.render_truncated(raw, budget, expanded);

        while self.entries.len() >= RENDER_CACHE_MAX_ENTRIES && !self.insertion_order.is_empty() {
            let oldest = self.insertion_order.remove(0);
            self.entries.remove(&oldest);
        }

        self.entries.insert(key, outcome.clone());
        self.insertion_order.push(key);

        outcome
    }

    /// Get cache statistics (hits, misses).
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries. Stats are kept for debugging.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    /// Invalidate one (content, budget, expanded) entry.
    pub fn invalidate(&mut self, raw: &str, budget: usize, expanded: bool) {
        let key = Self::hash_key(raw, budget, expanded);
        if self.entries.remove(&key).is_some() {
            self.insertion_order.retain(|&k| k != key);
        }
    }
}
