//! Caller-owned compilation cache.
//!
//! The cache is an explicit object the orchestrator constructs and owns,
//! never a process-wide singleton: tests (and concurrent request handlers)
//! build fresh instances with whatever capacity they want. Entries are
//! keyed by the raw request's canonical JSON, so two requests compile to
//! the same triple exactly when they serialize identically.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::pipeline::{compile, PipelineError};
use crate::types::{CompiledPrompt, RawPromptRequest};

/// Capacity used by [`PromptCache::with_default_capacity`].
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Capacity-bounded LRU cache of compiled prompts.
pub struct PromptCache {
    entries: LruCache<String, CompiledPrompt>,
}

impl PromptCache {
    /// Create a cache bounded to `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Create a cache with [`DEFAULT_CACHE_CAPACITY`] entries.
    pub fn with_default_capacity() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }

    /// Compile a raw request, reusing a cached triple when the same request
    /// was compiled before.
    ///
    /// Structural errors are never cached; a request that cannot be keyed
    /// (canonical serialization failed) is compiled without caching.
    ///
    /// # Errors
    ///
    /// Returns the same [`PipelineError`] as [`compile`].
    pub fn get_or_compile(
        &mut self,
        raw: &RawPromptRequest,
    ) -> Result<CompiledPrompt, PipelineError> {
        let Ok(key) = serde_json::to_string(raw) else {
            return compile(raw);
        };

        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }

        let compiled = compile(raw)?;
        self.entries.put(key, compiled.clone());
        Ok(compiled)
    }

    /// Number of cached triples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached triples.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
