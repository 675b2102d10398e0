//! Invalidation-aware result cache.
//!
//! One bounded, TTL-expiring moka cache per project, created on demand.
//! `invalidate(project)` clears exactly that project's entries, so
//! unrelated projects keep their cached results. Capacity and TTL apply
//! per project cache.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use engram_core::config::CacheConfig;
use engram_core::{RecallFilters, RecallResult};
use engram_index::tokenize;
use moka::sync::Cache;

/// Cache key: project, normalized query, filter signature, and top_k.
/// All query parameters fold into the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    project: String,
    normalized_query: String,
    filter_signature: String,
    top_k: usize,
}

impl CacheKey {
    pub fn new(project: &str, query: &str, filters: &RecallFilters, top_k: usize) -> Self {
        Self {
            project: project.to_string(),
            normalized_query: tokenize(query).join(" "),
            filter_signature: filters.signature(),
            top_k,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

/// Bounded, time-expiring map from cache key to ranked result set.
pub struct ResultCache {
    caches: DashMap<String, Cache<CacheKey, Arc<RecallResult>>>,
    max_entries: u64,
    ttl: Duration,
}

impl ResultCache {
    /// Build from a validated [`CacheConfig`].
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            caches: DashMap::new(),
            max_entries: config.max_entries,
            ttl: Duration::from_secs(config.ttl_secs),
        }
    }

    /// Cached result set, or `None` on absence or TTL expiry.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<RecallResult>> {
        self.caches.get(key.project()).and_then(|c| c.get(key))
    }

    /// Store a result set, evicting when the project cache is at capacity.
    pub fn set(&self, key: CacheKey, value: Arc<RecallResult>) {
        let cache = self
            .caches
            .entry(key.project().to_string())
            .or_insert_with(|| {
                Cache::builder()
                    .max_capacity(self.max_entries)
                    .time_to_live(self.ttl)
                    .build()
            })
            .clone();
        cache.insert(key, value);
    }

    /// Drop every entry for one project. Called before any mutating
    /// operation completes, so a recall issued after the mutation returns
    /// never sees pre-mutation results.
    pub fn invalidate(&self, project: &str) {
        if let Some(cache) = self.caches.get(project) {
            cache.invalidate_all();
        }
    }

    /// Drop the project's cache entirely, entries and the per-project
    /// moka instance both. Used when a project is evicted, so the
    /// registry does not accumulate empty caches.
    pub fn remove(&self, project: &str) {
        self.caches.remove(project);
    }

    /// Full reset across all projects.
    pub fn clear(&self) {
        self.caches.clear();
    }
}
