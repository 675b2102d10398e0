//! RelevanceEngine: owns per-project index state and the result cache,
//! and orchestrates the recall pipeline:
//!
//! cache probe → lexical search (with re-ranking headroom) → filters →
//! decay → optional vector fusion → rank → diversity cap → truncate →
//! conflict detection → cache → return.

use std::collections::HashMap;
use std::sync::{Arc, Once, PoisonError, RwLock};
use std::time::Instant;

use chrono::Utc;
use dashmap::DashMap;
use engram_core::traits::{EmbeddingProvider, MemoryStore};
use engram_core::{
    EngramConfig, EngramResult, Memory, RecallFilters, RecallResult, ScoredMemory,
};
use engram_decay::DecayScorer;
use engram_index::LexicalIndex;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ResultCache};
use crate::conflict::ConflictDetector;
use crate::fusion;
use crate::observe;

/// Logged once per process: embedding unavailability is a degraded mode,
/// not an error.
static EMBEDDING_FALLBACK_WARNING: Once = Once::new();

/// All mutable state for one project, guarded by one read-write lock.
/// Readers run concurrently; any mutation is exclusive.
struct ProjectState {
    index: LexicalIndex,
    docs: HashMap<i64, Memory>,
}

impl ProjectState {
    fn new() -> Self {
        Self {
            index: LexicalIndex::new(),
            docs: HashMap::new(),
        }
    }
}

/// The relevance engine. One instance serves many projects; state and
/// locking are per project, so unrelated projects never serialize
/// against each other.
pub struct RelevanceEngine {
    config: EngramConfig,
    scorer: DecayScorer,
    detector: ConflictDetector,
    cache: ResultCache,
    projects: DashMap<String, Arc<RwLock<ProjectState>>>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
}

impl RelevanceEngine {
    /// Build an engine. Validates the config eagerly; invalid
    /// configuration is fatal at startup, never clamped.
    pub fn new(config: EngramConfig) -> EngramResult<Self> {
        config.validate()?;
        Ok(Self {
            scorer: DecayScorer::new(&config.decay),
            detector: ConflictDetector::new(&config.conflict),
            cache: ResultCache::new(&config.cache),
            projects: DashMap::new(),
            embedder: None,
            config,
        })
    }

    /// Attach an embedding collaborator. Without one the engine is
    /// lexical-only.
    pub fn with_embedder(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    fn project_state(&self, project: &str) -> Arc<RwLock<ProjectState>> {
        self.projects
            .entry(project.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(ProjectState::new())))
            .clone()
    }

    /// Index (or re-index) one document: remove-then-add under the
    /// project write lock. The cache is invalidated before this returns,
    /// so a recall issued afterwards sees the new state.
    pub fn index(&self, memory: &Memory) {
        observe::timed("index", || {
            let state = self.project_state(&memory.project);
            {
                let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
                guard.index.remove(memory.id);
                guard.index.add(memory);
                guard.docs.insert(memory.id, memory.clone());
            }
            self.cache.invalidate(&memory.project);
            debug!(project = %memory.project, id = memory.id, "document indexed");
        })
    }

    /// Remove a document. Unknown ids are a no-op, keeping removal
    /// idempotent; the cache is still invalidated either way.
    pub fn remove(&self, project: &str, id: i64) {
        observe::timed("remove", || {
            if let Some(state) = self.projects.get(project).map(|s| Arc::clone(s.value())) {
                let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
                guard.index.remove(id);
                guard.docs.remove(&id);
            }
            self.cache.invalidate(project);
            debug!(project, id, "document removed");
        })
    }

    /// Drop all cached results for a project.
    pub fn invalidate(&self, project: &str) {
        self.cache.invalidate(project);
    }

    /// Recovery path: clear the project's postings and re-add every
    /// document from the durable store, restoring exact equivalence to
    /// incremental maintenance. Returns the number of documents indexed.
    pub fn rebuild(
        &self,
        project: &str,
        store: &dyn MemoryStore,
        include_archived: bool,
    ) -> EngramResult<usize> {
        // Store access happens outside the project lock.
        let memories = store.list_memories(project, include_archived)?;
        let state = self.project_state(project);
        {
            let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
            guard.index.clear();
            guard.docs.clear();
            for memory in &memories {
                guard.index.add(memory);
                guard.docs.insert(memory.id, memory.clone());
            }
        }
        self.cache.invalidate(project);
        info!(project, documents = memories.len(), "index rebuilt");
        Ok(memories.len())
    }

    /// Tear down a project's index and cached results. Lifecycle hook for
    /// project eviction.
    pub fn evict_project(&self, project: &str) {
        self.projects.remove(project);
        self.cache.remove(project);
        debug!(project, "project evicted");
    }

    /// Serve a recall query. Never errors: an empty corpus, an unknown
    /// project, or zero matches all yield an empty result.
    ///
    /// `deadline` bounds the whole call; once exceeded, vector fusion is
    /// skipped (vectors "unavailable for this call") while the lexical
    /// pipeline still completes.
    pub fn recall(
        &self,
        project: &str,
        query: &str,
        top_k: usize,
        filters: &RecallFilters,
        deadline: Option<Instant>,
    ) -> RecallResult {
        observe::timed("recall", || {
            self.recall_inner(project, query, top_k, filters, deadline)
        })
    }

    fn recall_inner(
        &self,
        project: &str,
        query: &str,
        top_k: usize,
        filters: &RecallFilters,
        deadline: Option<Instant>,
    ) -> RecallResult {
        let key = CacheKey::new(project, query, filters, top_k);
        if let Some(hit) = self.cache.get(&key) {
            debug!(project, "recall served from cache");
            return (*hit).clone();
        }

        let Some(state) = self.projects.get(project).map(|s| Arc::clone(s.value())) else {
            return RecallResult::default();
        };

        // Embedding inference is an external collaborator; it runs before
        // the project lock is taken so it never blocks index mutations.
        let query_vector = self.query_embedding(query, deadline);

        let guard = state.read().unwrap_or_else(PoisonError::into_inner);

        // Over-fetch for re-ranking headroom: decay and fusion can
        // reorder well beyond the final cut.
        let fetch = top_k.saturating_mul(self.config.recall.expansion_factor);
        let hits = guard
            .index
            .search(query, fetch, self.config.recall.min_score);
        debug!(project, candidates = hits.len(), "lexical search complete");

        let now = Utc::now();

        let mut candidates: Vec<ScoredMemory> = Vec::with_capacity(hits.len());
        for hit in hits {
            let Some(memory) = guard.docs.get(&hit.doc_id) else {
                // Index and document map must agree on the id universe.
                debug_assert!(false, "indexed document {} missing from docs", hit.doc_id);
                continue;
            };
            if !filters.matches(memory) {
                continue;
            }

            let decay_weight = self.scorer.weight(memory, now);
            let vector_similarity = match (&query_vector, &memory.embedding) {
                (Some(q), Some(d)) if !deadline_exceeded(deadline) => {
                    Some(fusion::cosine_similarity(q, d))
                }
                // Per-document fallback: a missing vector never drops
                // the document.
                _ => None,
            };
            let (fused, vector_used) =
                fusion::fuse(hit.score, vector_similarity, self.config.fusion.weight);

            candidates.push(ScoredMemory {
                memory_id: hit.doc_id,
                score: fused * decay_weight,
                lexical_score: hit.score,
                decay_weight,
                vector_used,
            });
        }

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.memory_id.cmp(&b.memory_id))
        });

        let results = self.apply_diversity_cap(&guard, candidates, top_k);

        // Conflict detection over the final set only.
        let pairs: Vec<(&Memory, &HashMap<String, u32>)> = results
            .iter()
            .filter_map(|r| {
                let memory = guard.docs.get(&r.memory_id)?;
                let terms = guard.index.doc_terms(r.memory_id)?;
                Some((memory, terms))
            })
            .collect();
        let conflicts = self.detector.detect(&pairs);

        let result = RecallResult { results, conflicts };
        // Publish while still holding the read lock: any writer's
        // invalidate must wait for the guard, so it is ordered after this
        // insert and a post-mutation recall can never hit a stale entry.
        self.cache.set(key, Arc::new(result.clone()));
        drop(guard);

        info!(
            project,
            results = result.results.len(),
            conflicts = result.conflicts.len(),
            "recall complete"
        );
        result
    }

    /// Cap how many results may share one source file, so a single file
    /// cannot dominate the result set. Documents without a source file
    /// are uncapped.
    fn apply_diversity_cap(
        &self,
        state: &ProjectState,
        ranked: Vec<ScoredMemory>,
        top_k: usize,
    ) -> Vec<ScoredMemory> {
        let cap = self.config.recall.per_file_cap;
        let mut per_file: HashMap<String, usize> = HashMap::new();
        let mut kept = Vec::with_capacity(top_k.min(ranked.len()));
        for candidate in ranked {
            if kept.len() == top_k {
                break;
            }
            let file = state
                .docs
                .get(&candidate.memory_id)
                .and_then(|m| m.source_file.clone());
            if let Some(file) = file {
                let count = per_file.entry(file).or_default();
                if *count == cap {
                    continue;
                }
                *count += 1;
            }
            kept.push(candidate);
        }
        kept
    }

    /// Embed the query, best-effort. Any failure, unavailability, or an
    /// exceeded deadline degrades to lexical-only scoring for this call.
    fn query_embedding(&self, query: &str, deadline: Option<Instant>) -> Option<Vec<f32>> {
        if !self.config.fusion.enabled {
            return None;
        }
        let embedder = self.embedder.as_ref()?;
        if deadline_exceeded(deadline) {
            debug!("deadline exceeded before embedding; lexical-only for this call");
            return None;
        }
        if !embedder.is_available() {
            warn_embedding_fallback(embedder.name());
            return None;
        }
        match embedder.embed(query) {
            // Inference may have blocked past the deadline; a late vector
            // is still discarded.
            Ok(vector) if !deadline_exceeded(deadline) => Some(vector),
            Ok(_) => {
                debug!("embedding arrived after deadline; discarded");
                None
            }
            Err(error) => {
                debug!(%error, "query embedding failed");
                warn_embedding_fallback(embedder.name());
                None
            }
        }
    }
}

fn deadline_exceeded(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

fn warn_embedding_fallback(provider: &str) {
    EMBEDDING_FALLBACK_WARNING.call_once(|| {
        warn!(
            provider,
            "embeddings unavailable; falling back to lexical-only scoring"
        );
    });
}
