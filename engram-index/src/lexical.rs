//! Per-project TF-IDF lexical index.
//!
//! Postings map `term → {doc_id → tf}` plus a per-document term record
//! `doc_id → {term → tf}`. The term record makes removal an exact reversal
//! of the original add, even after the document's content has changed
//! upstream.

use std::collections::HashMap;

use engram_core::constants::TAG_WEIGHT;
use engram_core::Memory;
use tracing::debug;

use crate::tokenizer::tokenize;

/// One scored search candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc_id: i64,
    /// Cosine-normalized TF-IDF relevance, in [0, 1].
    pub score: f64,
}

/// TF-IDF index over one project's live documents.
#[derive(Debug, Default)]
pub struct LexicalIndex {
    /// term → (doc_id → raw term frequency).
    postings: HashMap<String, HashMap<i64, u32>>,
    /// doc_id → (term → raw term frequency), retained for exact removal.
    doc_terms: HashMap<i64, HashMap<String, u32>>,
}

impl LexicalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.doc_terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_terms.is_empty()
    }

    pub fn contains(&self, doc_id: i64) -> bool {
        self.doc_terms.contains_key(&doc_id)
    }

    /// The term-frequency record for a document, if indexed.
    /// Downstream conflict detection uses this for Jaccard overlap.
    pub fn doc_terms(&self, doc_id: i64) -> Option<&HashMap<String, u32>> {
        self.doc_terms.get(&doc_id)
    }

    /// Index a document: `content + rationale + tags`, with tags counted
    /// at `TAG_WEIGHT`× their raw frequency.
    ///
    /// The orchestrator guarantees `remove` before re-add on update; a
    /// double add is an invariant violation, caught in debug builds and
    /// healed by replacement in release builds.
    pub fn add(&mut self, memory: &Memory) {
        debug_assert!(
            !self.contains(memory.id),
            "document {} added twice without remove",
            memory.id
        );
        if self.contains(memory.id) {
            self.remove(memory.id);
        }

        let mut terms: HashMap<String, u32> = HashMap::new();
        for token in tokenize(&memory.content) {
            *terms.entry(token).or_default() += 1;
        }
        for token in tokenize(&memory.rationale) {
            *terms.entry(token).or_default() += 1;
        }
        for tag in &memory.tags {
            for token in tokenize(tag) {
                *terms.entry(token).or_default() += TAG_WEIGHT;
            }
        }

        for (term, tf) in &terms {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(memory.id, *tf);
        }
        debug!(doc_id = memory.id, terms = terms.len(), "indexed document");
        self.doc_terms.insert(memory.id, terms);
    }

    /// Remove a document by exact reversal of its recorded term set.
    /// Unknown ids are a no-op, keeping invalidation idempotent.
    pub fn remove(&mut self, doc_id: i64) {
        let Some(terms) = self.doc_terms.remove(&doc_id) else {
            return;
        };
        for term in terms.keys() {
            if let Some(docs) = self.postings.get_mut(term) {
                docs.remove(&doc_id);
                if docs.is_empty() {
                    self.postings.remove(term);
                }
            } else {
                // A recorded term missing from postings means a missed
                // remove-before-add somewhere upstream.
                debug_assert!(false, "postings underflow for term '{term}'");
            }
        }
        debug!(doc_id, "removed document");
    }

    /// Drop all postings and term records.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.doc_terms.clear();
    }

    /// Smoothed inverse document frequency: `ln((N+1)/(df+1)) + 1`.
    /// Always positive, never divides by zero.
    fn idf(&self, term: &str) -> f64 {
        let n = self.doc_terms.len() as f64;
        let df = self.postings.get(term).map_or(0, HashMap::len) as f64;
        ((n + 1.0) / (df + 1.0)).ln() + 1.0
    }

    /// Cosine-normalized TF-IDF search.
    ///
    /// Scores lie in [0, 1]; candidates below `min_score` are dropped.
    /// Ties break by document id ascending, so results are deterministic.
    pub fn search(&self, query: &str, top_k: usize, min_score: f64) -> Vec<SearchHit> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() || self.doc_terms.is_empty() {
            return Vec::new();
        }

        let mut query_tf: HashMap<&str, u32> = HashMap::new();
        for token in &query_tokens {
            *query_tf.entry(token.as_str()).or_default() += 1;
        }

        // Query weights and magnitude in the shared term-weight space.
        let mut query_norm_sq = 0.0f64;
        let mut query_weights: Vec<(&str, f64, f64)> = Vec::with_capacity(query_tf.len());
        for (term, tf) in &query_tf {
            let idf = self.idf(term);
            let weight = *tf as f64 * idf;
            query_norm_sq += weight * weight;
            query_weights.push((term, weight, idf));
        }
        let query_norm = query_norm_sq.sqrt();
        if query_norm < f64::EPSILON {
            return Vec::new();
        }

        // Dot products against every candidate containing a query term.
        let mut dots: HashMap<i64, f64> = HashMap::new();
        for (term, query_weight, idf) in &query_weights {
            if let Some(docs) = self.postings.get(*term) {
                for (doc_id, tf) in docs {
                    *dots.entry(*doc_id).or_default() += query_weight * (*tf as f64 * idf);
                }
            }
        }

        let mut hits: Vec<SearchHit> = dots
            .into_iter()
            .filter_map(|(doc_id, dot)| {
                let doc_norm = self.doc_norm(doc_id);
                if doc_norm < f64::EPSILON {
                    return None;
                }
                // Clamp: floating error can push cosine a hair past 1.0.
                let score = (dot / (query_norm * doc_norm)).clamp(0.0, 1.0);
                (score >= min_score).then_some(SearchHit { doc_id, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        hits.truncate(top_k);
        hits
    }

    /// L2 magnitude of a document's full TF-IDF weight vector.
    fn doc_norm(&self, doc_id: i64) -> f64 {
        let Some(terms) = self.doc_terms.get(&doc_id) else {
            return 0.0;
        };
        terms
            .iter()
            .map(|(term, tf)| {
                let weight = *tf as f64 * self.idf(term);
                weight * weight
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Snapshot of postings as (term, doc_id, tf) triples, sorted.
    /// Test hook for verifying add/remove/rebuild equivalence.
    pub fn postings_snapshot(&self) -> Vec<(String, i64, u32)> {
        let mut snapshot: Vec<(String, i64, u32)> = self
            .postings
            .iter()
            .flat_map(|(term, docs)| {
                docs.iter()
                    .map(move |(doc_id, tf)| (term.clone(), *doc_id, *tf))
            })
            .collect();
        snapshot.sort();
        snapshot
    }
}
