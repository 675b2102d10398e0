//! # engram-retrieval
//!
//! The relevance engine: serves `recall` queries through an
//! invalidation-aware result cache, fusing lexical relevance with
//! optional vector similarity, weighting by time decay, and annotating
//! contradictory results.

pub mod cache;
pub mod conflict;
pub mod engine;
pub mod fusion;
pub mod observe;

pub use cache::{CacheKey, ResultCache};
pub use conflict::ConflictDetector;
pub use engine::RelevanceEngine;
