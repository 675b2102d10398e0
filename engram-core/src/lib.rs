//! # engram-core
//!
//! Foundation crate for the Engram relevance engine.
//! Defines the memory record, error taxonomy, configuration, collaborator
//! traits, and result models. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngramConfig;
pub use errors::{EngramError, EngramResult};
pub use memory::{Category, Memory};
pub use models::{ConflictEdge, ConflictReason, RecallFilters, RecallResult, ScoredMemory};
