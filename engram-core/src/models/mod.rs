mod conflict;
mod filters;
mod scored;

pub use conflict::{ConflictEdge, ConflictReason};
pub use filters::RecallFilters;
pub use scored::{RecallResult, ScoredMemory};
