use serde::{Deserialize, Serialize};

use super::conflict::ConflictEdge;

/// One ranked recall hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMemory {
    pub memory_id: i64,
    /// Final score after decay and fusion, in [0, 1].
    pub score: f64,
    /// Raw lexical (TF-IDF cosine) score, in [0, 1].
    pub lexical_score: f64,
    /// Decay multiplier applied, in (0, 1].
    pub decay_weight: f64,
    /// Whether a stored embedding contributed to the final score.
    pub vector_used: bool,
}

/// The full recall response: ranked hits plus conflict annotations over
/// the returned set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecallResult {
    pub results: Vec<ScoredMemory>,
    pub conflicts: Vec<ConflictEdge>,
}

impl RecallResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
