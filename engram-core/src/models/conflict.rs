use serde::{Deserialize, Serialize};

/// Why two memories were flagged as conflicting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictReason {
    /// Same category, heavy overlap, and one is a recorded failed approach.
    FailedApproach,
    /// Shared keywords with opposite polarity cue words
    /// ("use X" vs "never X").
    OpposingGuidance,
}

/// A detected conflict between two memories.
///
/// Derived during recall, never persisted. Canonical ordering: `a < b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictEdge {
    pub a: i64,
    pub b: i64,
    /// Jaccard token overlap between the two memories.
    pub overlap: f64,
    pub reason: ConflictReason,
    /// Human-readable description of the conflict.
    pub description: String,
}

impl ConflictEdge {
    /// Build an edge with canonical id ordering, so detection is symmetric
    /// regardless of argument order.
    pub fn new(a: i64, b: i64, overlap: f64, reason: ConflictReason, description: String) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Self {
            a,
            b,
            overlap,
            reason,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_canonicalizes_id_order() {
        let e = ConflictEdge::new(7, 3, 0.5, ConflictReason::FailedApproach, String::new());
        assert_eq!((e.a, e.b), (3, 7));
    }
}
