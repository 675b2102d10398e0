use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// The indexable unit: one stored memory.
///
/// Identifiers are assigned by the durable store and are stable and unique
/// within a project. Documents never cross project partitions implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Stable identifier, unique within `project`, immutable once assigned.
    pub id: i64,
    /// Owning project / partition key.
    pub project: String,
    /// Category; determines default permanence unless overridden.
    pub category: Category,
    /// Body text, tokenized for indexing.
    pub content: String,
    /// Why this memory exists. Also tokenized.
    #[serde(default)]
    pub rationale: String,
    /// Curated labels, indexed with boosted weight.
    #[serde(default)]
    pub tags: Vec<String>,
    /// File this memory is about, if any. Grouping key for the recall
    /// diversity cap.
    #[serde(default)]
    pub source_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Most recent re-affirmation, if the memory was re-affirmed.
    /// The decay anchor is this timestamp when present, else `created_at`.
    #[serde(default)]
    pub affirmed_at: Option<DateTime<Utc>>,
    /// Explicit permanence override. `None` falls back to the category default.
    #[serde(default)]
    pub permanent: Option<bool>,
    /// Pinned memories are treated as permanent and never pruned.
    #[serde(default)]
    pub pinned: bool,
    /// Archived memories are excluded from recall by default.
    #[serde(default)]
    pub archived: bool,
    /// Post-hoc outcome note.
    #[serde(default)]
    pub outcome: Option<String>,
    /// Post-hoc verdict. `Some(false)` marks a failed approach.
    #[serde(default)]
    pub worked: Option<bool>,
    /// Embedding vector, present only when a provider was available at
    /// index time.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl Memory {
    /// Whether this memory is exempt from time decay: pinned, explicitly
    /// overridden, or in a permanent-by-default category.
    pub fn is_permanent(&self) -> bool {
        self.pinned || self.permanent.unwrap_or(self.category.default_permanent())
    }

    /// The single effective timestamp age is measured from for decay.
    pub fn decay_anchor(&self) -> DateTime<Utc> {
        self.affirmed_at.unwrap_or(self.created_at)
    }

    /// Whether this memory records an approach that did not work.
    pub fn is_failed_approach(&self) -> bool {
        self.worked == Some(false)
    }

    /// Structural comparison: same content, rationale, tags, and flags.
    ///
    /// Distinct from `PartialEq`, which only compares identity.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.content == other.content
            && self.rationale == other.rationale
            && self.tags == other.tags
            && self.pinned == other.pinned
            && self.archived == other.archived
            && self.worked == other.worked
    }
}

/// Identity equality: two memories are equal if they have the same project
/// and id. For structural comparison use [`Memory::content_eq`].
impl PartialEq for Memory {
    fn eq(&self, other: &Self) -> bool {
        self.project == other.project && self.id == other.id
    }
}

impl Eq for Memory {}
