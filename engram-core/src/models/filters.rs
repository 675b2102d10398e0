use serde::{Deserialize, Serialize};

use crate::memory::{Category, Memory};

/// Recall filters. All filters fold into the cache key via [`signature`].
///
/// [`signature`]: RecallFilters::signature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallFilters {
    /// Restrict to these categories. Empty means all categories.
    pub categories: Vec<Category>,
    /// Require at least one of these tags. Empty means no tag filter.
    pub tags: Vec<String>,
    /// Include archived memories. Off by default.
    pub include_archived: bool,
    /// Exclude recorded failed approaches (`worked == false`).
    pub exclude_failed: bool,
}

impl RecallFilters {
    /// Whether a memory passes every filter.
    pub fn matches(&self, memory: &Memory) -> bool {
        if memory.archived && !self.include_archived {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&memory.category) {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| memory.tags.contains(t)) {
            return false;
        }
        if self.exclude_failed && memory.is_failed_approach() {
            return false;
        }
        true
    }

    /// Deterministic encoding of the filter set, used in cache keys.
    ///
    /// Categories and tags are sorted first so logically equal filters
    /// hash identically regardless of construction order.
    pub fn signature(&self) -> String {
        let mut categories: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags.dedup();

        let mut hasher = blake3::Hasher::new();
        hasher.update(categories.join(",").as_bytes());
        hasher.update(b"|");
        hasher.update(tags.join(",").as_bytes());
        hasher.update(b"|");
        hasher.update(&[self.include_archived as u8, self.exclude_failed as u8]);
        hasher.finalize().to_hex().to_string()
    }
}
