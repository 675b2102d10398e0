use serde::{Deserialize, Serialize};

/// Memory category. Determines default permanence: patterns and warnings
/// stay relevant indefinitely, decisions and learnings fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Decision,
    Pattern,
    Warning,
    Learning,
}

impl Category {
    /// Whether this category is permanent by default (no time decay).
    pub fn default_permanent(self) -> bool {
        matches!(self, Category::Pattern | Category::Warning)
    }

    /// Stable lowercase name, used in filter signatures.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Decision => "decision",
            Category::Pattern => "pattern",
            Category::Warning => "warning",
            Category::Learning => "learning",
        }
    }
}
