//! Shared `Memory` builders for tests across the workspace.

use chrono::{Duration, Utc};
use engram_core::{Category, Memory};

/// Fluent builder with sensible defaults: decaying `Decision` category,
/// created "now", not pinned, not archived, no embedding.
pub struct MemoryBuilder {
    memory: Memory,
}

impl MemoryBuilder {
    pub fn new(project: &str, id: i64, content: &str) -> Self {
        let now = Utc::now();
        Self {
            memory: Memory {
                id,
                project: project.to_string(),
                category: Category::Decision,
                content: content.to_string(),
                rationale: String::new(),
                tags: Vec::new(),
                source_file: None,
                created_at: now,
                updated_at: now,
                affirmed_at: None,
                permanent: None,
                pinned: false,
                archived: false,
                outcome: None,
                worked: None,
                embedding: None,
            },
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.memory.category = category;
        self
    }

    pub fn rationale(mut self, rationale: &str) -> Self {
        self.memory.rationale = rationale.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.memory.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn source_file(mut self, path: &str) -> Self {
        self.memory.source_file = Some(path.to_string());
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.memory.created_at = Utc::now() - Duration::days(days);
        self.memory.updated_at = self.memory.created_at;
        self
    }

    pub fn affirmed_days_ago(mut self, days: i64) -> Self {
        self.memory.affirmed_at = Some(Utc::now() - Duration::days(days));
        self
    }

    pub fn permanent(mut self, permanent: bool) -> Self {
        self.memory.permanent = Some(permanent);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.memory.pinned = true;
        self
    }

    pub fn archived(mut self) -> Self {
        self.memory.archived = true;
        self
    }

    pub fn worked(mut self, worked: bool) -> Self {
        self.memory.worked = Some(worked);
        self
    }

    pub fn outcome(mut self, outcome: &str) -> Self {
        self.memory.outcome = Some(outcome.to_string());
        self
    }

    pub fn embedding(mut self, vector: Vec<f32>) -> Self {
        self.memory.embedding = Some(vector);
        self
    }

    pub fn build(self) -> Memory {
        self.memory
    }
}

/// Shorthand for the common case.
pub fn memory(project: &str, id: i64, content: &str) -> Memory {
    MemoryBuilder::new(project, id, content).build()
}
