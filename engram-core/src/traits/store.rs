use crate::errors::EngramResult;
use crate::memory::Memory;

/// The durable record store, as seen by the engine.
///
/// Persistence format and schema evolution are the store's concern;
/// the engine only reads from it during rebuilds.
pub trait MemoryStore: Send + Sync {
    /// All live documents for a project. Archived documents are included
    /// only when `include_archived` is set.
    fn list_memories(&self, project: &str, include_archived: bool) -> EngramResult<Vec<Memory>>;

    /// Fetch one document. `Ok(None)` when the id is unknown.
    fn get_memory(&self, project: &str, id: i64) -> EngramResult<Option<Memory>>;
}
