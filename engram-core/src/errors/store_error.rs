/// Durable-store collaborator errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document {id} not found in project '{project}'")]
    NotFound { project: String, id: i64 },

    #[error("store backend failed: {reason}")]
    Backend { reason: String },
}
