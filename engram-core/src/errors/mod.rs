//! Error taxonomy for the Engram workspace.
//!
//! Each subsystem defines its own `thiserror` enum; `EngramError`
//! aggregates them so cross-crate call chains can use one `?`-friendly
//! result type.

mod config_error;
mod embedding_error;
mod store_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use store_error::StoreError;

/// Workspace-level error type.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Workspace-level result alias.
pub type EngramResult<T> = Result<T, EngramError>;
