/// Embedding collaborator errors.
///
/// Unavailability is a recognized degraded mode: the engine falls back to
/// lexical-only scoring instead of failing the query.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding failed: {reason}")]
    Failed { reason: String },
}
