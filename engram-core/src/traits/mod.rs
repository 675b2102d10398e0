mod embedding;
mod store;

pub use embedding::EmbeddingProvider;
pub use store::MemoryStore;
