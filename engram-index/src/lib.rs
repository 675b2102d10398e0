//! # engram-index
//!
//! Text normalization and the per-project TF-IDF lexical index.
//! Pure in-memory postings math; no I/O, no locking (the engine
//! serializes access per project).

pub mod lexical;
pub mod stopwords;
pub mod tokenizer;

pub use lexical::{LexicalIndex, SearchHit};
pub use tokenizer::{tokenize, top_keywords};
