//! Fixed English stop-word set.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words carrying no retrieval signal, dropped by the tokenizer.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "did", "do",
        "does", "for", "from", "had", "has", "have", "he", "her", "his", "how", "if", "in",
        "into", "is", "it", "its", "of", "on", "or", "our", "she", "so", "that", "the",
        "their", "them", "then", "there", "these", "they", "this", "those", "to", "was",
        "we", "were", "what", "when", "where", "which", "while", "who", "why", "will",
        "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Whether a token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
