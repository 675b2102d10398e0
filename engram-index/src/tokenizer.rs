//! Text normalization: lowercase, split on non-alphanumeric boundaries,
//! drop stop words and short tokens.

use std::collections::HashMap;

use engram_core::constants::MIN_TOKEN_LEN;

use crate::stopwords::is_stop_word;

/// Tokenize raw text into normalized terms.
///
/// Order is irrelevant for TF-IDF but preserved so keyword extraction
/// stays deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

/// Top-N tokens by frequency, alphabetical tie-break for determinism.
pub fn top_keywords(text: &str, n: usize) -> Vec<String> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_default() += 1;
    }
    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(n).map(|(t, _)| t).collect()
}
