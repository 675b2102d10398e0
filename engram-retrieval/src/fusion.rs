//! Lexical/vector score fusion.
//!
//! Fusion is best-effort and per-document: a missing vector means the
//! fused score equals the lexical score. Documents are never dropped
//! for lacking an embedding.

/// Cosine similarity between two vectors.
/// Returns 0.0 for zero-length, mismatched, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Blend a lexical score with an optional vector similarity:
/// `(1-w)·lexical + w·vector`.
///
/// Returns the fused score and whether a vector contributed. Negative
/// cosine similarity is floored at zero so the fused score stays in
/// [0, 1].
pub fn fuse(lexical: f64, vector: Option<f64>, weight: f64) -> (f64, bool) {
    match vector {
        Some(similarity) => {
            let similarity = similarity.max(0.0);
            ((1.0 - weight) * lexical + weight * similarity, true)
        }
        None => (lexical, false),
    }
}
