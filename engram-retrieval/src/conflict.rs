//! Conflict detection over a recalled candidate set.
//!
//! Two memories conflict when their token sets overlap heavily (Jaccard)
//! AND either one is a recorded failed approach in the same category, or
//! they carry opposite polarity cue words over the shared topic
//! ("use X" vs "never X"). The cue lists are a tunable heuristic for
//! English text with explicit negation markers, not a contract.

use std::collections::{HashMap, HashSet};

use engram_core::config::ConflictConfig;
use engram_core::{ConflictEdge, ConflictReason, Memory};
use regex::Regex;
use tracing::debug;

/// Guidance polarity of a memory's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
    Neutral,
}

pub struct ConflictDetector {
    overlap_threshold: f64,
    negative_re: Option<Regex>,
    positive_re: Option<Regex>,
}

impl ConflictDetector {
    /// Build from a validated [`ConflictConfig`]. Empty cue lists disable
    /// polarity detection; the failed-approach rule still applies.
    pub fn new(config: &ConflictConfig) -> Self {
        Self {
            overlap_threshold: config.overlap_threshold,
            negative_re: cue_regex(&config.negative_cues),
            positive_re: cue_regex(&config.positive_cues),
        }
    }

    /// Detect conflicts among candidates. Pairs are visited with `i < j`
    /// only, so output is irreflexive and symmetric by construction.
    ///
    /// Each candidate is a memory plus its indexed term record.
    pub fn detect(&self, candidates: &[(&Memory, &HashMap<String, u32>)]) -> Vec<ConflictEdge> {
        let mut edges = Vec::new();
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let (a, a_terms) = candidates[i];
                let (b, b_terms) = candidates[j];
                if let Some(edge) = self.detect_pair(a, a_terms, b, b_terms) {
                    edges.push(edge);
                }
            }
        }
        if !edges.is_empty() {
            debug!(conflicts = edges.len(), "conflicts detected");
        }
        edges
    }

    /// Check one pair. Symmetric: `detect_pair(a, b)` and
    /// `detect_pair(b, a)` report the same canonical edge.
    pub fn detect_pair(
        &self,
        a: &Memory,
        a_terms: &HashMap<String, u32>,
        b: &Memory,
        b_terms: &HashMap<String, u32>,
    ) -> Option<ConflictEdge> {
        if a.id == b.id {
            return None;
        }
        let overlap = jaccard(a_terms, b_terms);
        if overlap < self.overlap_threshold {
            return None;
        }

        // Rule 1: same category, exactly one is a recorded failed approach.
        if a.category == b.category && (a.is_failed_approach() != b.is_failed_approach()) {
            let (ok, failed) = if a.is_failed_approach() { (b, a) } else { (a, b) };
            return Some(ConflictEdge::new(
                a.id,
                b.id,
                overlap,
                ConflictReason::FailedApproach,
                format!(
                    "'{}' overlaps a recorded failed approach '{}'",
                    preview(&ok.content),
                    preview(&failed.content)
                ),
            ));
        }

        // Rule 2: opposite polarity cue words over the shared topic.
        let a_polarity = self.polarity(a);
        let b_polarity = self.polarity(b);
        if matches!(
            (a_polarity, b_polarity),
            (Polarity::Positive, Polarity::Negative) | (Polarity::Negative, Polarity::Positive)
        ) {
            let (recommends, warns) = if a_polarity == Polarity::Positive {
                (a, b)
            } else {
                (b, a)
            };
            return Some(ConflictEdge::new(
                a.id,
                b.id,
                overlap,
                ConflictReason::OpposingGuidance,
                format!(
                    "'{}' recommends what '{}' warns against",
                    preview(&recommends.content),
                    preview(&warns.content)
                ),
            ));
        }

        None
    }

    /// Polarity of `content + rationale`. Negation cues dominate: text
    /// like "never use X" reads as a warning despite the "use".
    fn polarity(&self, memory: &Memory) -> Polarity {
        let text = format!("{} {}", memory.content, memory.rationale);
        if self.negative_re.as_ref().is_some_and(|re| re.is_match(&text)) {
            Polarity::Negative
        } else if self.positive_re.as_ref().is_some_and(|re| re.is_match(&text)) {
            Polarity::Positive
        } else {
            Polarity::Neutral
        }
    }
}

/// Case-insensitive whole-word alternation over the cue list.
fn cue_regex(cues: &[String]) -> Option<Regex> {
    if cues.is_empty() {
        return None;
    }
    let alternation = cues
        .iter()
        .map(|c| regex::escape(c))
        .collect::<Vec<_>>()
        .join("|");
    // Cue lists come from config defaults or a validated config file;
    // escaped alternation over word characters always compiles.
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
}

/// Jaccard similarity over the token sets of two term records.
fn jaccard(a: &HashMap<String, u32>, b: &HashMap<String, u32>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let a_set: HashSet<&str> = a.keys().map(String::as_str).collect();
    let b_set: HashSet<&str> = b.keys().map(String::as_str).collect();
    let intersection = a_set.intersection(&b_set).count();
    let union = a_set.union(&b_set).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(48)
        .map_or(text.len(), |(byte, _)| byte);
    text[..end].trim_end()
}
