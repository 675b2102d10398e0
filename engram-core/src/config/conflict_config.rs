use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Conflict-detection configuration.
///
/// The cue-word lists are a tunable heuristic for English text with
/// explicit negation markers, not a load-bearing contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictConfig {
    /// Minimum Jaccard token overlap before a pair is considered at all.
    pub overlap_threshold: f64,
    /// Words signalling "warns against".
    pub negative_cues: Vec<String>,
    /// Words signalling "recommends".
    pub positive_cues: Vec<String>,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            overlap_threshold: defaults::DEFAULT_OVERLAP_THRESHOLD,
            negative_cues: defaults::DEFAULT_NEGATIVE_CUES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            positive_cues: defaults::DEFAULT_POSITIVE_CUES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ConflictConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.overlap_threshold) || self.overlap_threshold.is_nan() {
            return Err(ConfigError::OverlapThresholdOutOfRange {
                value: self.overlap_threshold,
            });
        }
        Ok(())
    }
}
