use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Recall pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Lexical search fetches `top_k × expansion_factor` candidates so
    /// decay and fusion have re-ranking headroom.
    pub expansion_factor: usize,
    /// Candidates scoring below this lexical score are dropped.
    pub min_score: f64,
    /// Maximum results sharing one source file, so a single file cannot
    /// dominate a result set.
    pub per_file_cap: usize,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            expansion_factor: defaults::DEFAULT_EXPANSION_FACTOR,
            min_score: defaults::DEFAULT_MIN_SCORE,
            per_file_cap: defaults::DEFAULT_PER_FILE_CAP,
        }
    }
}

impl RecallConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expansion_factor == 0 {
            return Err(ConfigError::ZeroExpansionFactor {
                value: self.expansion_factor,
            });
        }
        if !(0.0..=1.0).contains(&self.min_score) || self.min_score.is_nan() {
            return Err(ConfigError::MinScoreOutOfRange {
                value: self.min_score,
            });
        }
        if self.per_file_cap == 0 {
            return Err(ConfigError::ZeroDiversityCap {
                value: self.per_file_cap,
            });
        }
        Ok(())
    }
}
