use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Vector-fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Whether fusion runs at all. Lexical-only when disabled.
    pub enabled: bool,
    /// Blend factor `w`: `final = (1-w)·lexical + w·vector`. Must lie in
    /// the closed interval [0, 1].
    pub weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_FUSION_ENABLED,
            weight: defaults::DEFAULT_FUSION_WEIGHT,
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.weight) || self.weight.is_nan() {
            return Err(ConfigError::FusionWeightOutOfRange { value: self.weight });
        }
        Ok(())
    }
}
