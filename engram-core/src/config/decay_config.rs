use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Time-decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Half-life for decaying categories, in days.
    pub half_life_days: f64,
    /// Weight floor: old memories are demoted but never erased.
    pub min_weight: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            min_weight: defaults::DEFAULT_MIN_DECAY_WEIGHT,
        }
    }
}

impl DecayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.half_life_days > 0.0) {
            return Err(ConfigError::NonPositiveHalfLife {
                value: self.half_life_days,
            });
        }
        if !(self.min_weight > 0.0 && self.min_weight <= 1.0) {
            return Err(ConfigError::DecayFloorOutOfRange {
                value: self.min_weight,
            });
        }
        Ok(())
    }
}
