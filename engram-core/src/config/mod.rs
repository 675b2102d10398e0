//! Engine configuration.
//!
//! All subsystem configs deserialize with `#[serde(default)]` so partial
//! TOML files work. Validation is eager: a bad value is fatal at
//! construction, never silently clamped.

mod cache_config;
mod conflict_config;
mod decay_config;
pub mod defaults;
mod fusion_config;
mod recall_config;

pub use cache_config::CacheConfig;
pub use conflict_config::ConflictConfig;
pub use decay_config::DecayConfig;
pub use fusion_config::FusionConfig;
pub use recall_config::RecallConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub decay: DecayConfig,
    pub fusion: FusionConfig,
    pub cache: CacheConfig,
    pub recall: RecallConfig,
    pub conflict: ConflictConfig,
}

impl EngramConfig {
    /// Validate every subsystem. Call before handing the config to the
    /// engine; construction with invalid values is a startup failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decay.validate()?;
        self.fusion.validate()?;
        self.cache.validate()?;
        self.recall.validate()?;
        self.conflict.validate()?;
        Ok(())
    }

    /// Parse from TOML and validate.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}
