use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Result-cache configuration. Capacity and TTL apply per project cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached result sets per project.
    pub max_entries: u64,
    /// Per-entry time-to-live, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 {
            return Err(ConfigError::ZeroCacheCapacity {
                entries: self.max_entries,
            });
        }
        if self.ttl_secs == 0 {
            return Err(ConfigError::ZeroCacheTtl {
                secs: self.ttl_secs,
            });
        }
        Ok(())
    }
}
