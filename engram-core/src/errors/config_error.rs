/// Configuration validation errors.
///
/// Invalid values are rejected eagerly at construction, never clamped.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("fusion weight {value} outside [0.0, 1.0]")]
    FusionWeightOutOfRange { value: f64 },

    #[error("decay half-life must be positive, got {value}")]
    NonPositiveHalfLife { value: f64 },

    #[error("decay weight floor {value} outside (0.0, 1.0]")]
    DecayFloorOutOfRange { value: f64 },

    #[error("cache TTL must be at least 1 second, got {secs}")]
    ZeroCacheTtl { secs: u64 },

    #[error("cache capacity must be at least 1 entry, got {entries}")]
    ZeroCacheCapacity { entries: u64 },

    #[error("recall expansion factor must be at least 1, got {value}")]
    ZeroExpansionFactor { value: usize },

    #[error("minimum score {value} outside [0.0, 1.0]")]
    MinScoreOutOfRange { value: f64 },

    #[error("conflict overlap threshold {value} outside [0.0, 1.0]")]
    OverlapThresholdOutOfRange { value: f64 },

    #[error("per-file diversity cap must be at least 1, got {value}")]
    ZeroDiversityCap { value: usize },

    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}
