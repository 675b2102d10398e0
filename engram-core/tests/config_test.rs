//! Config validation: defaults are valid, bad values are rejected eagerly.

use engram_core::config::{CacheConfig, DecayConfig, EngramConfig, FusionConfig};
use engram_core::errors::ConfigError;

#[test]
fn default_config_validates() {
    EngramConfig::default().validate().unwrap();
}

#[test]
fn fusion_weight_above_one_rejected() {
    let mut config = EngramConfig::default();
    config.fusion.weight = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::FusionWeightOutOfRange { .. })
    ));
}

#[test]
fn fusion_weight_boundaries_accepted() {
    for w in [0.0, 1.0] {
        let config = FusionConfig {
            enabled: true,
            weight: w,
        };
        config.validate().unwrap();
    }
}

#[test]
fn negative_fusion_weight_rejected() {
    let config = FusionConfig {
        enabled: true,
        weight: -0.1,
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_cache_ttl_rejected() {
    let config = CacheConfig {
        max_entries: 10,
        ttl_secs: 0,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroCacheTtl { .. })
    ));
}

#[test]
fn zero_cache_capacity_rejected() {
    let config = CacheConfig {
        max_entries: 0,
        ttl_secs: 60,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroCacheCapacity { .. })
    ));
}

#[test]
fn non_positive_half_life_rejected() {
    for days in [0.0, -5.0] {
        let config = DecayConfig {
            half_life_days: days,
            min_weight: 0.05,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveHalfLife { .. })
        ));
    }
}

#[test]
fn decay_floor_of_zero_rejected() {
    let config = DecayConfig {
        half_life_days: 30.0,
        min_weight: 0.0,
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DecayFloorOutOfRange { .. })
    ));
}

#[test]
fn partial_toml_fills_defaults() {
    let config = EngramConfig::from_toml_str(
        r#"
        [decay]
        half_life_days = 14.0

        [fusion]
        weight = 0.5
        "#,
    )
    .unwrap();
    assert_eq!(config.decay.half_life_days, 14.0);
    assert_eq!(config.decay.min_weight, 0.05);
    assert_eq!(config.fusion.weight, 0.5);
    assert_eq!(config.cache.ttl_secs, 300);
}

#[test]
fn invalid_toml_value_fails_at_parse_or_validate() {
    let err = EngramConfig::from_toml_str(
        r#"
        [fusion]
        weight = 2.0
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::FusionWeightOutOfRange { .. }));
}
