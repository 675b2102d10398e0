//! Property tests: decay weight bounds and monotonicity in age.

use chrono::{Duration, Utc};
use engram_core::config::DecayConfig;
use engram_core::Category;
use engram_decay::DecayScorer;
use proptest::prelude::*;
use test_fixtures::MemoryBuilder;

fn arb_config() -> impl Strategy<Value = DecayConfig> {
    (1.0f64..365.0, 0.001f64..0.5).prop_map(|(half_life_days, min_weight)| DecayConfig {
        half_life_days,
        min_weight,
    })
}

proptest! {
    #[test]
    fn weight_is_always_in_unit_interval(
        config in arb_config(),
        age_days in 0i64..2000,
    ) {
        let scorer = DecayScorer::new(&config);
        let m = MemoryBuilder::new("p", 1, "x")
            .category(Category::Learning)
            .created_days_ago(age_days)
            .build();
        let w = scorer.weight(&m, Utc::now());
        prop_assert!(w > 0.0 && w <= 1.0, "weight {}", w);
    }

    #[test]
    fn weight_is_monotonically_non_increasing_in_age(
        config in arb_config(),
        age_days in 0i64..1000,
        delta_days in 1i64..500,
    ) {
        let scorer = DecayScorer::new(&config);
        let now = Utc::now();
        let m = MemoryBuilder::new("p", 1, "x")
            .category(Category::Decision)
            .created_days_ago(age_days)
            .build();
        let younger = scorer.weight(&m, now);
        let older = scorer.weight(&m, now + Duration::days(delta_days));
        prop_assert!(older <= younger);
    }

    #[test]
    fn permanent_memories_ignore_config_and_age(
        config in arb_config(),
        age_days in 0i64..2000,
    ) {
        let scorer = DecayScorer::new(&config);
        let m = MemoryBuilder::new("p", 1, "x")
            .category(Category::Warning)
            .created_days_ago(age_days)
            .build();
        prop_assert_eq!(scorer.weight(&m, Utc::now()), 1.0);
    }

    #[test]
    fn weight_never_falls_below_the_floor(
        config in arb_config(),
        age_days in 0i64..5000,
    ) {
        let scorer = DecayScorer::new(&config);
        let m = MemoryBuilder::new("p", 1, "x")
            .category(Category::Learning)
            .created_days_ago(age_days)
            .build();
        prop_assert!(scorer.weight(&m, Utc::now()) >= config.min_weight);
    }
}
