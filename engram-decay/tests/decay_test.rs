//! Decay semantics: permanence exemptions, half-life math, the floor,
//! and a 20-document mixed-age ranking scenario.

use chrono::Utc;
use engram_core::config::DecayConfig;
use engram_core::Category;
use engram_decay::DecayScorer;
use test_fixtures::MemoryBuilder;

fn scorer() -> DecayScorer {
    DecayScorer::new(&DecayConfig {
        half_life_days: 30.0,
        min_weight: 0.05,
    })
}

#[test]
fn patterns_and_warnings_never_decay() {
    let scorer = scorer();
    let now = Utc::now();
    for category in [Category::Pattern, Category::Warning] {
        let m = MemoryBuilder::new("p", 1, "x")
            .category(category)
            .created_days_ago(365)
            .build();
        assert_eq!(scorer.weight(&m, now), 1.0);
    }
}

#[test]
fn pinned_is_permanent_equivalent_at_any_age() {
    let scorer = scorer();
    let m = MemoryBuilder::new("p", 1, "x")
        .category(Category::Learning)
        .created_days_ago(1000)
        .pinned()
        .build();
    assert_eq!(scorer.weight(&m, Utc::now()), 1.0);
}

#[test]
fn explicit_permanent_override_exempts_decaying_category() {
    let scorer = scorer();
    let m = MemoryBuilder::new("p", 1, "x")
        .category(Category::Decision)
        .created_days_ago(500)
        .permanent(true)
        .build();
    assert_eq!(scorer.weight(&m, Utc::now()), 1.0);
}

#[test]
fn four_half_lives_quarter_quarter() {
    // age 120d, half-life 30d: 0.5^4 = 0.0625, above the 0.05 floor.
    let scorer = scorer();
    let m = MemoryBuilder::new("p", 1, "x")
        .created_days_ago(120)
        .build();
    let w = scorer.weight(&m, Utc::now());
    assert!((w - 0.0625).abs() < 1e-3, "weight {w}");
}

#[test]
fn very_old_memories_clamp_to_the_floor() {
    let scorer = scorer();
    let m = MemoryBuilder::new("p", 1, "x")
        .created_days_ago(300)
        .build();
    assert_eq!(scorer.weight(&m, Utc::now()), 0.05);
}

#[test]
fn mixed_corpus_scenario() {
    // 20 documents: half permanent or pinned, half decaying, ages 0-120.
    let scorer = scorer();
    let now = Utc::now();
    for i in 0..10i64 {
        let m = if i % 2 == 0 {
            MemoryBuilder::new("p", i, "x")
                .category(Category::Pattern)
                .created_days_ago(i * 12)
                .build()
        } else {
            MemoryBuilder::new("p", i, "x")
                .created_days_ago(i * 12)
                .pinned()
                .build()
        };
        assert_eq!(scorer.weight(&m, now), 1.0, "doc {i}");
    }
    let mut previous = f64::INFINITY;
    for i in 0..10i64 {
        let m = MemoryBuilder::new("p", 10 + i, "x")
            .category(Category::Learning)
            .created_days_ago(i * 12)
            .build();
        let w = scorer.weight(&m, now);
        assert!(w <= previous, "weight not monotone at age {}", i * 12);
        assert!(w >= 0.05);
        previous = w;
    }
}

#[test]
fn decay_is_evaluated_against_query_time() {
    // The same memory weighs less when "now" is later: nothing is baked in.
    let scorer = scorer();
    let m = MemoryBuilder::new("p", 1, "x").created_days_ago(0).build();
    let today = scorer.weight(&m, Utc::now());
    let in_60_days = scorer.weight(&m, Utc::now() + chrono::Duration::days(60));
    assert!(in_60_days < today);
}
