use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engram_core::config::EngramConfig;
use engram_core::RecallFilters;
use engram_retrieval::RelevanceEngine;
use test_fixtures::MemoryBuilder;

const TOPICS: &[&str] = &[
    "jwt auth token expiry",
    "sqlite connection pooling",
    "tracing subscriber setup",
    "cache invalidation strategy",
    "background job scheduling",
];

fn seeded_engine(docs: i64) -> RelevanceEngine {
    let engine = RelevanceEngine::new(EngramConfig::default()).unwrap();
    for id in 0..docs {
        let topic = TOPICS[(id % TOPICS.len() as i64) as usize];
        engine.index(
            &MemoryBuilder::new("bench", id, topic)
                .tags(&["bench"])
                .created_days_ago(id % 200)
                .build(),
        );
    }
    engine
}

fn bench_recall(c: &mut Criterion) {
    let engine = seeded_engine(500);
    let filters = RecallFilters::default();

    c.bench_function("recall_cold_500_docs", |b| {
        b.iter(|| {
            // Invalidate so each iteration pays the full pipeline.
            engine.invalidate("bench");
            engine.recall("bench", black_box("jwt auth expiry"), 10, &filters, None)
        })
    });

    c.bench_function("recall_cached_500_docs", |b| {
        engine.recall("bench", "jwt auth expiry", 10, &filters, None);
        b.iter(|| engine.recall("bench", black_box("jwt auth expiry"), 10, &filters, None))
    });

    c.bench_function("index_one_document", |b| {
        let mut id = 10_000;
        b.iter(|| {
            id += 1;
            engine.index(&MemoryBuilder::new("bench", id, "incremental index update").build())
        })
    });
}

criterion_group!(benches, bench_recall);
criterion_main!(benches);
