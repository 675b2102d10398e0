//! Property tests: add/remove reversal and scoring bounds hold for
//! arbitrary document sets.

use engram_index::LexicalIndex;
use proptest::prelude::*;
use test_fixtures::MemoryBuilder;

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{2,8}", 1..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn add_remove_leaves_index_as_if_never_added(
        texts in proptest::collection::vec(arb_text(), 1..8),
        extra in arb_text(),
    ) {
        let mut index = LexicalIndex::new();
        for (i, text) in texts.iter().enumerate() {
            index.add(&MemoryBuilder::new("p", i as i64, text).build());
        }
        let before = index.postings_snapshot();

        let extra_id = texts.len() as i64;
        index.add(&MemoryBuilder::new("p", extra_id, &extra).build());
        index.remove(extra_id);

        prop_assert_eq!(index.postings_snapshot(), before);
    }

    #[test]
    fn rebuild_matches_incremental_maintenance(
        texts in proptest::collection::vec(arb_text(), 1..8),
    ) {
        let mut incremental = LexicalIndex::new();
        let mut rebuilt = LexicalIndex::new();
        let docs: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| MemoryBuilder::new("p", i as i64, t).build())
            .collect();

        for doc in &docs {
            incremental.add(doc);
        }
        // Churn: remove and re-add the first half.
        for doc in docs.iter().take(docs.len() / 2) {
            incremental.remove(doc.id);
            incremental.add(doc);
        }

        rebuilt.clear();
        for doc in &docs {
            rebuilt.add(doc);
        }

        prop_assert_eq!(incremental.postings_snapshot(), rebuilt.postings_snapshot());
    }

    #[test]
    fn search_scores_stay_in_unit_interval(
        texts in proptest::collection::vec(arb_text(), 1..10),
        query in arb_text(),
    ) {
        let mut index = LexicalIndex::new();
        for (i, text) in texts.iter().enumerate() {
            index.add(&MemoryBuilder::new("p", i as i64, text).build());
        }
        for hit in index.search(&query, 50, 0.0) {
            prop_assert!((0.0..=1.0).contains(&hit.score));
        }
    }

    #[test]
    fn search_never_returns_more_than_top_k(
        texts in proptest::collection::vec(arb_text(), 1..10),
        query in arb_text(),
        top_k in 0usize..6,
    ) {
        let mut index = LexicalIndex::new();
        for (i, text) in texts.iter().enumerate() {
            index.add(&MemoryBuilder::new("p", i as i64, text).build());
        }
        prop_assert!(index.search(&query, top_k, 0.0).len() <= top_k);
    }
}
