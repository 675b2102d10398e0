//! Property tests: conflict detection is symmetric, irreflexive, and
//! bounded by the candidate pair count.

use engram_core::config::ConflictConfig;
use engram_core::Memory;
use engram_index::LexicalIndex;
use engram_retrieval::ConflictDetector;
use proptest::prelude::*;
use test_fixtures::MemoryBuilder;

fn arb_content() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("jwt".to_string()),
        Just("auth".to_string()),
        Just("cache".to_string()),
        Just("never".to_string()),
        Just("use".to_string()),
        Just("avoid".to_string()),
        Just("prefer".to_string()),
        "[a-z]{3,8}",
    ];
    proptest::collection::vec(word, 1..10).prop_map(|words| words.join(" "))
}

fn arb_memories() -> impl Strategy<Value = Vec<Memory>> {
    proptest::collection::vec((arb_content(), proptest::bool::ANY), 2..8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (content, failed))| {
                let builder = MemoryBuilder::new("p", i as i64, &content);
                if failed {
                    builder.worked(false).build()
                } else {
                    builder.build()
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn edges_are_canonical_and_irreflexive(memories in arb_memories()) {
        let mut index = LexicalIndex::new();
        for m in &memories {
            index.add(m);
        }
        let candidates: Vec<_> = memories
            .iter()
            .filter_map(|m| index.doc_terms(m.id).map(|t| (m, t)))
            .collect();

        let detector = ConflictDetector::new(&ConflictConfig::default());
        for edge in detector.detect(&candidates) {
            prop_assert!(edge.a < edge.b, "edge ({}, {})", edge.a, edge.b);
            prop_assert!((0.0..=1.0).contains(&edge.overlap));
        }
    }

    #[test]
    fn pairwise_detection_is_symmetric(memories in arb_memories()) {
        let mut index = LexicalIndex::new();
        for m in &memories {
            index.add(m);
        }
        let detector = ConflictDetector::new(&ConflictConfig::default());

        for a in &memories {
            for b in &memories {
                let (Some(a_terms), Some(b_terms)) =
                    (index.doc_terms(a.id), index.doc_terms(b.id))
                else {
                    continue;
                };
                let forward = detector.detect_pair(a, a_terms, b, b_terms);
                let reverse = detector.detect_pair(b, b_terms, a, a_terms);
                match (forward, reverse) {
                    (Some(f), Some(r)) => {
                        prop_assert_eq!((f.a, f.b), (r.a, r.b));
                        prop_assert_eq!(f.reason, r.reason);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "asymmetric detection"),
                }
            }
        }
    }

    #[test]
    fn edge_count_is_bounded_by_pair_count(memories in arb_memories()) {
        let mut index = LexicalIndex::new();
        for m in &memories {
            index.add(m);
        }
        let candidates: Vec<_> = memories
            .iter()
            .filter_map(|m| index.doc_terms(m.id).map(|t| (m, t)))
            .collect();
        let detector = ConflictDetector::new(&ConflictConfig::default());
        let n = candidates.len();
        prop_assert!(detector.detect(&candidates).len() <= n * (n - 1) / 2);
    }
}
