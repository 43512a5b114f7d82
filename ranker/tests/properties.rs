use proptest::prelude::*;
use ranker::{rank, RankConfig};

proptest! {
    #[test]
    fn rankings_are_ordered_permutations(
        docs in proptest::collection::vec("[a-z ]{0,30}", 1..10),
        query in "[a-z ]{0,20}",
    ) {
        let ranking = rank(&docs, &query, &RankConfig::default()).unwrap();
        for results in [ranking.tfidf.as_ref().unwrap(), ranking.bm25.as_ref().unwrap()] {
            let mut ids: Vec<u32> = results.iter().map(|r| r.doc_id).collect();
            ids.sort_unstable();
            let expected: Vec<u32> = (0..docs.len() as u32).collect();
            prop_assert_eq!(ids, expected);
            for pair in results.windows(2) {
                prop_assert!(
                    pair[0].score > pair[1].score
                        || (pair[0].score == pair[1].score && pair[0].doc_id < pair[1].doc_id)
                );
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(
        docs in proptest::collection::vec("[a-z ]{0,30}", 1..10),
        query in "[a-z ]{0,20}",
    ) {
        let config = RankConfig::default();
        let first = rank(&docs, &query, &config).unwrap();
        let second = rank(&docs, &query, &config).unwrap();
        prop_assert_eq!(first.tfidf, second.tfidf);
        prop_assert_eq!(first.bm25, second.bm25);
    }
}
