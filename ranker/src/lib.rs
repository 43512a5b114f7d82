//! Lexical document-relevance scoring: TF-IDF cosine and BM25 ranking over
//! an in-memory document collection, plus a harness for running both against
//! the same query and comparing the orderings.

pub mod bm25;
pub mod error;
pub mod rank;
pub mod stats;
pub mod tfidf;
pub mod tokenizer;

pub use bm25::Bm25Params;
pub use error::RankError;
pub use rank::{rank, sweep, RankConfig, Ranking, Scorer, SweepPoint};
pub use stats::CollectionStats;

use serde::{Deserialize, Serialize};

pub type DocId = u32;

/// A document index paired with its relevance score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub doc_id: DocId,
    pub score: f32,
}

/// Order results by score descending, ties broken by ascending document
/// index. Scores are never NaN (zero norms and absent terms score 0), so the
/// partial comparison always resolves.
pub(crate) fn order_results(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.doc_id.cmp(&b.doc_id))
    });
    results
}
