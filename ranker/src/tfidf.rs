//! TF-IDF cosine scoring.
//!
//! Weights are raw term frequency times the unsmoothed idf = ln(N / df).
//! A term appearing in every document gets idf 0 and drops out of every
//! score; that behavior is part of the contract, not a defect to smooth
//! away.

use std::collections::BTreeMap;

use crate::stats::CollectionStats;
use crate::{order_results, DocId, ScoredResult};

/// Score every document against the query by cosine similarity of sparse
/// tf-idf vectors. Returns one ranked entry per document.
pub fn score(docs: &[Vec<String>], query: &[String], stats: &CollectionStats) -> Vec<ScoredResult> {
    let n = stats.num_docs() as f32;

    let query_vec = weighted_vector(query, stats, n);
    let query_norm = norm(&query_vec);

    let mut results = Vec::with_capacity(docs.len());
    for (i, doc) in docs.iter().enumerate() {
        let doc_vec = weighted_vector(doc, stats, n);
        let doc_norm = norm(&doc_vec);

        // a zero norm (empty token sequence, or every term unweighted)
        // means similarity 0, not NaN
        let score = if query_norm > 0.0 && doc_norm > 0.0 {
            let dot: f32 = query_vec
                .iter()
                .filter_map(|(term, q_w)| doc_vec.get(term).map(|d_w| q_w * d_w))
                .sum();
            dot / (query_norm * doc_norm)
        } else {
            0.0
        };
        results.push(ScoredResult { doc_id: i as DocId, score });
    }
    order_results(results)
}

/// Sparse term -> tf * idf mapping. Out-of-vocabulary terms keep weight 0 so
/// query vectors stay aligned with the collection's vector space. A BTreeMap
/// keeps accumulation order stable, so repeated calls produce bit-identical
/// sums.
fn weighted_vector<'a>(
    tokens: &'a [String],
    stats: &CollectionStats,
    n: f32,
) -> BTreeMap<&'a str, f32> {
    let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
    for term in tokens {
        *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    tf.into_iter().map(|(term, count)| (term, count * idf(stats, term, n))).collect()
}

/// Unsmoothed idf. Every vocabulary term has df >= 1; terms absent from the
/// collection weigh 0 instead of reaching the quotient.
fn idf(stats: &CollectionStats, term: &str, n: f32) -> f32 {
    let df = stats.doc_freq(term);
    if df == 0 {
        0.0
    } else {
        (n / df as f32).ln()
    }
}

fn norm(vector: &BTreeMap<&str, f32>) -> f32 {
    vector.values().map(|w| w * w).sum::<f32>().sqrt()
}
