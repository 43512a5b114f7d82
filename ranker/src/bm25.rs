//! Okapi BM25 scoring with configurable term-frequency saturation (`k1`)
//! and document-length normalization (`b`).

use std::collections::HashMap;

use serde::Serialize;

use crate::error::RankError;
use crate::stats::CollectionStats;
use crate::{order_results, DocId, ScoredResult};

pub const DEFAULT_K1: f32 = 1.5;
pub const DEFAULT_B: f32 = 0.75;

/// Validated BM25 parameters. Construction is the only place values are
/// checked, so an invalid pair cannot reach a scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bm25Params {
    k1: f32,
    b: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: DEFAULT_K1, b: DEFAULT_B }
    }
}

impl Bm25Params {
    /// `k1` must be finite and non-negative, `b` finite and within [0, 1].
    /// The edge values k1 = 0, b = 0 and b = 1 are all legal.
    pub fn new(k1: f32, b: f32) -> Result<Self, RankError> {
        if !k1.is_finite() || k1 < 0.0 {
            return Err(RankError::InvalidParameter { name: "k1", value: k1 });
        }
        if !b.is_finite() || !(0.0..=1.0).contains(&b) {
            return Err(RankError::InvalidParameter { name: "b", value: b });
        }
        Ok(Self { k1, b })
    }

    pub fn k1(&self) -> f32 {
        self.k1
    }

    pub fn b(&self) -> f32 {
        self.b
    }
}

/// Score every document against the query:
///
///   idf(t) = ln((N - df + 0.5) / (df + 0.5) + 1)
///   tf_component = tf * (k1 + 1) / (tf + k1 * (1 - b + b * len/avg_len))
///
/// summed over query token occurrences; duplicate query terms contribute
/// once per occurrence. Returns one ranked entry per document.
pub fn score(
    docs: &[Vec<String>],
    query: &[String],
    stats: &CollectionStats,
    params: &Bm25Params,
) -> Vec<ScoredResult> {
    let n = stats.num_docs() as f32;
    let avg_len = stats.avg_doc_length();
    let (k1, b) = (params.k1, params.b);

    let mut results = Vec::with_capacity(docs.len());
    for (i, doc) in docs.iter().enumerate() {
        let mut tf_counts: HashMap<&str, f32> = HashMap::new();
        for term in doc {
            *tf_counts.entry(term.as_str()).or_insert(0.0) += 1.0;
        }
        let len_norm = 1.0 - b + b * stats.doc_length(i as DocId) as f32 / avg_len;

        let mut score = 0.0;
        for term in query {
            // terms absent from the whole collection contribute nothing
            let df = stats.doc_freq(term);
            if df == 0 {
                continue;
            }
            // terms absent from this document likewise; skipping before the
            // quotient keeps k1 = 0 away from 0/0
            let Some(&tf) = tf_counts.get(term.as_str()) else {
                continue;
            };
            let df = df as f32;
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
            score += idf * tf * (k1 + 1.0) / (tf + k1 * len_norm);
        }
        results.push(ScoredResult { doc_id: i as DocId, score });
    }
    order_results(results)
}
