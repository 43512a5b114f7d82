//! Ranking harness: tokenize the collection and query once, build
//! statistics once, then run the selected scorer(s) over the identical
//! tokenized inputs so their orderings stay comparable.

use serde::Serialize;
use tracing::debug;

use crate::bm25::{self, Bm25Params};
use crate::error::RankError;
use crate::stats::CollectionStats;
use crate::tfidf;
use crate::tokenizer::tokenize;
use crate::ScoredResult;

/// Which scorer(s) a ranking request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorer {
    TfIdf,
    Bm25,
    Both,
}

/// Scorer selection plus BM25 parameters for one ranking request.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    pub scorer: Scorer,
    pub bm25: Bm25Params,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { scorer: Scorer::Both, bm25: Bm25Params::default() }
    }
}

/// Output of one ranking request: an ordered result list per scorer
/// invoked, plus the derived collection statistics for diagnostic
/// reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub tfidf: Option<Vec<ScoredResult>>,
    pub bm25: Option<Vec<ScoredResult>>,
    pub stats: CollectionStats,
}

/// Rank the collection against the query with the configured scorer(s).
pub fn rank<S: AsRef<str>>(
    documents: &[S],
    query: &str,
    config: &RankConfig,
) -> Result<Ranking, RankError> {
    let docs: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();
    let query_tokens = tokenize(query);
    let stats = CollectionStats::build(&docs)?;
    debug!(
        num_docs = docs.len(),
        vocab = stats.vocab_size(),
        query_terms = query_tokens.len(),
        "collection statistics ready"
    );

    let tfidf = matches!(config.scorer, Scorer::TfIdf | Scorer::Both)
        .then(|| tfidf::score(&docs, &query_tokens, &stats));
    let bm25 = matches!(config.scorer, Scorer::Bm25 | Scorer::Both)
        .then(|| bm25::score(&docs, &query_tokens, &stats, &config.bm25));

    Ok(Ranking { tfidf, bm25, stats })
}

/// One BM25 run of a parameter sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub k1: f32,
    pub b: f32,
    pub results: Vec<ScoredResult>,
}

/// Run BM25 over every (k1, b) combination, k1 outermost. The whole grid is
/// validated before any tokenization or scoring, so an invalid value
/// anywhere fails the call with no partial output. Combinations are
/// independent; with the `parallel` feature they fan out across threads and
/// are collected in submission order, leaving results identical to a
/// sequential run.
pub fn sweep<S: AsRef<str>>(
    documents: &[S],
    query: &str,
    k1_values: &[f32],
    b_values: &[f32],
) -> Result<Vec<SweepPoint>, RankError> {
    let mut grid = Vec::with_capacity(k1_values.len() * b_values.len());
    for &k1 in k1_values {
        for &b in b_values {
            grid.push(Bm25Params::new(k1, b)?);
        }
    }

    let docs: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();
    let query_tokens = tokenize(query);
    let stats = CollectionStats::build(&docs)?;
    debug!(combinations = grid.len(), "running BM25 parameter sweep");

    let run = |params: &Bm25Params| SweepPoint {
        k1: params.k1(),
        b: params.b(),
        results: bm25::score(&docs, &query_tokens, &stats, params),
    };

    #[cfg(feature = "parallel")]
    let points = {
        use rayon::prelude::*;
        grid.par_iter().map(run).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let points = grid.iter().map(run).collect();

    Ok(points)
}
