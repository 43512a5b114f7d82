use thiserror::Error;

/// Errors surfaced by the scoring engine. Zero vector norms and zero
/// document frequencies are defined numeric edge cases handled inside the
/// scorers, never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The collection is empty, so average document length is undefined.
    #[error("collection is empty; average document length is undefined")]
    DegenerateCollection,
    /// A BM25 parameter is outside its valid range: k1 must be finite and
    /// non-negative, b must be finite and within [0, 1].
    #[error("invalid BM25 parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}
