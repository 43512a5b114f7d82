use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::RankError;
use crate::DocId;

/// Derived statistics for one tokenized collection: per-document lengths,
/// average length, and per-term document frequencies. Built fresh per
/// scoring call and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    doc_lengths: Vec<u32>,
    avg_doc_length: f32,
    doc_freq: HashMap<String, u32>,
}

impl CollectionStats {
    /// Compute statistics for a batch of tokenized documents. Fails on an
    /// empty collection, where average document length is undefined.
    pub fn build(docs: &[Vec<String>]) -> Result<Self, RankError> {
        if docs.is_empty() {
            return Err(RankError::DegenerateCollection);
        }
        let doc_lengths: Vec<u32> = docs.iter().map(|d| d.len() as u32).collect();
        let total: u32 = doc_lengths.iter().sum();
        let avg_doc_length = total as f32 / docs.len() as f32;

        let mut doc_freq: HashMap<String, u32> = HashMap::new();
        for doc in docs {
            let mut seen_in_doc: HashSet<&str> = HashSet::new();
            for term in doc {
                if seen_in_doc.insert(term) {
                    *doc_freq.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        Ok(Self { doc_lengths, avg_doc_length, doc_freq })
    }

    pub fn num_docs(&self) -> u32 {
        self.doc_lengths.len() as u32
    }

    pub fn doc_length(&self, doc_id: DocId) -> u32 {
        self.doc_lengths[doc_id as usize]
    }

    pub fn avg_doc_length(&self) -> f32 {
        self.avg_doc_length
    }

    /// Number of documents containing `term` at least once. Absent terms
    /// report 0; they are not an error condition.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Distinct terms across the collection, in no particular order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.doc_freq.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn document_frequency_counts_presence_not_occurrences() {
        let docs = vec![tokenize("fox fox fox"), tokenize("fox dog")];
        let stats = CollectionStats::build(&docs).unwrap();
        assert_eq!(stats.doc_freq("fox"), 2);
        assert_eq!(stats.doc_freq("dog"), 1);
        assert_eq!(stats.doc_freq("zebra"), 0);
        assert_eq!(stats.vocab_size(), 2);
    }

    #[test]
    fn average_length_counts_duplicates() {
        let docs = vec![tokenize("fox fox fox"), tokenize("fox")];
        let stats = CollectionStats::build(&docs).unwrap();
        assert_eq!(stats.doc_length(0), 3);
        assert_eq!(stats.doc_length(1), 1);
        assert_eq!(stats.avg_doc_length(), 2.0);
    }

    #[test]
    fn empty_collection_is_degenerate() {
        assert!(matches!(CollectionStats::build(&[]), Err(RankError::DegenerateCollection)));
    }
}
