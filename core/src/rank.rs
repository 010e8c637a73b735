//! Relevance ordering of scored documents.

use crate::index::DocumentId;
use serde::Serialize;
use std::cmp::Ordering;

/// A document paired with its tf-idf score for some term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocumentId,
    pub score: f64,
}

/// Higher score first; equal scores fall back to ascending id.
pub fn by_relevance(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.id.cmp(&b.id))
}

/// Score every candidate once with `score_of` and sort them by relevance.
pub fn rank<I, F>(candidates: I, mut score_of: F) -> Vec<ScoredDocument>
where
    I: IntoIterator<Item = DocumentId>,
    F: FnMut(&DocumentId) -> f64,
{
    let mut scored: Vec<ScoredDocument> = candidates
        .into_iter()
        .map(|id| {
            let score = score_of(&id);
            ScoredDocument { id, score }
        })
        .collect();
    scored.sort_by(by_relevance);
    scored
}
