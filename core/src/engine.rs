//! Document ingestion and tf-idf queries over an in-memory corpus.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::index::{DocumentId, InvertedIndex, TermCounts, TermFrequencies};
use crate::rank::{rank, ScoredDocument};
use crate::tokenizer::term_counts;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::io::Read;

/// Owns the inverted index and the term-frequency table of one corpus.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    index: InvertedIndex,
    frequencies: TermFrequencies,
}

/// Sorted, serializable view of the engine state for diagnostics.
#[derive(Debug, Serialize)]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub mapping: BTreeMap<String, BTreeSet<DocumentId>>,
    pub count: BTreeMap<DocumentId, BTreeMap<String, u32>>,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read `reader` to the end and index its text under `id`.
    ///
    /// Adding an id that is already present is a no-op: the new text is read
    /// and discarded. Read failures (including invalid UTF-8) are returned
    /// and nothing is recorded for `id`.
    pub fn add_document<R: Read>(&mut self, id: DocumentId, reader: R) -> Result<()> {
        let counts = read_term_counts(&id, reader, &self.config)?;
        self.insert_counts(id, counts);
        Ok(())
    }

    /// Index in-memory text under `id`.
    pub fn add_document_str(&mut self, id: DocumentId, text: &str) {
        let counts = term_counts(text, self.config.case_policy.folds());
        self.insert_counts(id, counts);
    }

    /// Record already-tokenized counts. Returns whether the document was new.
    pub(crate) fn insert_counts(&mut self, id: DocumentId, counts: TermCounts) -> bool {
        if self.frequencies.contains(&id) {
            tracing::debug!(doc = %id, "document already indexed, ignoring");
            return false;
        }
        for term in counts.keys() {
            self.index.insert(term, &id);
        }
        let tokens: u32 = counts.values().sum();
        tracing::debug!(doc = %id, terms = counts.len(), tokens, "indexed document");
        self.frequencies.insert(id, counts)
    }

    /// Documents containing a term equal to `term` ignoring case.
    pub fn index_lookup(&self, term: &str) -> HashSet<DocumentId> {
        self.index.lookup_ignore_case(term)
    }

    /// Occurrences of exactly `term` in document `id`.
    pub fn term_frequency(&self, id: &DocumentId, term: &str) -> Result<u32> {
        let term = self.config.normalize(term);
        self.frequencies
            .count(id, &term)
            .ok_or_else(|| EngineError::UnknownDocument(id.clone()))
    }

    /// Smoothed IDF: `ln((1 + N) / (1 + M))`.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let n = self.frequencies.len() as f64;
        let m = self.index_lookup(&self.config.normalize(term)).len() as f64;
        ((1.0 + n) / (1.0 + m)).ln()
    }

    pub fn tf_idf(&self, id: &DocumentId, term: &str) -> Result<f64> {
        let tf = self.term_frequency(id, term)?;
        if tf == 0 {
            return Ok(0.0);
        }
        Ok(tf as f64 * self.inverse_document_frequency(term))
    }

    /// Documents stored under exactly `term`, most relevant first.
    pub fn relevance_lookup(&self, term: &str) -> Vec<DocumentId> {
        self.relevance_lookup_scored(term)
            .into_iter()
            .map(|scored| scored.id)
            .collect()
    }

    /// Like [`Self::relevance_lookup`], keeping each document's score.
    pub fn relevance_lookup_scored(&self, term: &str) -> Vec<ScoredDocument> {
        let term = self.config.normalize(term);
        let Some(candidates) = self.index.exact(&term) else {
            tracing::trace!(term = %term, "no index entry");
            return Vec::new();
        };
        tracing::trace!(term = %term, candidates = candidates.len(), "ranking");
        let idf = self.inverse_document_frequency(&term);
        rank(candidates.iter().cloned(), |id| {
            let tf = self.frequencies.count(id, &term).unwrap_or(0);
            tf as f64 * idf
        })
    }

    pub fn contains_document(&self, id: &DocumentId) -> bool {
        self.frequencies.contains(id)
    }

    /// Corpus size.
    pub fn document_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Distinct stored terms across the corpus.
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mapping = self
            .index
            .iter()
            .map(|(term, docs)| (term.clone(), docs.iter().cloned().collect()))
            .collect();
        let count = self
            .frequencies
            .iter()
            .map(|(id, counts)| {
                let sorted = counts.iter().map(|(t, c)| (t.clone(), *c)).collect();
                (id.clone(), sorted)
            })
            .collect();
        EngineSnapshot { config: self.config.clone(), mapping, count }
    }

    pub fn dump_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

/// Read and tokenize a text source. The reader is consumed and dropped here.
pub(crate) fn read_term_counts<R: Read>(
    id: &DocumentId,
    mut reader: R,
    config: &EngineConfig,
) -> Result<TermCounts> {
    let mut text = String::new();
    if let Err(err) = reader.read_to_string(&mut text) {
        tracing::warn!(doc = %id, error = %err, "failed to read document text");
        return Err(EngineError::Io(err));
    }
    Ok(term_counts(&text, config.case_policy.folds()))
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.snapshot();
        writeln!(f, "Mapping:")?;
        for (term, docs) in &snap.mapping {
            let ids: Vec<&str> = docs.iter().map(DocumentId::as_str).collect();
            writeln!(f, "  {term} -> [{}]", ids.join(", "))?;
        }
        writeln!(f, "count:")?;
        for (id, counts) in &snap.count {
            let entries: Vec<String> = counts.iter().map(|(t, c)| format!("{t}={c}")).collect();
            writeln!(f, "  {id} -> {{{}}}", entries.join(", "))?;
        }
        Ok(())
    }
}
