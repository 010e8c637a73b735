//! Thread-safe handle around a [`SearchEngine`].

use crate::config::EngineConfig;
use crate::engine::{read_term_counts, EngineSnapshot, SearchEngine};
use crate::error::Result;
use crate::index::DocumentId;
use crate::rank::ScoredDocument;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;

/// Cloneable engine handle: one writer at a time, any number of readers.
///
/// Document text is read and tokenized before the write lock is taken, so
/// slow sources never block queries.
#[derive(Clone, Default)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
    // Same as the engine's config; fixed at construction.
    config: Arc<EngineConfig>,
}

impl SharedSearchEngine {
    pub fn new(engine: SearchEngine) -> Self {
        let config = Arc::new(engine.config().clone());
        Self { inner: Arc::new(RwLock::new(engine)), config }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(SearchEngine::with_config(config))
    }

    pub fn add_document<R: Read>(&self, id: DocumentId, reader: R) -> Result<()> {
        let counts = read_term_counts(&id, reader, &self.config)?;
        self.inner.write().insert_counts(id, counts);
        Ok(())
    }

    pub fn add_document_str(&self, id: DocumentId, text: &str) {
        self.inner.write().add_document_str(id, text);
    }

    pub fn index_lookup(&self, term: &str) -> HashSet<DocumentId> {
        self.inner.read().index_lookup(term)
    }

    pub fn term_frequency(&self, id: &DocumentId, term: &str) -> Result<u32> {
        self.inner.read().term_frequency(id, term)
    }

    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        self.inner.read().inverse_document_frequency(term)
    }

    pub fn tf_idf(&self, id: &DocumentId, term: &str) -> Result<f64> {
        self.inner.read().tf_idf(id, term)
    }

    pub fn relevance_lookup(&self, term: &str) -> Vec<DocumentId> {
        self.inner.read().relevance_lookup(term)
    }

    pub fn relevance_lookup_scored(&self, term: &str) -> Vec<ScoredDocument> {
        self.inner.read().relevance_lookup_scored(term)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.read().snapshot()
    }

    /// Run `f` against the engine under a single read lock.
    pub fn with_engine<T>(&self, f: impl FnOnce(&SearchEngine) -> T) -> T {
        f(&self.inner.read())
    }
}
