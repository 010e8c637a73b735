use crate::tokenizer::fold_case;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Opaque identifier of a document in the corpus, ordered by its string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-document occurrence counts, keyed by term as stored.
pub type TermCounts = HashMap<String, u32>;

/// Term → documents containing it, with terms kept exactly as stored.
///
/// `spellings` groups every stored term under its case-folded form so that
/// case-insensitive lookups do not need to scan the whole dictionary.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashSet<DocumentId>>,
    spellings: HashMap<String, HashSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record that `doc` contains `term`. Repeated inserts are idempotent.
    pub fn insert(&mut self, term: &str, doc: &DocumentId) {
        match self.postings.get_mut(term) {
            Some(docs) => {
                docs.insert(doc.clone());
            }
            None => {
                self.postings.insert(term.to_string(), HashSet::from([doc.clone()]));
                self.spellings
                    .entry(fold_case(term))
                    .or_default()
                    .insert(term.to_string());
            }
        }
    }

    /// Documents stored under exactly `term`.
    pub fn exact(&self, term: &str) -> Option<&HashSet<DocumentId>> {
        self.postings.get(term)
    }

    /// Documents stored under any spelling of `term` that matches it ignoring case.
    pub fn lookup_ignore_case(&self, term: &str) -> HashSet<DocumentId> {
        let mut found = HashSet::new();
        if let Some(spellings) = self.spellings.get(&fold_case(term)) {
            for spelling in spellings {
                if let Some(docs) = self.postings.get(spelling) {
                    found.extend(docs.iter().cloned());
                }
            }
        }
        found
    }

    /// Number of distinct stored terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HashSet<DocumentId>)> {
        self.postings.iter()
    }
}

/// Document → per-term counts. Membership here is what makes a document known.
#[derive(Debug, Default)]
pub struct TermFrequencies {
    docs: HashMap<DocumentId, TermCounts>,
}

impl TermFrequencies {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, doc: &DocumentId) -> bool {
        self.docs.contains_key(doc)
    }

    /// Returns `false` without touching the table if `doc` is already present.
    pub fn insert(&mut self, doc: DocumentId, counts: TermCounts) -> bool {
        if self.docs.contains_key(&doc) {
            return false;
        }
        self.docs.insert(doc, counts);
        true
    }

    /// Count of `term` in `doc`; `None` if `doc` is unknown.
    pub fn count(&self, doc: &DocumentId, term: &str) -> Option<u32> {
        self.docs
            .get(doc)
            .map(|counts| counts.get(term).copied().unwrap_or(0))
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &TermCounts)> {
        self.docs.iter()
    }
}
