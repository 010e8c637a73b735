//! In-memory inverted index with tf-idf relevance ranking.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod rank;
pub mod shared;
pub mod tokenizer;

pub use config::{CasePolicy, EngineConfig};
pub use engine::{EngineSnapshot, SearchEngine};
pub use error::{EngineError, Result};
pub use index::{DocumentId, InvertedIndex, TermCounts, TermFrequencies};
pub use rank::ScoredDocument;
pub use shared::SharedSearchEngine;
