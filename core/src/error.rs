use crate::index::DocumentId;

/// Failures surfaced by the engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The text source of a document could not be read in full.
    #[error("failed to read document text: {0}")]
    Io(#[from] std::io::Error),

    /// The document was never added to the corpus.
    #[error("unknown document: {0}")]
    UnknownDocument(DocumentId),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
