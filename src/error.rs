//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SemsearchError>;

/// Failures surfaced by the document store, the vector index and the orchestrators.
///
/// Variants fall in three groups: input errors the caller can fix, collaborator
/// errors from the embedding provider, and invariant violations ([`Self::is_fatal`]).
#[derive(Debug, Error)]
pub enum SemsearchError {
    #[error("document content is empty")]
    EmptyContent,

    #[error("document is not valid UTF-8 (valid up to byte {valid_up_to})")]
    DecodeError { valid_up_to: usize },

    #[error("document not found: {reference}")]
    NotFound { reference: String },

    #[error("no documents have been ingested")]
    NoDocuments,

    #[error("vector index is not ready")]
    IndexNotReady,

    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("unsupported file type for {name}; allowed extensions: {allowed}")]
    UnsupportedFileType { name: String, allowed: String },

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("embedding dimension mismatch (expected {expected}, got {actual})")]
    VecDimensionMismatch { expected: usize, actual: usize },

    #[error("corpus lock poisoned by a panicking writer")]
    LockPoisoned,

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl SemsearchError {
    /// Errors that indicate a broken invariant rather than bad input.
    ///
    /// A dimension mismatch means the embedding model changed mid-run; callers should
    /// stop feeding the handle rather than retry.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::VecDimensionMismatch { .. } | Self::LockPoisoned
        )
    }

    /// Errors caused by the caller's request, reported back verbatim.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyContent
                | Self::DecodeError { .. }
                | Self::NotFound { .. }
                | Self::NoDocuments
                | Self::IndexNotReady
                | Self::InvalidQuery { .. }
                | Self::UnsupportedFileType { .. }
        )
    }

    pub(crate) fn embedding(reason: impl Into<String>) -> Self {
        Self::EmbeddingFailed {
            reason: reason.into(),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for SemsearchError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
