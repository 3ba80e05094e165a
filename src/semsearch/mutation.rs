//! Ingestion: decode, embed, append, rebuild.
//!
//! A failure at any step leaves the corpus exactly as it was. The provider call
//! happens before the write lock, and the replacement index is built before the
//! store is touched, so a retried ingest can never double-append.

use std::time::Instant;

use tracing::instrument;

use crate::semsearch::Semsearch;
use crate::text::is_blank;
use crate::types::IngestReceipt;
use crate::vec::VecIndex;
use crate::{Result, SemsearchError};

impl Semsearch {
    /// Ingest an uploaded file after checking its name against the allowed extensions.
    pub fn ingest_upload(&self, name: &str, bytes: &[u8]) -> Result<IngestReceipt> {
        if !self.config.accepts_file_name(name) {
            return Err(SemsearchError::UnsupportedFileType {
                name: name.to_string(),
                allowed: self.config.allowed_extensions.join(", "),
            });
        }
        self.ingest(name, bytes)
    }

    /// Decode `bytes` as UTF-8, embed them and add the document to the corpus.
    ///
    /// The index is rebuilt before this returns, so the next search sees the document.
    #[instrument(level = "debug", skip(self, bytes), fields(len = bytes.len()))]
    pub fn ingest(&self, name: &str, bytes: &[u8]) -> Result<IngestReceipt> {
        let text = std::str::from_utf8(bytes).map_err(|err| SemsearchError::DecodeError {
            valid_up_to: err.valid_up_to(),
        })?;
        self.ingest_text(name, text)
    }

    /// Same as [`Self::ingest`] for text that is already decoded.
    pub fn ingest_text(&self, name: &str, text: &str) -> Result<IngestReceipt> {
        if is_blank(text) {
            return Err(SemsearchError::EmptyContent);
        }
        let started = Instant::now();
        let embedding = self.embed_checked(text)?;

        let mut guard = self.write()?;
        let corpus = &mut *guard;
        let expected = corpus.dimension.unwrap_or(embedding.len());
        if embedding.len() != expected {
            tracing::error!(
                target = "semsearch::ingest",
                name,
                expected,
                actual = embedding.len(),
                model = self.embedder.model_name(),
                "embedding dimension changed; rejecting document"
            );
            return Err(SemsearchError::VecDimensionMismatch {
                expected,
                actual: embedding.len(),
            });
        }

        let index = VecIndex::build(
            corpus
                .store
                .embeddings()
                .chain(std::iter::once(embedding.as_slice())),
        )?;
        let document_id = corpus.store.append(name, text, embedding)?;
        let content_length = corpus.store.get(document_id)?.content_length();
        corpus.index = index;
        corpus.dimension = Some(expected);
        let total_documents = corpus.store.count();
        drop(guard);

        tracing::info!(
            target = "semsearch::ingest",
            %document_id,
            name,
            total_documents,
            dimension = expected,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "document ingested"
        );

        Ok(IngestReceipt {
            document_id,
            document_name: name.to_string(),
            total_documents,
            content_length,
        })
    }
}
