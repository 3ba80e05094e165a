//! Construction, snapshots and reset of a `Semsearch` handle.

use std::sync::RwLock;

use crate::semsearch::{Corpus, Semsearch};
use crate::types::{Document, DocumentId, SemsearchConfig, Stats, VecEmbedder};
use crate::Result;

impl Semsearch {
    /// Empty handle with default configuration.
    pub fn new(embedder: impl VecEmbedder + 'static) -> Self {
        Self::from_parts(Box::new(embedder), SemsearchConfig::default())
    }

    /// Empty handle with a validated configuration.
    pub fn with_config(
        embedder: impl VecEmbedder + 'static,
        config: SemsearchConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(Box::new(embedder), config))
    }

    fn from_parts(embedder: Box<dyn VecEmbedder>, config: SemsearchConfig) -> Self {
        tracing::debug!(
            target = "semsearch::lifecycle",
            model = embedder.model_name(),
            expected_dimension = config.expected_dimension,
            "semsearch handle created"
        );
        let corpus = Corpus {
            dimension: config.expected_dimension,
            ..Corpus::default()
        };
        Self {
            embedder,
            config,
            corpus: RwLock::new(corpus),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SemsearchConfig {
        &self.config
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.store.count())
    }

    pub fn is_index_ready(&self) -> Result<bool> {
        Ok(self.read()?.index.is_ready())
    }

    /// Embedding dimension established for this handle, if any.
    pub fn dimension(&self) -> Result<Option<usize>> {
        Ok(self.read()?.dimension)
    }

    /// Copy of the document with `id`.
    pub fn document(&self, id: DocumentId) -> Result<Document> {
        Ok(self.read()?.store.get(id)?.clone())
    }

    /// Copy of the document at store `position`.
    pub fn document_at(&self, position: usize) -> Result<Document> {
        Ok(self.read()?.store.get_at(position)?.clone())
    }

    pub fn stats(&self) -> Result<Stats> {
        let corpus = self.read()?;
        Ok(Stats {
            total_documents: corpus.store.count(),
            document_names: corpus.store.names(),
            index_ready: corpus.index.is_ready(),
            dimension: corpus.dimension,
        })
    }

    /// Drop every document and tear the index down. Idempotent.
    ///
    /// The established embedding dimension survives: it belongs to the provider, not
    /// to the documents. Returns how many documents were removed.
    pub fn clear(&self) -> Result<usize> {
        let mut corpus = self.write()?;
        let removed = corpus.store.clear();
        corpus.index.reset();
        drop(corpus);
        log::info!("semsearch corpus cleared ({removed} documents removed)");
        Ok(removed)
    }
}
