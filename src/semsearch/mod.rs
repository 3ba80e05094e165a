//! Core `Semsearch` type owning the document store, the vector index and the provider.

pub mod lifecycle;
pub mod mutation;
pub mod search;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::store::DocumentStore;
use crate::types::{SemsearchConfig, VecEmbedder};
use crate::vec::VecIndex;
use crate::{Result, SemsearchError};

/// Primary handle for ingesting and searching documents.
///
/// The store and the index sit behind one `RwLock` so a reader never sees one without
/// the other: ingest and clear hold the write side for the append+rebuild or the
/// reset, search and stats hold the read side. Provider calls happen before the lock
/// is taken, so a slow embedding request never blocks other traffic.
pub struct Semsearch {
    pub(crate) embedder: Box<dyn VecEmbedder>,
    pub(crate) config: SemsearchConfig,
    pub(crate) corpus: RwLock<Corpus>,
}

/// The guarded pair plus the dimension established for this handle.
#[derive(Debug, Default)]
pub(crate) struct Corpus {
    pub(crate) store: DocumentStore,
    pub(crate) index: VecIndex,
    /// Set by the first embedded document (or pinned by config) and kept across clears.
    pub(crate) dimension: Option<usize>,
}

impl Semsearch {
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Corpus>> {
        Ok(self.corpus.read()?)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Corpus>> {
        Ok(self.corpus.write()?)
    }

    /// Call the provider and reject vectors the index cannot hold.
    pub(crate) fn embed_checked(&self, text: &str) -> Result<Vec<f32>> {
        let started = Instant::now();
        let vector = self.embedder.embed(text).map_err(|err| match err {
            SemsearchError::EmbeddingFailed { .. } => err,
            other => SemsearchError::embedding(other.to_string()),
        })?;
        if vector.is_empty() {
            return Err(SemsearchError::embedding("provider returned an empty vector"));
        }
        if let Some(component) = vector.iter().position(|x| !x.is_finite()) {
            return Err(SemsearchError::embedding(format!(
                "provider returned a non-finite value at component {component}"
            )));
        }
        tracing::debug!(
            target = "semsearch::embed",
            model = self.embedder.model_name(),
            dimension = vector.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "text embedded"
        );
        Ok(vector)
    }
}
