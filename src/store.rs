//! Ordered, append-only document store.
//!
//! Store position `i` is the position of the document's vector in the index. Ids
//! are contiguous within a generation (the span between two clears), so resolving
//! an id is a subtraction rather than a map lookup.

use crate::text::is_blank;
use crate::types::{Document, DocumentId};
use crate::{Result, SemsearchError};

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    /// Id of the document at position 0 in the current generation.
    generation_base: u64,
    next_id: u64,
}

impl DocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document and return its new id.
    ///
    /// Rejects text that is empty after trimming. The embedding is stored as given;
    /// dimension checks belong to the caller, which owns the index.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Result<DocumentId> {
        let text = text.into();
        if is_blank(&text) {
            return Err(SemsearchError::EmptyContent);
        }
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        self.documents.push(Document {
            id,
            name: name.into(),
            text,
            embedding,
        });
        Ok(id)
    }

    pub fn get(&self, id: DocumentId) -> Result<&Document> {
        id.0.checked_sub(self.generation_base)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|position| self.documents.get(position))
            .ok_or_else(|| SemsearchError::NotFound {
                reference: id.to_string(),
            })
    }

    pub fn get_at(&self, position: usize) -> Result<&Document> {
        self.documents
            .get(position)
            .ok_or_else(|| SemsearchError::NotFound {
                reference: format!("position {position}"),
            })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Remove every document. Ids already handed out are never reissued.
    pub fn clear(&mut self) -> usize {
        let removed = self.documents.len();
        self.documents.clear();
        self.generation_base = self.next_id;
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.iter()
    }

    /// Display names in store order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.name.clone()).collect()
    }

    /// Embeddings in store order, ready to feed [`VecIndex::rebuild`](crate::VecIndex::rebuild).
    pub fn embeddings(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.documents.iter().map(|doc| doc.embedding.as_slice())
    }

    /// Dimension of the stored embeddings, `None` while empty.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.documents.first().map(|doc| doc.embedding.len())
    }
}
