//! Document records plus the receipts and snapshots handed back to callers.

use serde::{Deserialize, Serialize};

use super::common::DocumentId;

/// One ingested document and its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Display name, usually the uploaded file name. Not unique.
    pub name: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Document {
    /// Length of the text in Unicode scalar values.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// Summary returned by a successful ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub document_id: DocumentId,
    pub document_name: String,
    /// Documents in the corpus after this ingest.
    pub total_documents: usize,
    /// Characters in the decoded text.
    pub content_length: usize,
}

/// Read-only snapshot of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_documents: usize,
    /// Display names in ingestion order.
    pub document_names: Vec<String>,
    pub index_ready: bool,
    /// Established embedding dimension, if any document has been embedded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<usize>,
}
