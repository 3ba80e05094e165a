//! Public search request/response types exposed by the core library.

use serde::{Deserialize, Serialize};

use super::common::DocumentId;
use crate::constants::DEFAULT_TOP_K;

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Query accepted at the search boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text embedded with the same provider as the documents.
    pub query: String,
    /// Maximum hits to return; clamped to the corpus size.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    #[must_use]
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A single ranked hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based position in the result list.
    pub rank: usize,
    pub document_id: DocumentId,
    pub document_name: String,
    /// Leading characters of the document text, suffixed when cut.
    pub content_preview: String,
    /// `1 / (1 + squared_l2)`, rounded. 1.0 only for an exact vector match.
    pub similarity_score: f32,
}

/// Full search response with timing, for callers that want more than the hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query echoed back for clients.
    pub query: String,
    /// Requested `top_k` before clamping.
    pub top_k: usize,
    /// Milliseconds spent satisfying the request, embedding included.
    pub elapsed_ms: u128,
    pub total_hits: usize,
    pub hits: Vec<SearchHit>,
}
