//! Search orchestration for `Semsearch`.
//!
//! Embeds the query, scans the index and decorates each neighbour with its document.
//! Invariants: refuses to call the provider when the corpus is empty or the query is
//! blank, and never mutates the corpus.

use std::time::Instant;

use tracing::instrument;

use crate::semsearch::Semsearch;
use crate::text::{content_preview, is_blank};
use crate::types::{SearchHit, SearchRequest, SearchResponse};
use crate::{Result, SemsearchError};

impl Semsearch {
    /// Rank documents by similarity to `query`, best first.
    ///
    /// Returns at most `min(top_k, count)` hits; `top_k == 0` returns none.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>> {
        if self.read()?.store.is_empty() {
            return Err(SemsearchError::NoDocuments);
        }
        if is_blank(query) {
            return Err(SemsearchError::InvalidQuery {
                reason: "query text is empty".into(),
            });
        }
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embed_checked(query)?;

        let corpus = self.read()?;
        // A clear may have landed while the query was being embedded.
        if corpus.store.is_empty() {
            return Err(SemsearchError::NoDocuments);
        }
        let neighbours = corpus.index.search(&query_vector, top_k)?;

        let mut hits = Vec::with_capacity(neighbours.len());
        for neighbour in neighbours {
            let document = corpus.store.get_at(neighbour.position)?;
            hits.push(SearchHit {
                rank: hits.len() + 1,
                document_id: document.id,
                document_name: document.name.clone(),
                content_preview: content_preview(
                    &document.text,
                    self.config.preview_chars,
                    &self.config.preview_suffix,
                ),
                similarity_score: similarity_score(
                    neighbour.distance,
                    self.config.score_decimals,
                ),
            });
        }
        Ok(hits)
    }

    /// [`Self::search`] with the configured default `top_k`.
    pub fn search_default(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.search(query, self.config.default_top_k)
    }

    /// Run a [`SearchRequest`] and wrap the hits with timing.
    pub fn search_request(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let started = Instant::now();
        let hits = self.search(&request.query, request.top_k)?;
        let elapsed_ms = started.elapsed().as_millis();
        tracing::debug!(
            target = "semsearch::search",
            top_k = request.top_k,
            hits = hits.len(),
            elapsed_ms = elapsed_ms as u64,
            "search completed"
        );
        Ok(SearchResponse {
            query: request.query.clone(),
            top_k: request.top_k,
            elapsed_ms,
            total_hits: hits.len(),
            hits,
        })
    }
}

/// Map a squared L2 distance to `1 / (1 + distance)`, rounded to `decimals` places.
///
/// Rounding is kept inside `[10^-decimals, 1 - 10^-decimals]` for any non-zero
/// distance so a score of exactly 1 always means an exact vector match and a score
/// is never 0.
pub(crate) fn similarity_score(distance: f32, decimals: u32) -> f32 {
    if distance <= 0.0 {
        return 1.0;
    }
    let raw = 1.0 / (1.0 + f64::from(distance));
    let scale = 10_f64.powi(decimals as i32);
    let step = 1.0 / scale;
    let rounded = ((raw * scale).round() / scale).clamp(step, 1.0 - step);
    rounded as f32
}
