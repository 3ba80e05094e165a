//! Exact (flat) nearest-neighbour index over squared L2 distance.
//!
//! Vectors live in one contiguous buffer in build order, so position `i` in the index
//! is position `i` in whatever sequence it was rebuilt from. Search is a linear scan;
//! at thousands of vectors in the low hundreds of dimensions this answers well within
//! interactive latency, and no approximate structure is provided.
//!
//! Rebuilding copies every vector (O(N·D)). The orchestrators rebuild on every
//! ingest, so ingestion cost grows with the corpus.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::simd::l2_distance_squared;
use crate::{Result, SemsearchError};

/// One neighbour: build position plus squared L2 distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VecSearchHit {
    pub position: usize,
    pub distance: f32,
}

#[derive(Debug, Clone, Default)]
pub struct VecIndex {
    dimension: usize,
    count: usize,
    data: Vec<f32>,
}

impl VecIndex {
    /// An empty, not-ready index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh index from `vectors` in order.
    pub fn build<'a, I>(vectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [f32]>,
    {
        let mut index = Self::new();
        index.rebuild(vectors)?;
        Ok(index)
    }

    /// Replace the contents wholesale.
    ///
    /// An empty sequence leaves the index not ready. On a dimension mismatch the
    /// previous contents are kept and `VecDimensionMismatch` is returned.
    pub fn rebuild<'a, I>(&mut self, vectors: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a [f32]>,
    {
        let mut dimension = 0;
        let mut count = 0;
        let mut data = Vec::new();
        for vector in vectors {
            if count == 0 {
                dimension = vector.len();
                if dimension == 0 {
                    return Err(SemsearchError::VecDimensionMismatch {
                        expected: 1,
                        actual: 0,
                    });
                }
            } else if vector.len() != dimension {
                return Err(SemsearchError::VecDimensionMismatch {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
            data.extend_from_slice(vector);
            count += 1;
        }
        self.dimension = dimension;
        self.count = count;
        self.data = data;
        tracing::debug!(
            target = "semsearch::vec",
            vectors = count,
            dimension,
            "vector index rebuilt"
        );
        Ok(())
    }

    /// Drop every vector; the index becomes not ready.
    pub fn reset(&mut self) {
        self.dimension = 0;
        self.count = 0;
        self.data = Vec::new();
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.count > 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Dimension of the stored vectors, `None` while not ready.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.is_ready().then_some(self.dimension)
    }

    /// Vector stored at `position`.
    #[must_use]
    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        if position >= self.count {
            return None;
        }
        let start = position * self.dimension;
        self.data.get(start..start + self.dimension)
    }

    /// Iterate `(position, vector)` in build order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &[f32])> + '_ {
        self.data.chunks_exact(self.dimension.max(1)).enumerate()
    }

    /// The `k` nearest stored vectors to `query`, nearest first.
    ///
    /// `k` is clamped to the number of stored vectors and `k == 0` yields no hits.
    /// Equal distances are ordered by ascending position so identical inputs always
    /// produce identical output.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<VecSearchHit>> {
        if !self.is_ready() {
            return Err(SemsearchError::IndexNotReady);
        }
        if query.len() != self.dimension {
            return Err(SemsearchError::VecDimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }
        let k = k.min(self.count);
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut hits: Vec<VecSearchHit> = self
            .entries()
            .map(|(position, vector)| VecSearchHit {
                position,
                distance: l2_distance_squared(query, vector),
            })
            .collect();

        if k < hits.len() {
            hits.select_nth_unstable_by(k - 1, compare_hits);
            hits.truncate(k);
        }
        hits.sort_unstable_by(compare_hits);
        Ok(hits)
    }
}

fn compare_hits(a: &VecSearchHit, b: &VecSearchHit) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.position.cmp(&b.position))
}
