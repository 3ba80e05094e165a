//! Local, dependency-free text embedder based on feature hashing.
//!
//! Each token is hashed with BLAKE3; the first eight bytes pick a bucket and one bit
//! of the ninth picks a sign, so unrelated tokens that share a bucket tend to cancel
//! rather than accumulate. The resulting vector is L2-normalized, which makes the
//! index's squared-L2 ordering equal to cosine ordering.
//!
//! This is not a semantic model: texts are close when they share words. It is the
//! default provider for tests, benchmarks and offline use.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_HASH_EMBED_DIMENSION;
use crate::simd::l2_normalize;
use crate::text::tokenize;
use crate::types::VecEmbedder;
use crate::{Result, SemsearchError};

const MODEL_NAME: &str = "feature-hash-blake3";

fn default_dimension() -> usize {
    DEFAULT_HASH_EMBED_DIMENSION
}

fn default_lowercase() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingEmbedderConfig {
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

impl Default for HashingEmbedderConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            lowercase: default_lowercase(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    config: HashingEmbedderConfig,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self {
            config: HashingEmbedderConfig::default(),
        }
    }
}

impl HashingEmbedder {
    pub fn new(config: HashingEmbedderConfig) -> Result<Self> {
        if config.dimension == 0 {
            return Err(SemsearchError::InvalidConfig {
                reason: "hashing embedder dimension must be positive".into(),
            });
        }
        Ok(Self { config })
    }

    pub fn with_dimension(dimension: usize) -> Result<Self> {
        Self::new(HashingEmbedderConfig {
            dimension,
            ..HashingEmbedderConfig::default()
        })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn bucket(&self, token: &str) -> (usize, f32) {
        let hash = blake3::hash(token.as_bytes());
        let bytes = hash.as_bytes();
        let mut index_bytes = [0_u8; 8];
        index_bytes.copy_from_slice(&bytes[..8]);
        let slot = u64::from_le_bytes(index_bytes) % self.config.dimension as u64;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (slot as usize, sign)
    }
}

impl VecEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0_f32; self.config.dimension];
        for token in tokenize(text, self.config.lowercase) {
            let (slot, sign) = self.bucket(&token);
            vector[slot] += sign;
        }
        l2_normalize(&mut vector);
        Ok(vector)
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{dot, l2_distance_squared};

    #[test]
    fn output_has_configured_dimension_and_unit_norm() {
        let embedder = HashingEmbedder::with_dimension(64).unwrap();
        let v = embedder.embed("cats are small mammals").unwrap();
        assert_eq!(v.len(), 64);
        assert!((dot(&v, &v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn deterministic_across_calls_and_instances() {
        let a = HashingEmbedder::default().embed("the same text").unwrap();
        let b = HashingEmbedder::default().embed("the same text").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed("Hello, World!").unwrap();
        let b = embedder.embed("hello world").unwrap();
        assert_eq!(l2_distance_squared(&a, &b), 0.0);
    }

    #[test]
    fn punctuation_only_text_embeds_to_zero() {
        let v = HashingEmbedder::with_dimension(8)
            .unwrap()
            .embed("?!")
            .unwrap();
        assert_eq!(v, vec![0.0; 8]);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            HashingEmbedder::with_dimension(0),
            Err(SemsearchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn embed_many_preserves_order() {
        let embedder = HashingEmbedder::with_dimension(32).unwrap();
        let many = embedder.embed_many(&["one", "two"]).unwrap();
        assert_eq!(many[0], embedder.embed("one").unwrap());
        assert_eq!(many[1], embedder.embed("two").unwrap());
    }
}
