//! Embedding provider seam.

use std::sync::Arc;

use crate::Result;

/// Maps text to a fixed-dimension vector.
///
/// Implementations must be deterministic for a given model and keep the same output
/// dimension across calls. Failures are reported as
/// [`SemsearchError::EmbeddingFailed`](crate::SemsearchError::EmbeddingFailed); retry
/// policy, if any, lives inside the implementation. Callers never pass blank text.
pub trait VecEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    fn embed_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text)?);
        }
        Ok(embeddings)
    }

    /// Identifier of the underlying model, for logs and stats.
    fn model_name(&self) -> &str;
}

impl<E: VecEmbedder + ?Sized> VecEmbedder for Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        (**self).embed(text)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

impl<E: VecEmbedder + ?Sized> VecEmbedder for Box<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        (**self).embed(text)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
