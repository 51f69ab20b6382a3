//! Deterministic bag-of-words feature-hashing embedder.
//!
//! No model files or network access; identical text always maps to the same
//! unit vector, and token overlap produces proportional cosine similarity.
//! Good enough for retrieval over a small curated corpus, and the determinism
//! the idempotence contract needs.

use async_trait::async_trait;

use super::{Embedder, EmbeddingError, l2_normalize};
use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::hash_to_u64;

/// Offline [`Embedder`] built on BLAKE3 feature hashing.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    embedding_dim: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl HashingEmbedder {
    /// Creates an embedder producing vectors of `embedding_dim`.
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.embedding_dim];

        for token in tokenize(text) {
            let hash = blake3::hash(token.as_bytes());
            let bucket = (hash_to_u64(token.as_bytes()) % self.embedding_dim as u64) as usize;
            // Signed hashing keeps unrelated tokens from only ever adding up.
            let sign = if hash.as_bytes()[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        l2_normalize(&mut vector);
        vector
    }
}

/// Lowercased alphanumeric word tokens.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[async_trait]
impl Embedder for HashingEmbedder {
    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        // Token-free input embeds to the zero vector: it is similar to nothing.
        Ok(self.embed_sync(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts.iter().map(|t| self.embed_sync(t)).collect())
    }
}
