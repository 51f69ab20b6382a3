//! Embedding providers.
//!
//! [`Embedder`] is the seam the pipeline injects: [`RemoteEmbedder`] talks to
//! a text-embedding inference endpoint, [`HashingEmbedder`] is a
//! deterministic offline fallback used by tests and the demo binary.

mod error;
pub mod remote;
pub mod stub;

#[cfg(test)]
mod tests;

pub use error::EmbeddingError;
pub use remote::RemoteEmbedder;
pub use stub::HashingEmbedder;

use async_trait::async_trait;

/// Maps free text to a fixed-dimension numeric vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Dimension of the vectors this embedder produces.
    fn embedding_dim(&self) -> usize;

    /// Embeds a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds a batch of texts (defaults to sequential single embeds).
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }
}

/// Normalizes `v` to unit L2 length in place (zero vectors are left as-is).
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
