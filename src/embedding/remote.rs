//! Thin client for a text-embedding inference endpoint.
//!
//! Wire contract: `POST {url}` with `{"inputs": ["...", ...]}`, response is a
//! JSON array of float vectors, one per input, in order.

use async_trait::async_trait;
use serde::Serialize;

use super::{Embedder, EmbeddingError};

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

/// [`Embedder`] backed by a remote inference endpoint.
#[derive(Debug, Clone)]
pub struct RemoteEmbedder {
    client: reqwest::Client,
    url: String,
    embedding_dim: usize,
}

impl RemoteEmbedder {
    /// Creates a client for `url` producing vectors of `embedding_dim`.
    pub fn new(url: impl Into<String>, embedding_dim: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            embedding_dim,
        }
    }

    /// Returns the configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self, inputs: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.url)
            .json(&EmbedRequest { inputs })
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| EmbeddingError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let vectors: Vec<Vec<f32>> =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        if vectors.len() != inputs.len() {
            return Err(EmbeddingError::InvalidResponse {
                reason: format!(
                    "expected {} vectors, got {}",
                    inputs.len(),
                    vectors.len()
                ),
            });
        }

        for vector in &vectors {
            if vector.len() != self.embedding_dim {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.embedding_dim,
                    actual: vector.len(),
                });
            }
        }

        Ok(vectors)
    }
}

#[async_trait]
impl Embedder for RemoteEmbedder {
    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.request(&[text]).await?;
        Ok(vectors.remove(0))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.request(&inputs).await
    }
}
