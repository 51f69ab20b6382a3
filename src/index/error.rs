use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
/// Errors returned by vector index construction and queries.
pub enum IndexError {
    /// Embedding the corpus or query failed.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Query vector dimension does not match the index.
    #[error("invalid query dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },
}
