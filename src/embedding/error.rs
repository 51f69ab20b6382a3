use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by embedding providers.
pub enum EmbeddingError {
    /// The inference endpoint could not be reached or returned a failure status.
    #[error("embedding request to '{url}' failed: {message}")]
    RequestFailed {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The endpoint responded with a body we could not interpret.
    #[error("invalid embedding response: {reason}")]
    InvalidResponse {
        /// What was wrong with the response.
        reason: String,
    },

    /// The returned vector had the wrong dimension.
    #[error("invalid embedding dimension: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },
}
