use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by entailment classifiers.
pub enum EntailmentError {
    /// The inference endpoint could not be reached or returned a failure status.
    #[error("entailment request to '{url}' failed: {message}")]
    RequestFailed {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The endpoint responded with a body we could not interpret.
    #[error("invalid entailment response: {reason}")]
    InvalidResponse {
        /// What was wrong with the response.
        reason: String,
    },
}
