use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by evidence providers.
pub enum EvidenceError {
    /// The provider endpoint could not be reached or returned a failure status.
    #[error("evidence request to '{url}' failed: {message}")]
    RequestFailed {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The provider responded with a body we could not interpret.
    #[error("invalid evidence response: {reason}")]
    InvalidResponse {
        /// What was wrong with the response.
        reason: String,
    },

    /// The provider is not configured or deliberately offline.
    #[error("evidence provider unavailable: {reason}")]
    Unavailable {
        /// Why the provider cannot serve requests.
        reason: String,
    },
}
