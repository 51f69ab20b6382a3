use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while loading or validating the reference corpus.
pub enum CorpusError {
    /// Corpus file could not be read.
    #[error("failed to read corpus file '{path}': {source}")]
    Io {
        /// Corpus file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Corpus file is not valid JSON for the expected record shape.
    #[error("failed to parse corpus JSON: {source}")]
    Parse {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A record carries an empty statement.
    #[error("corpus record {index} has an empty statement")]
    EmptyStatement {
        /// Zero-based position in the input records.
        index: usize,
    },

    /// Two records resolved to the same id.
    #[error("duplicate corpus record id {id}")]
    DuplicateId {
        /// Colliding record id.
        id: u64,
    },
}
