use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while loading or validating configuration.
pub enum ConfigError {
    /// A configured path does not exist.
    #[error("configured path not found: {path}")]
    PathNotFound {
        /// Offending path.
        path: PathBuf,
    },

    /// A configured path exists but is not a regular file.
    #[error("configured path is not a file: {path}")]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// A numeric environment variable failed to parse.
    #[error("failed to parse {var}='{value}' as an integer")]
    IntParseError {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Parse error.
        #[source]
        source: std::num::ParseIntError,
    },

    /// A numeric setting is outside its valid range.
    #[error("invalid value for {var}: {value} ({reason})")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Constraint that was violated.
        reason: &'static str,
    },
}
