//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `CLAIMLENS_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MEMO_CAPACITY, DEFAULT_PROVIDER_TIMEOUT_MS, DEFAULT_TOP_K,
};

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CLAIMLENS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to a JSON corpus file. `None` runs on the built-in starter corpus.
    pub corpus_path: Option<PathBuf>,

    /// Number of corpus candidates retrieved per claim. Default: `5`.
    pub top_k: usize,

    /// Embedding vector dimension. Default: `384`.
    pub embedding_dim: usize,

    /// Text-embedding inference endpoint. `None` uses the hashing embedder.
    pub embed_url: Option<String>,

    /// NLI inference endpoint. `None` uses the lexical classifier.
    pub nli_url: Option<String>,

    /// Fact-check claim-search endpoint. `None` disables the provider.
    pub factcheck_url: Option<String>,

    /// API key for the fact-check endpoint.
    pub factcheck_api_key: Option<String>,

    /// Per-request timeout for classifier/provider calls, in milliseconds.
    pub provider_timeout_ms: u64,

    /// Capacity of the identical-claim memoization cache (`0` disables it).
    pub memo_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            top_k: DEFAULT_TOP_K,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            embed_url: None,
            nli_url: None,
            factcheck_url: None,
            factcheck_api_key: None,
            provider_timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
            memo_capacity: DEFAULT_MEMO_CAPACITY,
        }
    }
}

impl Config {
    const ENV_CORPUS_PATH: &'static str = "CLAIMLENS_CORPUS_PATH";
    const ENV_TOP_K: &'static str = "CLAIMLENS_TOP_K";
    const ENV_EMBEDDING_DIM: &'static str = "CLAIMLENS_EMBEDDING_DIM";
    const ENV_EMBED_URL: &'static str = "CLAIMLENS_EMBED_URL";
    const ENV_NLI_URL: &'static str = "CLAIMLENS_NLI_URL";
    const ENV_FACTCHECK_URL: &'static str = "CLAIMLENS_FACTCHECK_URL";
    const ENV_FACTCHECK_API_KEY: &'static str = "CLAIMLENS_FACTCHECK_API_KEY";
    const ENV_PROVIDER_TIMEOUT_MS: &'static str = "CLAIMLENS_PROVIDER_TIMEOUT_MS";
    const ENV_MEMO_CAPACITY: &'static str = "CLAIMLENS_MEMO_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let top_k = Self::parse_usize_from_env(Self::ENV_TOP_K, defaults.top_k)?;
        let embedding_dim =
            Self::parse_usize_from_env(Self::ENV_EMBEDDING_DIM, defaults.embedding_dim)?;
        let embed_url = Self::parse_optional_string_from_env(Self::ENV_EMBED_URL);
        let nli_url = Self::parse_optional_string_from_env(Self::ENV_NLI_URL);
        let factcheck_url = Self::parse_optional_string_from_env(Self::ENV_FACTCHECK_URL);
        let factcheck_api_key = Self::parse_optional_string_from_env(Self::ENV_FACTCHECK_API_KEY);
        let provider_timeout_ms = Self::parse_u64_from_env(
            Self::ENV_PROVIDER_TIMEOUT_MS,
            defaults.provider_timeout_ms,
        )?;
        let memo_capacity =
            Self::parse_u64_from_env(Self::ENV_MEMO_CAPACITY, defaults.memo_capacity)?;

        Ok(Self {
            corpus_path,
            top_k,
            embedding_dim,
            embed_url,
            nli_url,
            factcheck_url,
            factcheck_api_key,
            provider_timeout_ms,
            memo_capacity,
        })
    }

    /// Validates paths and basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if self.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                var: Self::ENV_TOP_K,
                value: self.top_k.to_string(),
                reason: "must be at least 1",
            });
        }

        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidValue {
                var: Self::ENV_EMBEDDING_DIM,
                value: self.embedding_dim.to_string(),
                reason: "must be at least 1",
            });
        }

        if self.provider_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: Self::ENV_PROVIDER_TIMEOUT_MS,
                value: self.provider_timeout_ms.to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Returns the provider timeout as a [`Duration`].
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
