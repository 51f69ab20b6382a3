//! Curated reference corpus: fact-checked statements with known verdicts.
//!
//! Records are immutable after load. A changed corpus only becomes visible to
//! queries through an explicit index rebuild
//! ([`IndexHandle::rebuild`](crate::index::IndexHandle::rebuild)).

pub mod error;
pub mod starter;

#[cfg(test)]
mod tests;

pub use error::CorpusError;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hashing::statement_id;

/// Ground-truth verdict attached to a corpus statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorpusVerdict {
    /// The statement is accurate.
    True,
    /// The statement is inaccurate.
    False,
    /// The statement is partially accurate or context-dependent.
    Mixed,
}

/// A single curated reference statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Stable record id (BLAKE3-derived from the statement when not supplied).
    pub id: u64,
    /// The reference statement text.
    pub statement: String,
    /// Ground-truth verdict for the statement.
    pub verdict: CorpusVerdict,
    /// Human-readable source name.
    pub source_name: String,
    /// Source URL.
    pub source_url: String,
    /// Topical category (e.g. `health`, `science`).
    pub category: String,
}

/// Corpus file record shape; `id` may be omitted and is then derived.
#[derive(Debug, Deserialize)]
struct RawCorpusRecord {
    #[serde(default)]
    id: Option<u64>,
    statement: String,
    verdict: CorpusVerdict,
    source_name: String,
    source_url: String,
    category: String,
}

/// Immutable collection of [`CorpusRecord`]s.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    records: Vec<CorpusRecord>,
}

impl CorpusStore {
    /// Builds a store from in-memory records, validating invariants.
    pub fn from_records(records: Vec<CorpusRecord>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.statement.trim().is_empty() {
                return Err(CorpusError::EmptyStatement { index });
            }
            if !seen.insert(record.id) {
                return Err(CorpusError::DuplicateId { id: record.id });
            }
        }
        Ok(Self { records })
    }

    /// Parses a store from corpus JSON (an array of records).
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let raw: Vec<RawCorpusRecord> =
            serde_json::from_str(json).map_err(|source| CorpusError::Parse { source })?;

        let records = raw
            .into_iter()
            .map(|r| CorpusRecord {
                id: r.id.unwrap_or_else(|| statement_id(&r.statement)),
                statement: r.statement,
                verdict: r.verdict,
                source_name: r.source_name,
                source_url: r.source_url,
                category: r.category,
            })
            .collect();

        Self::from_records(records)
    }

    /// Loads a store from a JSON corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            records = store.len(),
            "Corpus loaded"
        );
        Ok(store)
    }

    /// Builds the built-in starter corpus.
    pub fn starter() -> Self {
        Self::from_records(starter::starter_records())
            .expect("starter corpus satisfies corpus invariants")
    }

    /// Returns all records.
    pub fn records(&self) -> &[CorpusRecord] {
        &self.records
    }

    /// Looks a record up by id.
    pub fn get(&self, id: u64) -> Option<&CorpusRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
