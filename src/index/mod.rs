//! Flat cosine-similarity index over corpus embeddings.
//!
//! [`VectorIndex`] is an immutable snapshot built once from a
//! [`CorpusStore`]; [`IndexHandle`] holds the active snapshot and swaps in a
//! replacement atomically on rebuild. Readers clone an `Arc` and never block
//! each other; at most one rebuild runs at a time, and a failed rebuild
//! leaves the previous snapshot active.

pub mod error;


pub use error::IndexError;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::corpus::{CorpusRecord, CorpusStore};
use crate::embedding::{Embedder, l2_normalize};

/// A corpus record returned from a nearest-neighbor query.
#[derive(Debug, Clone)]
pub struct IndexHit {
    /// The matched record.
    pub record: CorpusRecord,
    /// Cosine similarity normalized into `[0, 1]`.
    pub score: f32,
}

/// Immutable exhaustive cosine index over corpus statements.
#[derive(Debug)]
pub struct VectorIndex {
    embedding_dim: usize,
    records: Vec<CorpusRecord>,
    embeddings: Vec<Vec<f32>>,
}

impl VectorIndex {
    /// Builds an index by embedding every statement in `store`.
    pub async fn build(
        store: &CorpusStore,
        embedder: &dyn Embedder,
    ) -> Result<Self, IndexError> {
        let statements: Vec<String> = store
            .records()
            .iter()
            .map(|r| r.statement.clone())
            .collect();

        let mut embeddings = embedder.embed_batch(&statements).await?;
        let embedding_dim = embedder.embedding_dim();

        for embedding in &mut embeddings {
            if embedding.len() != embedding_dim {
                return Err(IndexError::DimensionMismatch {
                    expected: embedding_dim,
                    actual: embedding.len(),
                });
            }
            l2_normalize(embedding);
        }

        info!(
            records = statements.len(),
            embedding_dim, "Vector index built"
        );

        Ok(Self {
            embedding_dim,
            records: store.records().to_vec(),
            embeddings,
        })
    }

    /// Creates an empty index of the given dimension.
    pub fn empty(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            records: Vec::new(),
            embeddings: Vec::new(),
        }
    }

    /// Returns the `k` nearest records to `query` by cosine similarity.
    ///
    /// Scores are mapped from `[-1, 1]` into `[0, 1]`.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<IndexHit>, IndexError> {
        if query.len() != self.embedding_dim {
            return Err(IndexError::DimensionMismatch {
                expected: self.embedding_dim,
                actual: query.len(),
            });
        }

        let mut normalized = query.to_vec();
        l2_normalize(&mut normalized);

        let mut hits: Vec<IndexHit> = self
            .records
            .iter()
            .zip(&self.embeddings)
            .map(|(record, embedding)| {
                let dot: f32 = normalized
                    .iter()
                    .zip(embedding.iter())
                    .map(|(a, b)| a * b)
                    .sum();
                IndexHit {
                    record: record.clone(),
                    score: ((dot + 1.0) / 2.0).clamp(0.0, 1.0),
                }
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);

        debug!(k, returned = hits.len(), "Index query served");
        Ok(hits)
    }

    /// Returns the embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns the number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared handle over the active [`VectorIndex`] snapshot.
///
/// Reads take a cheap `Arc` clone; a query in flight keeps using the snapshot
/// it started with even if a rebuild swaps the active index underneath it.
#[derive(Debug)]
pub struct IndexHandle {
    active: RwLock<Arc<VectorIndex>>,
    rebuild_lock: Mutex<()>,
}

impl IndexHandle {
    /// Wraps an already-built index.
    pub fn new(index: VectorIndex) -> Self {
        Self {
            active: RwLock::new(Arc::new(index)),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// Builds the initial index from `store` and wraps it.
    pub async fn build(
        store: &CorpusStore,
        embedder: &dyn Embedder,
    ) -> Result<Self, IndexError> {
        Ok(Self::new(VectorIndex::build(store, embedder).await?))
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<VectorIndex> {
        self.active.read().clone()
    }

    /// Rebuilds from `store` and atomically swaps the active snapshot.
    ///
    /// At most one rebuild runs at a time; concurrent callers queue. On error
    /// the previous snapshot stays active. Returns the new record count.
    pub async fn rebuild(
        &self,
        store: &CorpusStore,
        embedder: &dyn Embedder,
    ) -> Result<usize, IndexError> {
        let _guard = self.rebuild_lock.lock().await;

        let next = VectorIndex::build(store, embedder).await?;
        let count = next.len();

        *self.active.write() = Arc::new(next);
        info!(records = count, "Vector index swapped");
        Ok(count)
    }
}
