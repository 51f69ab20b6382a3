//! Entailment classification: the logical stance of evidence toward a claim.
//!
//! [`EntailmentClassifier`] is the seam the pipeline injects:
//! [`RemoteNliClassifier`] calls an NLI inference endpoint,
//! [`LexicalClassifier`] is a deterministic offline fallback used by tests
//! and the demo binary.

mod error;
pub mod lexical;
pub mod remote;


pub use error::EntailmentError;
pub use lexical::LexicalClassifier;
pub use remote::RemoteNliClassifier;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Logical stance of a piece of evidence toward a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// The evidence supports the claim.
    Supports,
    /// The evidence contradicts the claim.
    Contradicts,
    /// The evidence neither supports nor contradicts the claim.
    Neutral,
}

impl Relation {
    /// Returns `true` for non-neutral relations.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Relation::Neutral)
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Supports => write!(f, "SUPPORTS"),
            Relation::Contradicts => write!(f, "CONTRADICTS"),
            Relation::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Classifies the relation between a claim and a piece of evidence text.
#[async_trait]
pub trait EntailmentClassifier: Send + Sync {
    /// Returns the relation label and a confidence in `[0, 1]`.
    async fn classify(
        &self,
        claim: &str,
        evidence: &str,
    ) -> Result<(Relation, f32), EntailmentError>;
}
