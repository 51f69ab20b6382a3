//! Claimlens library crate (used by the demo binary and integration tests).
//!
//! # Public API Surface
//!
//! The crate exposes the claim verification pipeline and its seams:
//!
//! ## Core Types (Stable)
//! - [`Pipeline`], [`PipelineConfig`], [`VerificationResult`] - the entry point
//! - [`Config`], [`ConfigError`] - environment-backed configuration
//! - [`CorpusStore`], [`CorpusRecord`] - the curated reference corpus
//!
//! ## Retrieval & Classification
//! - [`Embedder`], [`RemoteEmbedder`], [`HashingEmbedder`] - text embedding
//! - [`VectorIndex`], [`IndexHandle`] - nearest-neighbor search with
//!   atomic swap-on-rebuild
//! - [`EntailmentClassifier`], [`RemoteNliClassifier`], [`LexicalClassifier`] -
//!   claim/evidence stance
//!
//! ## Evidence & Scoring
//! - [`EvidenceAggregator`], [`EvidenceProvider`], [`EvidenceItem`] - evidence
//!   gathering behind one item contract
//! - [`CredibilityScorer`], [`CredibilityFingerprint`], [`DomainTrust`] -
//!   multi-factor credibility
//! - [`LanguageRiskDetector`], [`SuspiciousPhrase`] - manipulation patterns
//! - [`VerdictEngine`], [`Verdict`] - the decision table
//! - [`LessonMapper`], [`MicroLesson`] - educational tips
//!
//! ## Test/Mock Support
//! Mock evidence providers are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod credibility;
pub mod embedding;
pub mod entailment;
pub mod evidence;
pub mod extract;
pub mod hashing;
pub mod index;
pub mod language;
pub mod lesson;
pub mod pipeline;
pub mod verdict;

pub use config::{Config, ConfigError};
pub use corpus::{CorpusError, CorpusRecord, CorpusStore, CorpusVerdict};
pub use credibility::{
    CredibilityFingerprint, CredibilityScorer, DomainTrust, ScoreWeights, StaticTrustTable,
};
pub use embedding::{Embedder, EmbeddingError, HashingEmbedder, RemoteEmbedder};
pub use entailment::{
    EntailmentClassifier, EntailmentError, LexicalClassifier, Relation, RemoteNliClassifier,
};
pub use evidence::{
    AggregateOutcome, AggregatorConfig, EvidenceAggregator, EvidenceError, EvidenceItem,
    EvidenceProvider, FactCheckSearchProvider, source_domain,
};
#[cfg(any(test, feature = "mock"))]
pub use evidence::{FailingEvidenceProvider, HangingEvidenceProvider, StaticEvidenceProvider};
pub use extract::ClaimExtractor;
pub use hashing::{hash_input, hash_to_u64, statement_id};
pub use index::{IndexError, IndexHandle, IndexHit, VectorIndex};
pub use language::{LanguageRiskDetector, SuspiciousPhrase, risk_score};
pub use lesson::{LessonCategory, LessonMapper, MicroLesson};
pub use pipeline::{ArticleMeta, Pipeline, PipelineConfig, VerificationResult};
pub use verdict::{Verdict, VerdictDecision, VerdictEngine, VerdictThresholds};
