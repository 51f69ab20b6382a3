//! Evidence gathering and ranking.
//!
//! [`EvidenceAggregator`] combines corpus retrieval (vector index +
//! entailment classifier) with any number of external [`EvidenceProvider`]s
//! behind one [`EvidenceItem`] contract, then deduplicates and ranks.

pub mod aggregator;
pub mod error;
pub mod factcheck;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;
pub mod types;


pub use aggregator::{
    AggregateOutcome, AggregatorConfig, COMPONENT_CLASSIFIER, COMPONENT_EMBEDDING,
    COMPONENT_INDEX, EvidenceAggregator,
};
pub use error::EvidenceError;
pub use factcheck::FactCheckSearchProvider;
#[cfg(any(test, feature = "mock"))]
pub use mock::{FailingEvidenceProvider, HangingEvidenceProvider, StaticEvidenceProvider};
pub use provider::EvidenceProvider;
pub use types::{EvidenceItem, source_domain};
