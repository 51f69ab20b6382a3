//! Multi-factor credibility scoring.
//!
//! [`CredibilityScorer::fingerprint`] is a pure function of the claim text,
//! the aggregated evidence and the flagged language spans; it never touches
//! the network. Weights are fixed configuration
//! ([`ScoreWeights`]), not learned, and injectable for test tuning.

pub mod trust;


pub use trust::{DomainTrust, StaticTrustTable};

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entailment::Relation;
use crate::evidence::EvidenceItem;
use crate::language::{SuspiciousPhrase, risk_score};

/// Relation confidence an item needs before it counts as corroboration.
const CORROBORATION_CONFIDENCE_FLOOR: f32 = 0.5;

/// Evidence items with SUPPORTS at or past this count saturate the
/// corroboration term of the overall score.
const CORROBORATION_TARGET: f32 = 3.0;

/// Multi-factor summary of claim trustworthiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityFingerprint {
    /// Mean per-domain trust weight across sourced evidence, in `[0, 1]`
    /// (`0` when no evidence carries a URL).
    pub source_credibility: f32,
    /// Independent supporting evidence items with distinct source domains.
    pub corroboration_count: u32,
    /// Manipulative-phrasing signal, in `[0, 1]` (higher is riskier).
    pub language_risk: f32,
    /// Weighted combination of the factors, in `[0, 1]`.
    pub overall_score: f32,
}

/// Fixed weights combining the credibility factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of mean source trust.
    pub source: f32,
    /// Weight of the saturating corroboration term.
    pub corroboration: f32,
    /// Weight of the inverted language-risk term.
    pub language: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            source: 0.4,
            corroboration: 0.3,
            language: 0.3,
        }
    }
}

impl ScoreWeights {
    /// Combines the factors into an overall score in `[0, 1]`.
    ///
    /// Monotonically non-decreasing in `source_credibility` and
    /// `corroboration_count`, non-increasing in `language_risk`.
    pub fn combine(
        &self,
        source_credibility: f32,
        corroboration_count: u32,
        language_risk: f32,
    ) -> f32 {
        let corroboration = (corroboration_count as f32 / CORROBORATION_TARGET).min(1.0);
        let score = self.source * source_credibility
            + self.corroboration * corroboration
            + self.language * (1.0 - language_risk);
        score.clamp(0.0, 1.0)
    }
}

/// Computes [`CredibilityFingerprint`]s from aggregated evidence.
pub struct CredibilityScorer {
    trust: Arc<dyn DomainTrust>,
    weights: ScoreWeights,
}

impl CredibilityScorer {
    /// Creates a scorer over a trust lookup with the given weights.
    pub fn new(trust: Arc<dyn DomainTrust>, weights: ScoreWeights) -> Self {
        Self { trust, weights }
    }

    /// Creates a scorer over the built-in trust table and default weights.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(StaticTrustTable::new()), ScoreWeights::default())
    }

    /// Returns the active weights.
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Computes the fingerprint for `text` given its evidence and flagged spans.
    pub fn fingerprint(
        &self,
        text: &str,
        evidence: &[EvidenceItem],
        phrases: &[SuspiciousPhrase],
    ) -> CredibilityFingerprint {
        let source_credibility = self.source_credibility(evidence);
        let corroboration_count = corroboration_count(evidence);
        let language_risk = risk_score(text, phrases);
        let overall_score =
            self.weights
                .combine(source_credibility, corroboration_count, language_risk);

        debug!(
            source_credibility,
            corroboration_count, language_risk, overall_score, "Credibility fingerprint computed"
        );

        CredibilityFingerprint {
            source_credibility,
            corroboration_count,
            language_risk,
            overall_score,
        }
    }

    /// Mean trust weight across evidence items that carry a URL; `0` if none do.
    fn source_credibility(&self, evidence: &[EvidenceItem]) -> f32 {
        let weights: Vec<f32> = evidence
            .iter()
            .filter_map(|item| item.domain())
            .map(|domain| self.trust.trust(&domain))
            .collect();

        if weights.is_empty() {
            return 0.0;
        }
        weights.iter().sum::<f32>() / weights.len() as f32
    }
}

/// Counts supporting evidence items with distinct source domains.
///
/// Items without a URL fall back to their lowercased source name for
/// distinctness, so two unsourced items from the same outlet count once.
pub fn corroboration_count(evidence: &[EvidenceItem]) -> u32 {
    let mut domains: HashSet<String> = HashSet::new();
    for item in evidence {
        if item.relation == Relation::Supports
            && item.relation_confidence > CORROBORATION_CONFIDENCE_FLOOR
        {
            let key = item.domain().unwrap_or_else(|| item.source.to_lowercase());
            domains.insert(key);
        }
    }
    domains.len() as u32
}
