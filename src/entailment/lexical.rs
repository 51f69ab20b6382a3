//! Deterministic lexical entailment fallback.
//!
//! Scores token overlap between claim and evidence and flips the relation
//! when exactly one side carries negation cues. Coarse, but stable and
//! offline; the remote NLI classifier supersedes it when configured.

use std::collections::HashSet;

use async_trait::async_trait;

use super::{EntailmentClassifier, EntailmentError, Relation};

/// Claim/evidence token overlap below which the evidence is neutral.
const OVERLAP_FLOOR: f32 = 0.3;

const NEGATION_CUES: &[&str] = &[
    "not", "no", "never", "cannot", "cant", "dont", "doesnt", "wont", "isnt", "arent", "false",
    "hoax", "myth", "debunked", "disproven", "without",
];

/// Offline [`EntailmentClassifier`] built on token overlap and negation cues.
#[derive(Debug, Clone, Default)]
pub struct LexicalClassifier;

impl LexicalClassifier {
    /// Creates the classifier.
    pub fn new() -> Self {
        Self
    }

    fn classify_sync(claim: &str, evidence: &str) -> (Relation, f32) {
        let claim_tokens = tokens(claim);
        let evidence_tokens = tokens(evidence);

        if claim_tokens.is_empty() || evidence_tokens.is_empty() {
            return (Relation::Neutral, 0.5);
        }

        let shared = claim_tokens.intersection(&evidence_tokens).count();
        let overlap = shared as f32 / claim_tokens.len() as f32;

        if overlap < OVERLAP_FLOOR {
            return (Relation::Neutral, 0.5);
        }

        let confidence = (0.5 + overlap / 2.0).min(0.95);
        if has_negation(claim) != has_negation(evidence) {
            (Relation::Contradicts, confidence)
        } else {
            (Relation::Supports, confidence)
        }
    }
}

fn tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2)
        .map(|t| t.to_lowercase())
        .filter(|t| !NEGATION_CUES.contains(&t.as_str()))
        .collect()
}

fn has_negation(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|t| NEGATION_CUES.contains(&t.to_lowercase().as_str()))
}

#[async_trait]
impl EntailmentClassifier for LexicalClassifier {
    async fn classify(
        &self,
        claim: &str,
        evidence: &str,
    ) -> Result<(Relation, f32), EntailmentError> {
        Ok(Self::classify_sync(claim, evidence))
    }
}
