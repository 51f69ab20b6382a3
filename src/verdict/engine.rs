use std::collections::HashMap;

use tracing::debug;

use super::types::{Verdict, VerdictDecision};
use crate::constants::{
    FALSE_SCORE_CEILING, HIGH_CONFIDENCE, NET_SUPPORT_THRESHOLD, TRUE_SCORE_FLOOR,
    UNSOURCED_SCORE_FLOOR,
};
use crate::credibility::CredibilityFingerprint;
use crate::entailment::Relation;
use crate::evidence::EvidenceItem;
use crate::language::SuspiciousPhrase;

/// Decision-table thresholds; injectable for test tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictThresholds {
    /// Net signal magnitude needed for a directional verdict.
    pub net_support: f32,
    /// Overall score required alongside a positive net signal.
    pub true_score_floor: f32,
    /// Overall score below which a negative net signal is trusted.
    pub false_score_ceiling: f32,
    /// Overall score below which unsourced evidence cannot verify.
    pub unsourced_score_floor: f32,
    /// Relation confidence treated as high when detecting conflicts.
    pub high_confidence: f32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            net_support: NET_SUPPORT_THRESHOLD,
            true_score_floor: TRUE_SCORE_FLOOR,
            false_score_ceiling: FALSE_SCORE_CEILING,
            unsourced_score_floor: UNSOURCED_SCORE_FLOOR,
            high_confidence: HIGH_CONFIDENCE,
        }
    }
}

/// Combines evidence, the credibility fingerprint and flagged language into
/// a final verdict, confidence, explanation and ranked reasons.
#[derive(Debug, Clone, Default)]
pub struct VerdictEngine {
    thresholds: VerdictThresholds,
}

impl VerdictEngine {
    /// Creates an engine with custom thresholds.
    pub fn new(thresholds: VerdictThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the active thresholds.
    pub fn thresholds(&self) -> VerdictThresholds {
        self.thresholds
    }

    /// Decides the verdict for a deduplicated, ranked evidence list.
    pub fn decide(
        &self,
        evidence: &[EvidenceItem],
        fingerprint: &CredibilityFingerprint,
        phrases: &[SuspiciousPhrase],
        degraded: &[String],
    ) -> VerdictDecision {
        let t = self.thresholds;

        let supports: f32 = confidence_sum(evidence, Relation::Supports);
        let contradicts: f32 = confidence_sum(evidence, Relation::Contradicts);
        let supporting_count = relation_count(evidence, Relation::Supports);
        let contradicting_count = relation_count(evidence, Relation::Contradicts);
        let decisive = supporting_count + contradicting_count;

        let net = if decisive == 0 {
            0.0
        } else {
            (supports - contradicts) / decisive as f32
        };

        let overall = fingerprint.overall_score;
        let no_urls = evidence.iter().all(|item| item.url.is_none());
        let conflicting = evidence
            .iter()
            .any(|i| i.relation == Relation::Supports && i.relation_confidence >= t.high_confidence)
            && evidence.iter().any(|i| {
                i.relation == Relation::Contradicts && i.relation_confidence >= t.high_confidence
            });

        let counts = format!("{supporting_count} supporting, {contradicting_count} contradicting");

        let (verdict, mut explanation) = if evidence.is_empty() {
            (
                Verdict::Unverified,
                "No evidence was found to verify this claim.".to_string(),
            )
        } else if net >= t.net_support && overall >= t.true_score_floor {
            (
                Verdict::LikelyTrue,
                format!("Evidence largely supports this claim ({counts})."),
            )
        } else if net <= -t.net_support && overall < t.false_score_ceiling {
            (
                Verdict::LikelyFalse,
                format!("Evidence largely contradicts this claim ({counts})."),
            )
        } else if overall < t.unsourced_score_floor && no_urls {
            (
                Verdict::Unverified,
                "Available evidence is unsourced and too weak to verify this claim.".to_string(),
            )
        } else if net.abs() < t.net_support || conflicting {
            (
                Verdict::Mixed,
                format!("Evidence points both ways ({counts})."),
            )
        } else {
            // Directional signal whose credibility gate failed; treat as mixed
            // rather than committing to a verdict the fingerprint undermines.
            (
                Verdict::Mixed,
                format!("Evidence is directional but credibility is inconclusive ({counts})."),
            )
        };

        if let Some(top) = evidence.first() {
            explanation.push_str(&format!(
                " Top evidence ({}) from {}.",
                top.relation, top.source
            ));
        }
        if !degraded.is_empty() {
            explanation.push_str(&format!(
                " Degraded components: {}.",
                degraded.join(", ")
            ));
        }

        let confidence = (net.abs() * 0.7 + 0.3 * overall).min(1.0);
        let reasons = self.assemble_reasons(evidence, fingerprint, phrases);

        debug!(
            %verdict,
            net,
            overall,
            confidence,
            decisive,
            "Verdict decided"
        );

        VerdictDecision {
            verdict,
            confidence,
            explanation,
            reasons,
        }
    }

    /// Reasons in priority order: missing corroboration, flagged language,
    /// dominant source domain. At most three.
    fn assemble_reasons(
        &self,
        evidence: &[EvidenceItem],
        fingerprint: &CredibilityFingerprint,
        phrases: &[SuspiciousPhrase],
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        if fingerprint.corroboration_count == 0 {
            reasons.push("no independent sourced evidence corroborates this claim".to_string());
        }

        if !phrases.is_empty() {
            let named: Vec<String> = phrases
                .iter()
                .take(2)
                .map(|p| format!("\"{}\"", p.phrase))
                .collect();
            reasons.push(format!(
                "manipulative language detected: {}",
                named.join(", ")
            ));
        }

        if let Some(domain) = dominant_domain(evidence) {
            reasons.push(format!("most evidence comes from {domain}"));
        }

        reasons.truncate(3);
        reasons
    }
}

fn confidence_sum(evidence: &[EvidenceItem], relation: Relation) -> f32 {
    evidence
        .iter()
        .filter(|i| i.relation == relation)
        .map(|i| i.relation_confidence)
        .sum()
}

fn relation_count(evidence: &[EvidenceItem], relation: Relation) -> usize {
    evidence.iter().filter(|i| i.relation == relation).count()
}

/// Most frequent evidence source domain; ties break lexicographically so the
/// output is deterministic.
fn dominant_domain(evidence: &[EvidenceItem]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in evidence {
        if let Some(domain) = item.domain() {
            *counts.entry(domain).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.into_iter().next().map(|(domain, _)| domain)
}
