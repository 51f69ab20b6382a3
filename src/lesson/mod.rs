//! Educational tip selection.
//!
//! A deterministic, priority-ordered rule match: the first rule whose failure
//! pattern is present wins, and each rule maps to one fixed tip. Identical
//! analyses always yield identical lessons.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::entailment::Relation;
use crate::evidence::EvidenceItem;
use crate::language::SuspiciousPhrase;

/// Closed set of lesson category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonCategory {
    /// Checking who published a claim.
    SourceVerification,
    /// Spotting manipulative phrasing.
    LanguageAnalysis,
    /// Confirming through unrelated outlets.
    CrossReferencing,
    /// Weighing the strength of evidence.
    EvidenceEvaluation,
    /// Recognizing slanted or motivated coverage.
    BiasAwareness,
}

impl std::fmt::Display for LessonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            LessonCategory::SourceVerification => "source_verification",
            LessonCategory::LanguageAnalysis => "language_analysis",
            LessonCategory::CrossReferencing => "cross_referencing",
            LessonCategory::EvidenceEvaluation => "evidence_evaluation",
            LessonCategory::BiasAwareness => "bias_awareness",
        };
        write!(f, "{tag}")
    }
}

/// A single educational tip with its category tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroLesson {
    /// The tip text.
    pub tip: String,
    /// Category tag from the closed set.
    pub category: LessonCategory,
}

const TIP_LANGUAGE: &str = "Sensational wording is a manipulation signal; verify this claim \
                            through an official channel before reacting to it.";
const TIP_AUTHORSHIP: &str = "Look for named authorship; content without an identifiable author \
                              deserves extra scrutiny.";
const TIP_CORROBORATION: &str = "Seek independent corroboration from at least two unrelated, \
                                 linkable sources before trusting this claim.";
const TIP_BIAS: &str = "When credible sources disagree, compare outlets with different \
                        incentives and check what each leaves out.";
const TIP_DEFAULT: &str = "Strong claims need strong evidence; confirm important information \
                           across multiple reliable sources before sharing it.";

/// Maps detected failure patterns to a single [`MicroLesson`].
#[derive(Debug, Clone, Default)]
pub struct LessonMapper;

impl LessonMapper {
    /// Creates a mapper.
    pub fn new() -> Self {
        Self
    }

    /// Picks the lesson for an analysis. First matching rule wins.
    ///
    /// `author_missing` is `true` when article metadata was supplied but
    /// named no author; bare text claims carry no authorship expectation.
    pub fn lesson(
        &self,
        phrases: &[SuspiciousPhrase],
        evidence: &[EvidenceItem],
        author_missing: bool,
    ) -> MicroLesson {
        if !phrases.is_empty() {
            return lesson(TIP_LANGUAGE, LessonCategory::LanguageAnalysis);
        }

        if author_missing {
            return lesson(TIP_AUTHORSHIP, LessonCategory::SourceVerification);
        }

        if evidence.iter().all(|item| item.url.is_none()) {
            return lesson(TIP_CORROBORATION, LessonCategory::CrossReferencing);
        }

        let supports = evidence.iter().any(|i| i.relation == Relation::Supports);
        let contradicts = evidence.iter().any(|i| i.relation == Relation::Contradicts);
        if supports && contradicts {
            return lesson(TIP_BIAS, LessonCategory::BiasAwareness);
        }

        lesson(TIP_DEFAULT, LessonCategory::EvidenceEvaluation)
    }
}

fn lesson(tip: &str, category: LessonCategory) -> MicroLesson {
    MicroLesson {
        tip: tip.to_string(),
        category,
    }
}
