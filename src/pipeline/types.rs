use serde::{Deserialize, Serialize};

use crate::credibility::CredibilityFingerprint;
use crate::evidence::EvidenceItem;
use crate::language::SuspiciousPhrase;
use crate::lesson::MicroLesson;
use crate::verdict::Verdict;

/// Metadata accompanying a fetched article body.
///
/// Bare text claims have no authorship expectation; supply this only when
/// the input came from a document whose byline/date were looked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Named author, if the document carried one.
    pub author: Option<String>,
    /// Publication date string, if the document carried one.
    pub published: Option<String>,
}

impl ArticleMeta {
    /// Returns `true` when no non-blank author is present.
    pub fn author_missing(&self) -> bool {
        self.author
            .as_deref()
            .is_none_or(|author| author.trim().is_empty())
    }
}

/// Terminal output of one pipeline invocation. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// The claim the pipeline actually verified.
    pub extracted_claim: String,
    /// Final categorical verdict.
    pub verdict: Verdict,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
    /// Deterministic explanation of the verdict.
    pub explanation: String,
    /// Ranked reasons, at most three.
    pub reasons: Vec<String>,
    /// The evidentiary basis, deduplicated and ranked.
    pub evidence: Vec<EvidenceItem>,
    /// Multi-factor credibility summary.
    pub fingerprint: CredibilityFingerprint,
    /// Flagged spans of the original input, sorted and non-overlapping.
    pub suspicious_phrases: Vec<SuspiciousPhrase>,
    /// One educational tip for this failure pattern.
    pub lesson: MicroLesson,
    /// Components that degraded during this invocation (empty on clean runs).
    pub degraded: Vec<String>,
}
