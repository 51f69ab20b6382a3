use serde::{Deserialize, Serialize};

/// Final categorical verdict on a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Evidence largely supports the claim.
    LikelyTrue,
    /// Evidence points both ways or is inconclusive.
    Mixed,
    /// Evidence largely contradicts the claim.
    LikelyFalse,
    /// No usable evidence, or evidence too weak to verify.
    Unverified,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::LikelyTrue => write!(f, "LIKELY_TRUE"),
            Verdict::Mixed => write!(f, "MIXED"),
            Verdict::LikelyFalse => write!(f, "LIKELY_FALSE"),
            Verdict::Unverified => write!(f, "UNVERIFIED"),
        }
    }
}

/// Output of the verdict engine, before the lesson is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictDecision {
    /// The categorical verdict.
    pub verdict: Verdict,
    /// Caller-facing confidence in `[0, 1]`.
    pub confidence: f32,
    /// Deterministic natural-language rendering of the decision.
    pub explanation: String,
    /// Ranked reasons, at most three.
    pub reasons: Vec<String>,
}
