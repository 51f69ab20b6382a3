use serde::{Deserialize, Serialize};

use crate::entailment::Relation;

/// A retrieved or supplied statement judged against a claim.
///
/// `relation_confidence` and `similarity_score` are independent axes:
/// similarity measures closeness to corpus text at retrieval time, while the
/// relation is the classifier's judgment of logical stance, regardless of how
/// the pair was retrieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Evidence text shown to the caller.
    pub text: String,
    /// Human-readable source name.
    pub source: String,
    /// Source URL, when the provider has one.
    pub url: Option<String>,
    /// Logical stance toward the claim.
    pub relation: Relation,
    /// Classifier confidence in the relation, in `[0, 1]`.
    pub relation_confidence: f32,
    /// Retrieval closeness, normalized to `[0, 1]`.
    pub similarity_score: f32,
}

impl EvidenceItem {
    /// Returns the registrable-ish domain of this item's URL, lowercased and
    /// stripped of a leading `www.`.
    pub fn domain(&self) -> Option<String> {
        self.url.as_deref().and_then(source_domain)
    }

    /// Dedup key: identical `source`+`url` pairs are the same evidence.
    pub(crate) fn dedup_key(&self) -> (String, Option<String>) {
        (self.source.to_lowercase(), self.url.clone())
    }
}

/// Extracts a lowercased host (minus `www.`) from a URL string.
pub fn source_domain(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}
