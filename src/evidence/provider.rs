use async_trait::async_trait;

use super::error::EvidenceError;
use super::types::EvidenceItem;

/// An opaque evidence source.
///
/// Providers return pre-formed [`EvidenceItem`]s; the aggregator neither
/// knows nor cares how they were produced, only that they conform to the
/// item contract. Corpus retrieval is handled separately by the aggregator
/// itself — providers model external search surfaces (fact-check search,
/// news search, web search).
#[async_trait]
pub trait EvidenceProvider: Send + Sync {
    /// Short provider name used in logs and degradation reports.
    fn name(&self) -> &str;

    /// Gathers evidence for `claim`.
    async fn gather(&self, claim: &str) -> Result<Vec<EvidenceItem>, EvidenceError>;
}
