//! Evidence aggregation: corpus retrieval + entailment scoring + external
//! providers, merged into one deduplicated, ranked list.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::provider::EvidenceProvider;
use super::types::EvidenceItem;
use crate::constants::{
    DEFAULT_CLASSIFY_CONCURRENCY, DEFAULT_PROVIDER_TIMEOUT_MS, DEFAULT_TOP_K,
};
use crate::corpus::CorpusVerdict;
use crate::embedding::Embedder;
use crate::entailment::{EntailmentClassifier, Relation};
use crate::index::{IndexHandle, IndexHit};

/// Label for a degraded embedding provider.
pub const COMPONENT_EMBEDDING: &str = "embedding provider";
/// Label for a degraded vector index.
pub const COMPONENT_INDEX: &str = "vector index";
/// Label for a degraded entailment classifier.
pub const COMPONENT_CLASSIFIER: &str = "entailment classifier";

/// Confidence ceiling for the corpus-verdict fallback heuristic.
const FALLBACK_CONFIDENCE_CAP: f32 = 0.8;

/// Tunables for evidence aggregation.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Corpus candidates retrieved per claim.
    pub top_k: usize,
    /// Timeout applied to each classifier and provider call.
    pub provider_timeout: Duration,
    /// Bound on concurrent classifier calls.
    pub classify_concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            provider_timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
            classify_concurrency: DEFAULT_CLASSIFY_CONCURRENCY,
        }
    }
}

/// Aggregated evidence plus the components that degraded along the way.
#[derive(Debug, Clone, Default)]
pub struct AggregateOutcome {
    /// Deduplicated items, ranked by relation confidence then similarity.
    pub items: Vec<EvidenceItem>,
    /// Components that failed and were bypassed (empty on a clean run).
    pub degraded: Vec<String>,
}

/// Gathers and ranks evidence for a claim.
pub struct EvidenceAggregator {
    index: Arc<IndexHandle>,
    embedder: Arc<dyn Embedder>,
    classifier: Arc<dyn EntailmentClassifier>,
    providers: Vec<Arc<dyn EvidenceProvider>>,
    config: AggregatorConfig,
}

impl EvidenceAggregator {
    /// Creates an aggregator over the given collaborators.
    pub fn new(
        index: Arc<IndexHandle>,
        embedder: Arc<dyn Embedder>,
        classifier: Arc<dyn EntailmentClassifier>,
        providers: Vec<Arc<dyn EvidenceProvider>>,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            index,
            embedder,
            classifier,
            providers,
            config,
        }
    }

    /// Produces the evidence list for `claim`.
    ///
    /// Never fails: unavailable collaborators are skipped and named in
    /// [`AggregateOutcome::degraded`]; with nothing available the item list
    /// is empty and the verdict defaults toward UNVERIFIED downstream.
    pub async fn gather(&self, claim: &str) -> AggregateOutcome {
        let mut degraded = Vec::new();
        let mut items = Vec::new();

        match self.embedder.embed(claim).await {
            Ok(embedding) => {
                let snapshot = self.index.snapshot();
                match snapshot.search(&embedding, self.config.top_k) {
                    Ok(hits) => {
                        debug!(candidates = hits.len(), "Corpus candidates retrieved");
                        items.extend(self.classify_hits(claim, hits, &mut degraded).await);
                    }
                    Err(e) => {
                        warn!(error = %e, "Vector index query failed; skipping corpus evidence");
                        degraded.push(COMPONENT_INDEX.to_string());
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Embedding provider failed; skipping corpus evidence");
                degraded.push(COMPONENT_EMBEDDING.to_string());
            }
        }

        items.extend(self.gather_external(claim, &mut degraded).await);

        // Provider fan-out completes in arbitrary order; sort so degradation
        // reports (and the explanations built from them) are reproducible.
        degraded.sort();
        degraded.dedup();

        let items = rank(dedup(items));
        debug!(
            items = items.len(),
            degraded = degraded.len(),
            "Evidence aggregation complete"
        );
        AggregateOutcome { items, degraded }
    }

    /// Scores corpus candidates against the claim, concurrently and under the
    /// per-call timeout. Candidates whose classification fails or times out
    /// fall back to a heuristic derived from the record's known verdict.
    async fn classify_hits(
        &self,
        claim: &str,
        hits: Vec<IndexHit>,
        degraded: &mut Vec<String>,
    ) -> Vec<EvidenceItem> {
        let timeout = self.config.provider_timeout;

        let scored: Vec<(IndexHit, Option<(Relation, f32)>)> = stream::iter(hits)
            .map(|hit| {
                let classifier = self.classifier.clone();
                async move {
                    let outcome = tokio::time::timeout(
                        timeout,
                        classifier.classify(claim, &hit.record.statement),
                    )
                    .await;

                    match outcome {
                        Ok(Ok((relation, confidence))) => {
                            (hit, Some((relation, confidence.clamp(0.0, 1.0))))
                        }
                        Ok(Err(e)) => {
                            warn!(error = %e, "Entailment classification failed");
                            (hit, None)
                        }
                        Err(_) => {
                            warn!(timeout_ms = timeout.as_millis() as u64, "Entailment classification timed out");
                            (hit, None)
                        }
                    }
                }
            })
            .buffer_unordered(self.config.classify_concurrency.max(1))
            .collect()
            .await;

        let mut classifier_degraded = false;
        let items = scored
            .into_iter()
            .map(|(hit, outcome)| {
                let (relation, relation_confidence) = outcome.unwrap_or_else(|| {
                    classifier_degraded = true;
                    fallback_relation(hit.record.verdict, hit.score)
                });

                EvidenceItem {
                    text: hit.record.statement,
                    source: hit.record.source_name,
                    url: Some(hit.record.source_url),
                    relation,
                    relation_confidence,
                    similarity_score: hit.score,
                }
            })
            .collect();

        if classifier_degraded {
            degraded.push(COMPONENT_CLASSIFIER.to_string());
        }

        items
    }

    /// Fans out to external providers under the per-call timeout. A provider
    /// that errors or times out is named in `degraded` and contributes
    /// nothing; the rest still count.
    async fn gather_external(
        &self,
        claim: &str,
        degraded: &mut Vec<String>,
    ) -> Vec<EvidenceItem> {
        if self.providers.is_empty() {
            return Vec::new();
        }

        let timeout = self.config.provider_timeout;
        let outcomes: Vec<(String, Option<Vec<EvidenceItem>>)> =
            stream::iter(self.providers.iter().cloned())
                .map(|provider| async move {
                    let name = provider.name().to_string();
                    match tokio::time::timeout(timeout, provider.gather(claim)).await {
                        Ok(Ok(list)) => {
                            debug!(provider = %name, items = list.len(), "Provider evidence merged");
                            (name, Some(list))
                        }
                        Ok(Err(e)) => {
                            warn!(provider = %name, error = %e, "Evidence provider failed");
                            (name, None)
                        }
                        Err(_) => {
                            warn!(provider = %name, "Evidence provider timed out; accepting partial results");
                            (name, None)
                        }
                    }
                })
                .buffer_unordered(self.providers.len())
                .collect()
                .await;

        let mut items = Vec::new();
        for (name, outcome) in outcomes {
            match outcome {
                Some(list) => {
                    for mut item in list {
                        debug_assert!(
                            (0.0..=1.0).contains(&item.relation_confidence)
                                && (0.0..=1.0).contains(&item.similarity_score),
                            "provider '{name}' violated the evidence item contract"
                        );
                        item.relation_confidence = item.relation_confidence.clamp(0.0, 1.0);
                        item.similarity_score = item.similarity_score.clamp(0.0, 1.0);
                        items.push(item);
                    }
                }
                None => degraded.push(name),
            }
        }
        items
    }
}

/// Maps a corpus record's ground-truth verdict to a stance toward a claim
/// that retrieval judged similar to the record's statement.
fn fallback_relation(verdict: CorpusVerdict, similarity: f32) -> (Relation, f32) {
    match verdict {
        CorpusVerdict::True => (
            Relation::Supports,
            (similarity + 0.1).min(FALLBACK_CONFIDENCE_CAP),
        ),
        CorpusVerdict::False => (
            Relation::Contradicts,
            (similarity + 0.1).min(FALLBACK_CONFIDENCE_CAP),
        ),
        CorpusVerdict::Mixed => (Relation::Neutral, 0.5),
    }
}

/// Merges items whose `source`+`url` pair is identical, keeping the higher
/// relation confidence.
fn dedup(items: Vec<EvidenceItem>) -> Vec<EvidenceItem> {
    let mut merged: HashMap<(String, Option<String>), EvidenceItem> = HashMap::new();
    for item in items {
        match merged.entry(item.dedup_key()) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                let incumbent = slot.get();
                let wins = item
                    .relation_confidence
                    .total_cmp(&incumbent.relation_confidence)
                    .then(item.similarity_score.total_cmp(&incumbent.similarity_score))
                    .then_with(|| incumbent.text.cmp(&item.text))
                    .is_gt();
                if wins {
                    slot.insert(item);
                }
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }
    merged.into_values().collect()
}

/// Orders by relation confidence descending, ties by similarity descending.
/// Exact ties fall back to source/text so the ordering is total and the
/// output reproducible regardless of map iteration order.
fn rank(mut items: Vec<EvidenceItem>) -> Vec<EvidenceItem> {
    items.sort_by(|a, b| {
        b.relation_confidence
            .total_cmp(&a.relation_confidence)
            .then(b.similarity_score.total_cmp(&a.similarity_score))
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.text.cmp(&b.text))
    });
    items
}
