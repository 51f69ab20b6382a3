//! Shared fixtures for integration tests.

use std::sync::Arc;

use claimlens::corpus::CorpusStore;
use claimlens::credibility::StaticTrustTable;
use claimlens::embedding::HashingEmbedder;
use claimlens::entailment::{LexicalClassifier, Relation};
use claimlens::evidence::{EvidenceItem, EvidenceProvider};
use claimlens::pipeline::{Pipeline, PipelineConfig};

/// Pipeline over the starter corpus and offline collaborators.
pub async fn offline_pipeline(providers: Vec<Arc<dyn EvidenceProvider>>) -> Pipeline {
    pipeline_over(CorpusStore::starter(), providers).await
}

/// Pipeline over an empty corpus, so only providers contribute evidence.
pub async fn corpusless_pipeline(providers: Vec<Arc<dyn EvidenceProvider>>) -> Pipeline {
    let empty = CorpusStore::from_records(vec![]).expect("empty corpus is valid");
    pipeline_over(empty, providers).await
}

async fn pipeline_over(corpus: CorpusStore, providers: Vec<Arc<dyn EvidenceProvider>>) -> Pipeline {
    Pipeline::build(
        corpus,
        Arc::new(HashingEmbedder::default()),
        Arc::new(LexicalClassifier::new()),
        Arc::new(StaticTrustTable::new()),
        providers,
        PipelineConfig::default(),
    )
    .await
    .expect("fixture pipeline builds")
}

/// Evidence item shorthand.
pub fn evidence(
    source: &str,
    url: Option<&str>,
    relation: Relation,
    confidence: f32,
) -> EvidenceItem {
    EvidenceItem {
        text: format!("statement from {source}"),
        source: source.to_string(),
        url: url.map(str::to_string),
        relation,
        relation_confidence: confidence,
        similarity_score: 0.5,
    }
}
