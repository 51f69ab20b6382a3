//! The claim verification pipeline.
//!
//! [`Pipeline::verify`] is the single synchronous contract: raw text in,
//! [`VerificationResult`] out. It is total — empty or unusable input yields
//! an UNVERIFIED result, and collaborator failures degrade rather than
//! abort. All model/index state is passed in explicitly; there are no
//! ambient globals.

pub mod types;


pub use types::{ArticleMeta, VerificationResult};

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::DEFAULT_MEMO_CAPACITY;
use crate::corpus::CorpusStore;
use crate::credibility::{CredibilityScorer, DomainTrust, ScoreWeights};
use crate::embedding::Embedder;
use crate::entailment::EntailmentClassifier;
use crate::evidence::{AggregatorConfig, EvidenceAggregator, EvidenceProvider};
use crate::extract::ClaimExtractor;
use crate::hashing::hash_to_u64;
use crate::index::{IndexError, IndexHandle};
use crate::language::LanguageRiskDetector;
use crate::lesson::LessonMapper;
use crate::verdict::{VerdictEngine, VerdictThresholds};

/// Pipeline tunables; every heuristic threshold is injectable here.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Evidence aggregation settings.
    pub aggregator: AggregatorConfig,
    /// Credibility weights.
    pub weights: ScoreWeights,
    /// Verdict decision thresholds.
    pub thresholds: VerdictThresholds,
    /// Identical-claim memoization capacity (`0` disables it).
    pub memo_capacity: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            aggregator: AggregatorConfig::default(),
            weights: ScoreWeights::default(),
            thresholds: VerdictThresholds::default(),
            memo_capacity: DEFAULT_MEMO_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Derives pipeline settings from the environment-backed [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            aggregator: AggregatorConfig {
                top_k: config.top_k,
                provider_timeout: config.provider_timeout(),
                ..AggregatorConfig::default()
            },
            memo_capacity: config.memo_capacity,
            ..Self::default()
        }
    }
}

/// One-stop claim verification over explicit collaborators.
pub struct Pipeline {
    extractor: ClaimExtractor,
    detector: LanguageRiskDetector,
    scorer: CredibilityScorer,
    engine: VerdictEngine,
    mapper: LessonMapper,
    aggregator: EvidenceAggregator,
    index: Arc<IndexHandle>,
    corpus: Arc<CorpusStore>,
    embedder: Arc<dyn Embedder>,
    memo: Option<Cache<u64, Arc<VerificationResult>>>,
}

impl Pipeline {
    /// Builds the vector index from `corpus` and assembles the pipeline.
    pub async fn build(
        corpus: CorpusStore,
        embedder: Arc<dyn Embedder>,
        classifier: Arc<dyn EntailmentClassifier>,
        trust: Arc<dyn DomainTrust>,
        providers: Vec<Arc<dyn EvidenceProvider>>,
        config: PipelineConfig,
    ) -> Result<Self, IndexError> {
        let index = Arc::new(IndexHandle::build(&corpus, embedder.as_ref()).await?);
        Ok(Self::with_index(
            index, corpus, embedder, classifier, trust, providers, config,
        ))
    }

    /// Assembles the pipeline over an already-built index handle.
    pub fn with_index(
        index: Arc<IndexHandle>,
        corpus: CorpusStore,
        embedder: Arc<dyn Embedder>,
        classifier: Arc<dyn EntailmentClassifier>,
        trust: Arc<dyn DomainTrust>,
        providers: Vec<Arc<dyn EvidenceProvider>>,
        config: PipelineConfig,
    ) -> Self {
        let aggregator = EvidenceAggregator::new(
            index.clone(),
            embedder.clone(),
            classifier,
            providers,
            config.aggregator.clone(),
        );

        let memo = if config.memo_capacity > 0 {
            Some(Cache::new(config.memo_capacity))
        } else {
            None
        };

        info!(
            corpus = corpus.len(),
            memo_capacity = config.memo_capacity,
            "Pipeline assembled"
        );

        Self {
            extractor: ClaimExtractor::new(),
            detector: LanguageRiskDetector::new(),
            scorer: CredibilityScorer::new(trust, config.weights),
            engine: VerdictEngine::new(config.thresholds),
            mapper: LessonMapper::new(),
            aggregator,
            index,
            corpus: Arc::new(corpus),
            embedder,
            memo,
        }
    }

    /// Verifies a raw text claim. Total: never fails, never panics on input.
    pub async fn verify(&self, raw_input: &str) -> VerificationResult {
        if raw_input.trim().is_empty() {
            return self.empty_input_result(raw_input);
        }

        let key = hash_to_u64(raw_input.as_bytes());
        if let Some(memo) = &self.memo {
            if let Some(hit) = memo.get(&key) {
                debug!("Identical claim served from memo");
                return (*hit).clone();
            }
        }

        let result = self.run(raw_input, None).await;

        if let Some(memo) = &self.memo {
            memo.insert(key, Arc::new(result.clone()));
        }
        result
    }

    /// Verifies a fetched article body together with its metadata.
    ///
    /// Not memoized: the metadata participates in lesson selection.
    pub async fn verify_article(&self, body: &str, meta: &ArticleMeta) -> VerificationResult {
        if body.trim().is_empty() {
            return self.empty_input_result(body);
        }
        self.run(body, Some(meta)).await
    }

    /// Rebuilds the vector index from the corpus and swaps it in atomically.
    pub async fn rebuild_index(&self) -> Result<usize, IndexError> {
        self.index
            .rebuild(&self.corpus, self.embedder.as_ref())
            .await
    }

    /// Returns the corpus this pipeline retrieves from.
    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    async fn run(&self, raw_input: &str, meta: Option<&ArticleMeta>) -> VerificationResult {
        let claim = self.extractor.extract(raw_input);
        if claim.is_empty() {
            return self.empty_input_result(raw_input);
        }
        debug!(claim = %claim, "Claim extracted");

        let outcome = self.aggregator.gather(&claim).await;
        let phrases = self.detector.scan(raw_input);
        let fingerprint = self.scorer.fingerprint(raw_input, &outcome.items, &phrases);
        let decision =
            self.engine
                .decide(&outcome.items, &fingerprint, &phrases, &outcome.degraded);

        let author_missing = meta.is_some_and(ArticleMeta::author_missing);
        let lesson = self.mapper.lesson(&phrases, &outcome.items, author_missing);

        info!(
            verdict = %decision.verdict,
            confidence = decision.confidence,
            evidence = outcome.items.len(),
            "Verification complete"
        );

        VerificationResult {
            extracted_claim: claim,
            verdict: decision.verdict,
            confidence: decision.confidence,
            explanation: decision.explanation,
            reasons: decision.reasons,
            evidence: outcome.items,
            fingerprint,
            suspicious_phrases: phrases,
            lesson,
            degraded: outcome.degraded,
        }
    }

    /// UNVERIFIED result for empty/unusable input; the contract stays total.
    fn empty_input_result(&self, raw_input: &str) -> VerificationResult {
        let fingerprint = self.scorer.fingerprint(raw_input, &[], &[]);
        VerificationResult {
            extracted_claim: String::new(),
            verdict: crate::verdict::Verdict::Unverified,
            confidence: 0.0,
            explanation: "Input contained no verifiable text.".to_string(),
            reasons: vec!["no verifiable claim found in the input".to_string()],
            evidence: Vec::new(),
            fingerprint,
            suspicious_phrases: Vec::new(),
            lesson: self.mapper.lesson(&[], &[], false),
            degraded: Vec::new(),
        }
    }
}
