//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values from the primary constants here to avoid drift.
//! The threshold constants are defaults; the tunable copies live in
//! [`PipelineConfig`](crate::pipeline::PipelineConfig),
//! [`VerdictThresholds`](crate::verdict::VerdictThresholds) and
//! [`ScoreWeights`](crate::credibility::ScoreWeights) so tests can inject
//! alternatives.

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default number of corpus candidates retrieved per claim.
pub const DEFAULT_TOP_K: usize = 5;

/// Net entailment signal at or above which a claim can be called likely true.
pub const NET_SUPPORT_THRESHOLD: f32 = 0.3;

/// Overall credibility required alongside a positive net signal.
pub const TRUE_SCORE_FLOOR: f32 = 0.5;

/// Overall credibility below which a negative net signal is trusted.
pub const FALSE_SCORE_CEILING: f32 = 0.6;

/// Overall credibility below which unsourced evidence cannot verify a claim.
pub const UNSOURCED_SCORE_FLOOR: f32 = 0.45;

/// Relation confidence treated as "high" when detecting conflicting evidence.
pub const HIGH_CONFIDENCE: f32 = 0.7;

/// Default per-request timeout for classifier and provider calls.
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 4_000;

/// Default bound on concurrent entailment calls during candidate scoring.
pub const DEFAULT_CLASSIFY_CONCURRENCY: usize = 8;

/// Default capacity of the identical-claim memoization cache (0 disables it).
pub const DEFAULT_MEMO_CAPACITY: u64 = 1_024;

/// Inputs at or under this many bytes that already read as a single
/// declarative sentence are passed through the extractor unchanged.
pub const SINGLE_CLAIM_MAX_LEN: usize = 250;

/// Hard cap applied when the extractor falls back to truncating raw input.
pub const FALLBACK_TRUNCATE_LEN: usize = 200;

/// Trust weight assumed for domains absent from the trust table.
pub const NEUTRAL_TRUST: f32 = 0.5;
