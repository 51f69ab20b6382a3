//! Claim extraction: reduce raw input to one declarative factual assertion.
//!
//! Short single-sentence input passes through unchanged. Longer input first
//! tries reporting-marker extraction ("according to ...", "studies show that
//! ..."), then falls back to scoring sentences by factual-marker density and
//! position. Extraction fails soft: downstream stages always receive a
//! non-empty string for non-empty input.


use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{FALLBACK_TRUNCATE_LEN, SINGLE_CLAIM_MAX_LEN};

/// Sentence score below which extraction falls back to positional heuristics.
const MIN_CLAIM_SCORE: f32 = 0.1;

/// Character window a marker-extracted claim must land in.
const MARKER_CLAIM_RANGE: std::ops::Range<usize> = 20..500;

/// Reporting markers whose remainder usually is the claim.
const REPORTING_MARKERS: &[&str] = &[
    "according to",
    "studies show that",
    "research indicates",
    "it is reported that",
    "scientists claim",
    "experts say",
    "the fact is",
    "it has been proven that",
];

/// Single-word factual markers, matched on token boundaries.
const FACTUAL_TOKENS: &[&str] = &[
    "is", "are", "was", "were", "will", "would", "can", "could", "shows", "proves", "indicates",
    "reveals", "confirms", "study", "research", "report", "data",
];

/// Substring markers for non-claims (questions, instructions, chrome).
const ANTI_MARKERS: &[&str] = &["?", "how to", "what is", "click here", "subscribe"];

/// Extracts the primary factual claim from free text or an article body.
#[derive(Debug, Clone, Default)]
pub struct ClaimExtractor;

impl ClaimExtractor {
    /// Creates an extractor.
    pub fn new() -> Self {
        Self
    }

    /// Returns the primary claim. Never empty for non-empty input.
    pub fn extract(&self, raw: &str) -> String {
        let cleaned = clean_text(raw);
        if cleaned.is_empty() {
            return cleaned;
        }

        let sentences: Vec<&str> = cleaned
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.len() <= 1
            && cleaned.len() <= SINGLE_CLAIM_MAX_LEN
            && !cleaned.ends_with('?')
        {
            return cleaned;
        }

        if let Some(claim) = extract_with_markers(&sentences) {
            debug!(claim = %claim, "Claim extracted via reporting marker");
            return claim;
        }

        let scored = best_sentence(&sentences);
        if let Some((sentence, score)) = scored {
            if score >= MIN_CLAIM_SCORE {
                debug!(score, "Claim extracted via sentence scoring");
                return sentence.to_string();
            }
        }

        // Fail soft: first substantial sentence, first sentence, or a
        // truncated slice of the cleaned input.
        sentences
            .iter()
            .find(|s| s.split_whitespace().count() > 5)
            .or_else(|| sentences.first())
            .map(|s| s.to_string())
            .unwrap_or_else(|| truncate_at_boundary(&cleaned, FALLBACK_TRUNCATE_LEN).to_string())
    }
}

/// Collapses whitespace and strips control characters.
fn clean_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

fn extract_with_markers(sentences: &[&str]) -> Option<String> {
    for sentence in sentences {
        for marker in REPORTING_MARKERS {
            let Some(pos) = find_ignore_ascii_case(sentence, marker) else {
                continue;
            };

            let mut remainder = &sentence[pos + marker.len()..];
            // "According to <source>, <claim>" — skip past the attribution.
            if *marker == "according to" {
                if let Some(comma) = remainder.find(',') {
                    remainder = &remainder[comma + 1..];
                }
            }

            let candidate = remainder.trim().trim_end_matches('.').trim();
            if MARKER_CLAIM_RANGE.contains(&candidate.len()) {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

fn best_sentence<'a>(sentences: &[&'a str]) -> Option<(&'a str, f32)> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| (*sentence, score_sentence(sentence, position, total)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

/// Heuristic claim-likelihood score; clamped at zero.
fn score_sentence(sentence: &str, position: usize, total: usize) -> f32 {
    let lower = sentence.to_lowercase();
    let tokens: std::collections::HashSet<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let mut score = 0.0;
    for marker in FACTUAL_TOKENS {
        if tokens.contains(marker) {
            score += 0.1;
        }
    }
    if lower.contains("according to") {
        score += 0.1;
    }
    for marker in ANTI_MARKERS {
        if lower.contains(marker) {
            score -= 0.2;
        }
    }

    let words = sentence.split_whitespace().count();
    if (10..=50).contains(&words) {
        score += 0.2;
    }

    if score <= 0.0 {
        return 0.0;
    }

    // Leads carry the main claim in article bodies; the bonus only ranks
    // sentences that already look like claims.
    if total > 1 {
        score += 0.15 * (total - position) as f32 / total as f32;
    }

    score
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=(haystack.len() - needle.len()))
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Truncates to at most `max` bytes without splitting a char.
fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
