//! Manipulation-pattern scanning over claim text.
//!
//! Matches a fixed lexicon of sensational markers plus excessive punctuation
//! and ALL-CAPS emphasis, returning byte offsets into the original text so
//! callers can highlight the exact spans. Matching is ASCII-case-insensitive
//! but offset-preserving; overlapping candidates resolve to the longest match
//! starting earliest.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Sensational/manipulative markers (matched case-insensitively).
const LEXICON: &[&str] = &[
    "shocking",
    "unbelievable",
    "incredible",
    "amazing",
    "breaking",
    "urgent",
    "must see",
    "revealed",
    "exposed",
    "secret",
    "hidden",
    "they don't want you to know",
    "mainstream media",
    "cover-up",
    "conspiracy",
    "hoax",
    "fake news",
    "lies",
    "deception",
    "exclusive",
    "insider",
    "leaked",
    "bombshell",
];

/// Acronyms exempt from the ALL-CAPS detector.
const CAPS_ALLOWLIST: &[&str] = &[
    "USA", "FBI", "CIA", "WHO", "NASA", "CEO", "GDP", "NATO", "COVID", "MMR", "BBC", "NIH", "CDC",
];

/// Reason attached to lexicon matches.
pub const REASON_SENSATIONAL: &str = "sensational or emotionally charged language";
/// Reason attached to `!!`-style runs.
pub const REASON_PUNCTUATION: &str = "excessive punctuation";
/// Reason attached to ALL-CAPS words.
pub const REASON_CAPS: &str = "excessive capitalization";

/// A flagged span of the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousPhrase {
    /// The flagged text, in its original casing.
    pub phrase: String,
    /// Byte offset of the span start (a char boundary of the input).
    pub start_pos: usize,
    /// Byte offset one past the span end (a char boundary of the input).
    pub end_pos: usize,
    /// Why the span was flagged.
    pub reason: String,
}

/// Scans text for manipulation patterns.
#[derive(Debug, Clone, Default)]
pub struct LanguageRiskDetector;

struct Candidate {
    start: usize,
    end: usize,
    reason: &'static str,
}

impl LanguageRiskDetector {
    /// Creates a detector with the built-in lexicon.
    pub fn new() -> Self {
        Self
    }

    /// Returns non-overlapping flagged spans, sorted by start offset.
    pub fn scan(&self, text: &str) -> Vec<SuspiciousPhrase> {
        let mut candidates = Vec::new();
        lexicon_candidates(text, &mut candidates);
        caps_candidates(text, &mut candidates);
        punctuation_candidates(text, &mut candidates);

        // Longest match starting earliest wins; the stable sort keeps lexicon
        // hits ahead of same-span caps hits.
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut phrases: Vec<SuspiciousPhrase> = Vec::new();
        let mut last_end = 0usize;
        for c in candidates {
            if c.start < last_end {
                continue;
            }
            debug_assert!(text.is_char_boundary(c.start) && text.is_char_boundary(c.end));
            phrases.push(SuspiciousPhrase {
                phrase: text[c.start..c.end].to_string(),
                start_pos: c.start,
                end_pos: c.end,
                reason: c.reason.to_string(),
            });
            last_end = c.end;
        }

        phrases
    }
}

/// Language-risk score in `[0, 1]` for `text` given its flagged spans.
///
/// Uses flagged-byte density with saturating scaling, so risk reflects how
/// much of the text is manipulative rather than the raw match count.
pub fn risk_score(text: &str, phrases: &[SuspiciousPhrase]) -> f32 {
    if text.is_empty() || phrases.is_empty() {
        return 0.0;
    }

    let flagged: usize = phrases.iter().map(|p| p.end_pos - p.start_pos).sum();
    let density = flagged as f32 / text.len() as f32;
    (1.0 - (-3.0 * density).exp()).clamp(0.0, 1.0)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

fn lexicon_candidates(text: &str, out: &mut Vec<Candidate>) {
    let bytes = text.as_bytes();
    for term in LEXICON {
        let term_bytes = term.as_bytes();
        if term_bytes.len() > bytes.len() {
            continue;
        }
        for start in 0..=(bytes.len() - term_bytes.len()) {
            let end = start + term_bytes.len();
            if !bytes[start..end].eq_ignore_ascii_case(term_bytes) {
                continue;
            }
            let bounded_left = start == 0 || !is_word_byte(bytes[start - 1]);
            let bounded_right = end == bytes.len() || !is_word_byte(bytes[end]);
            if bounded_left && bounded_right {
                out.push(Candidate {
                    start,
                    end,
                    reason: REASON_SENSATIONAL,
                });
            }
        }
    }
}

fn caps_candidates(text: &str, out: &mut Vec<Candidate>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word = &text[start..i];
            if word.len() >= 3
                && word.bytes().all(|b| b.is_ascii_uppercase())
                && !CAPS_ALLOWLIST.contains(&word)
            {
                out.push(Candidate {
                    start,
                    end: i,
                    reason: REASON_CAPS,
                });
            }
        } else {
            // Skip to the next ASCII-alphabetic byte; multi-byte chars are
            // passed over without ever splitting a char boundary.
            i += 1;
        }
    }
}

fn punctuation_candidates(text: &str, out: &mut Vec<Candidate>) {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'!' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'!' {
                i += 1;
            }
            if i - start >= 2 {
                out.push(Candidate {
                    start,
                    end: i,
                    reason: REASON_PUNCTUATION,
                });
            }
        } else {
            i += 1;
        }
    }
}
