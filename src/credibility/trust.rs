//! Domain-trust lookup.

use crate::constants::NEUTRAL_TRUST;

/// Maps a source domain to a trust weight in `[0, 1]`.
pub trait DomainTrust: Send + Sync {
    /// Returns the trust weight for `domain` (lowercased host, no `www.`).
    fn trust(&self, domain: &str) -> f32;
}

/// Built-in static trust table.
///
/// Entries match by suffix so subdomains inherit their parent's weight
/// (`climate.nasa.gov` scores as `nasa.gov`). Unknown domains score
/// [`NEUTRAL_TRUST`].
#[derive(Debug, Clone)]
pub struct StaticTrustTable {
    default_trust: f32,
}

const TRUST_ENTRIES: &[(&str, f32)] = &[
    ("reuters.com", 0.95),
    ("apnews.com", 0.95),
    ("factcheck.org", 0.95),
    ("nature.com", 0.95),
    ("science.org", 0.95),
    ("snopes.com", 0.92),
    ("bbc.com", 0.90),
    ("nytimes.com", 0.90),
    ("npr.org", 0.90),
    ("politifact.com", 0.90),
    ("who.int", 0.90),
    ("cdc.gov", 0.90),
    ("nih.gov", 0.90),
    ("nasa.gov", 0.90),
    ("washingtonpost.com", 0.88),
    ("pbs.org", 0.88),
    ("cnn.com", 0.85),
    ("wikipedia.org", 0.75),
    ("beforeitsnews.com", 0.25),
    ("naturalnews.com", 0.20),
    ("infowars.com", 0.15),
];

impl Default for StaticTrustTable {
    fn default() -> Self {
        Self {
            default_trust: NEUTRAL_TRUST,
        }
    }
}

impl StaticTrustTable {
    /// Creates the table with the standard neutral default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table with a custom weight for unknown domains.
    pub fn with_default_trust(default_trust: f32) -> Self {
        Self {
            default_trust: default_trust.clamp(0.0, 1.0),
        }
    }
}

impl DomainTrust for StaticTrustTable {
    fn trust(&self, domain: &str) -> f32 {
        let domain = domain.to_lowercase();
        for (entry, weight) in TRUST_ENTRIES {
            if domain == *entry || domain.ends_with(&format!(".{entry}")) {
                return *weight;
            }
        }
        self.default_trust
    }
}
