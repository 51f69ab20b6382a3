//! Thin client for a fact-check claim-search endpoint.
//!
//! Wire contract follows the Google FactCheck Tools `claims:search` shape:
//! `GET {url}?query={claim}&key={api_key}` returning
//! `{"claims": [{"text", "claimReview": [{"publisher": {"name", "site"},
//! "url", "textualRating", "title"}]}]}`. Textual ratings are folded onto the
//! relation axis: a review rating the claim false contradicts it.

use async_trait::async_trait;
use serde::Deserialize;

use super::error::EvidenceError;
use super::provider::EvidenceProvider;
use super::types::EvidenceItem;
use crate::entailment::Relation;

/// Similarity reported for externally supplied evidence (retrieval closeness
/// to corpus text is undefined for these items).
const EXTERNAL_SIMILARITY: f32 = 0.5;

const RATING_CONFIDENCE: f32 = 0.85;

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<ClaimEntry>,
}

#[derive(Debug, Deserialize)]
struct ClaimEntry {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "claimReview", default)]
    claim_review: Vec<ClaimReview>,
}

#[derive(Debug, Deserialize)]
struct ClaimReview {
    #[serde(default)]
    publisher: Option<Publisher>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "textualRating", default)]
    textual_rating: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Publisher {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    site: Option<String>,
}

/// [`EvidenceProvider`] backed by a fact-check claim-search API.
#[derive(Debug, Clone)]
pub struct FactCheckSearchProvider {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl FactCheckSearchProvider {
    /// Creates a provider for `url` with an optional API key.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key,
        }
    }

    fn relation_from_rating(rating: &str) -> (Relation, f32) {
        let rating = rating.to_lowercase();
        let contradicting = [
            "false", "untrue", "pants on fire", "incorrect", "misleading", "fake", "debunked",
        ];
        let supporting = ["true", "correct", "accurate", "confirmed"];

        if contradicting.iter().any(|m| rating.contains(m)) {
            // "mostly false" etc. still lands here, which is the right side.
            (Relation::Contradicts, RATING_CONFIDENCE)
        } else if supporting.iter().any(|m| rating.contains(m)) {
            (Relation::Supports, RATING_CONFIDENCE)
        } else {
            (Relation::Neutral, 0.5)
        }
    }

    fn item_from_review(entry_text: Option<&str>, review: ClaimReview) -> Option<EvidenceItem> {
        let rating = review.textual_rating?;
        let (relation, relation_confidence) = Self::relation_from_rating(&rating);

        let text = review
            .title
            .or_else(|| entry_text.map(str::to_string))
            .unwrap_or_else(|| rating.clone());

        let source = review
            .publisher
            .and_then(|p| p.name.or(p.site))
            .unwrap_or_else(|| "fact-check".to_string());

        Some(EvidenceItem {
            text,
            source,
            url: review.url,
            relation,
            relation_confidence,
            similarity_score: EXTERNAL_SIMILARITY,
        })
    }
}

#[async_trait]
impl EvidenceProvider for FactCheckSearchProvider {
    fn name(&self) -> &str {
        "fact-check search"
    }

    async fn gather(&self, claim: &str) -> Result<Vec<EvidenceItem>, EvidenceError> {
        let mut query: Vec<(&str, &str)> = vec![("query", claim)];
        if let Some(ref key) = self.api_key {
            query.push(("key", key));
        }

        let response = self
            .client
            .get(&self.url)
            .query(&query)
            .send()
            .await
            .map_err(|e| EvidenceError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| EvidenceError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let parsed: ClaimSearchResponse =
            response
                .json()
                .await
                .map_err(|e| EvidenceError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        let items = parsed
            .claims
            .into_iter()
            .flat_map(|entry| {
                let entry_text = entry.text;
                entry
                    .claim_review
                    .into_iter()
                    .filter_map(move |review| {
                        Self::item_from_review(entry_text.as_deref(), review)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(items)
    }
}
