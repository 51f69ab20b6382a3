//! Thin client for an NLI inference endpoint.
//!
//! Wire contract: `POST {url}` with `{"premise": "...", "hypothesis": "..."}`,
//! response is a JSON array of `{"label": "...", "score": 0.0..1.0}` entries.
//! The highest-scoring label wins; `ENTAILMENT`/`CONTRADICTION` map onto
//! [`Relation::Supports`]/[`Relation::Contradicts`], anything else is neutral.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{EntailmentClassifier, EntailmentError, Relation};

#[derive(Serialize)]
struct NliRequest<'a> {
    premise: &'a str,
    hypothesis: &'a str,
}

#[derive(Deserialize)]
struct NliLabel {
    label: String,
    score: f32,
}

/// [`EntailmentClassifier`] backed by a remote NLI endpoint.
#[derive(Debug, Clone)]
pub struct RemoteNliClassifier {
    client: reqwest::Client,
    url: String,
}

impl RemoteNliClassifier {
    /// Creates a client for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Returns the configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_label(label: &str) -> Relation {
        if label.eq_ignore_ascii_case("entailment") {
            Relation::Supports
        } else if label.eq_ignore_ascii_case("contradiction") {
            Relation::Contradicts
        } else {
            Relation::Neutral
        }
    }
}

#[async_trait]
impl EntailmentClassifier for RemoteNliClassifier {
    async fn classify(
        &self,
        claim: &str,
        evidence: &str,
    ) -> Result<(Relation, f32), EntailmentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&NliRequest {
                premise: evidence,
                hypothesis: claim,
            })
            .send()
            .await
            .map_err(|e| EntailmentError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| EntailmentError::RequestFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let labels: Vec<NliLabel> =
            response
                .json()
                .await
                .map_err(|e| EntailmentError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        let top = labels
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| EntailmentError::InvalidResponse {
                reason: "empty label list".to_string(),
            })?;

        Ok((Self::map_label(&top.label), top.score.clamp(0.0, 1.0)))
    }
}
