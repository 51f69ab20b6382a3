use async_trait::async_trait;

use super::error::EvidenceError;
use super::provider::EvidenceProvider;
use super::types::EvidenceItem;

/// Provider that returns a fixed list of items.
#[derive(Debug, Clone)]
pub struct StaticEvidenceProvider {
    name: String,
    items: Vec<EvidenceItem>,
}

impl StaticEvidenceProvider {
    pub fn new(name: impl Into<String>, items: Vec<EvidenceItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

#[async_trait]
impl EvidenceProvider for StaticEvidenceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn gather(&self, _claim: &str) -> Result<Vec<EvidenceItem>, EvidenceError> {
        Ok(self.items.clone())
    }
}

/// Provider that always fails, for degradation-path tests.
#[derive(Debug, Clone)]
pub struct FailingEvidenceProvider {
    name: String,
}

impl FailingEvidenceProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl EvidenceProvider for FailingEvidenceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn gather(&self, _claim: &str) -> Result<Vec<EvidenceItem>, EvidenceError> {
        Err(EvidenceError::Unavailable {
            reason: "mock provider configured to fail".to_string(),
        })
    }
}

/// Provider that sleeps past any reasonable timeout before answering.
#[derive(Debug, Clone)]
pub struct HangingEvidenceProvider {
    name: String,
    delay: std::time::Duration,
    items: Vec<EvidenceItem>,
}

impl HangingEvidenceProvider {
    pub fn new(
        name: impl Into<String>,
        delay: std::time::Duration,
        items: Vec<EvidenceItem>,
    ) -> Self {
        Self {
            name: name.into(),
            delay,
            items,
        }
    }
}

#[async_trait]
impl EvidenceProvider for HangingEvidenceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn gather(&self, _claim: &str) -> Result<Vec<EvidenceItem>, EvidenceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.items.clone())
    }
}
