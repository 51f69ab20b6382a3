//! Claimlens demo binary: verify a claim from the command line.
//!
//! Reads the claim from arguments (or stdin when none are given), runs the
//! pipeline against the configured corpus, and prints the result as JSON.
//! With no `CLAIMLENS_EMBED_URL`/`CLAIMLENS_NLI_URL` configured it runs fully
//! offline on the hashing embedder and lexical classifier.

use std::io::Read;
use std::sync::Arc;

use claimlens::config::Config;
use claimlens::corpus::CorpusStore;
use claimlens::credibility::StaticTrustTable;
use claimlens::embedding::{Embedder, HashingEmbedder, RemoteEmbedder};
use claimlens::entailment::{EntailmentClassifier, LexicalClassifier, RemoteNliClassifier};
use claimlens::evidence::{EvidenceProvider, FactCheckSearchProvider};
use claimlens::pipeline::{Pipeline, PipelineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let corpus = match &config.corpus_path {
        Some(path) => CorpusStore::load(path)?,
        None => {
            tracing::info!("No CLAIMLENS_CORPUS_PATH configured, using the starter corpus");
            CorpusStore::starter()
        }
    };

    let embedder: Arc<dyn Embedder> = match &config.embed_url {
        Some(url) => Arc::new(RemoteEmbedder::new(url.clone(), config.embedding_dim)),
        None => {
            tracing::info!("No CLAIMLENS_EMBED_URL configured, using the hashing embedder");
            Arc::new(HashingEmbedder::new(config.embedding_dim))
        }
    };

    let classifier: Arc<dyn EntailmentClassifier> = match &config.nli_url {
        Some(url) => Arc::new(RemoteNliClassifier::new(url.clone())),
        None => {
            tracing::info!("No CLAIMLENS_NLI_URL configured, using the lexical classifier");
            Arc::new(LexicalClassifier::new())
        }
    };

    let mut providers: Vec<Arc<dyn EvidenceProvider>> = Vec::new();
    if let Some(url) = &config.factcheck_url {
        providers.push(Arc::new(FactCheckSearchProvider::new(
            url.clone(),
            config.factcheck_api_key.clone(),
        )));
    }

    let pipeline = Pipeline::build(
        corpus,
        embedder,
        classifier,
        Arc::new(StaticTrustTable::new()),
        providers,
        PipelineConfig::from_config(&config),
    )
    .await?;

    let input = read_input()?;
    let result = pipeline.verify(&input).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Claim text from argv, or stdin when no arguments were given.
fn read_input() -> anyhow::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
