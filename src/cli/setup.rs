use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use super::QuestionArgs;
use crate::config::AppConfig;
use crate::infrastructure::agents::{AnswerDrafter, RelevanceClassifier};
use crate::infrastructure::llm::LlmProviderFactory;
use crate::infrastructure::logging;
use crate::infrastructure::retrieval::{ChunkingConfig, CorpusLoader, InMemoryRetriever};
use crate::infrastructure::services::QuestionAnsweringService;

/// Load configuration, apply CLI overrides and initialize logging
pub(super) fn load_config(args: &QuestionArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;

    if let Some(corpus) = &args.corpus {
        config.retrieval.corpus_dir = corpus.clone();
    }
    if let Some(top_k) = args.top_k {
        config.retrieval.top_k = top_k;
    }

    config.validate()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Build the pipeline over the configured corpus
pub(super) async fn build_service(config: &AppConfig) -> anyhow::Result<QuestionAnsweringService> {
    let api_key = config.inference.resolve_api_key()?;
    let provider = LlmProviderFactory::create(&config.inference, &api_key)?;
    let model = config.inference.model();

    let loader = CorpusLoader::new(ChunkingConfig::from(&config.retrieval))?;
    let chunks = loader.load_dir(&config.retrieval.corpus_dir).await?;
    let retriever = InMemoryRetriever::new(chunks, config.retrieval.max_results);

    info!(
        "Using {} model {} over {} chunks",
        provider.provider_name(),
        model,
        retriever.len()
    );

    Ok(QuestionAnsweringService::new(
        RelevanceClassifier::new(provider.clone(), model),
        AnswerDrafter::new(provider, model),
        Arc::new(retriever),
        config.retrieval.top_k,
    ))
}
