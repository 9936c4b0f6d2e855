//! Single inference round trip shared by both agents

use std::time::Instant;

use tracing::debug;

use crate::domain::{DomainError, GenerationConfig, LlmProvider, LlmRequest};
use crate::infrastructure::observability::{record_llm_request, LlmRequestMetricParams};

/// Send one prompt with fixed sampling settings and return the raw text
pub(super) async fn complete(
    provider: &dyn LlmProvider,
    model: &str,
    agent: &str,
    prompt: String,
    config: GenerationConfig,
) -> Result<String, DomainError> {
    let request = LlmRequest::builder()
        .user(prompt)
        .temperature(config.temperature)
        .max_tokens(config.max_output_tokens)
        .build();

    let started = Instant::now();
    let result = provider.chat(model, request).await;
    let duration = started.elapsed();

    let usage = result.as_ref().ok().and_then(|r| r.usage.clone());
    record_llm_request(LlmRequestMetricParams {
        provider: provider.provider_name(),
        model,
        agent,
        duration,
        success: result.is_ok(),
        input_tokens: usage.as_ref().map(|u| u64::from(u.prompt_tokens)),
        output_tokens: usage.as_ref().map(|u| u64::from(u.completion_tokens)),
    });

    let response = result?;
    debug!(
        "{} received {} chars from {} in {:?}",
        agent,
        response.content().len(),
        provider.provider_name(),
        duration
    );

    Ok(response.content().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    #[tokio::test]
    async fn test_complete_applies_generation_config() {
        let provider = MockLlmProvider::new("mock").with_response("PARTIAL");

        let text = complete(
            &provider,
            "mock-model",
            "test",
            "prompt".to_string(),
            GenerationConfig::CLASSIFIER,
        )
        .await
        .unwrap();

        assert_eq!(text, "PARTIAL");
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.0));
        assert_eq!(requests[0].max_tokens, Some(10));
        assert_eq!(requests[0].last_user_text(), Some("prompt"));
    }

    #[tokio::test]
    async fn test_complete_propagates_provider_error() {
        let provider = MockLlmProvider::new("mock").with_error("connection reset");

        let result = complete(
            &provider,
            "mock-model",
            "test",
            "prompt".to_string(),
            GenerationConfig::DRAFTER,
        )
        .await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }
}
