//! Answer drafter
//!
//! Writes an answer restricted to the passages the caller hands it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::inference::complete;
use crate::domain::grounding::{answer_prompt, join_chunk_contents, sanitize_response};
use crate::domain::{
    DocumentChunk, GenerationConfig, GenerationResult, LlmProvider, FALLBACK_ANSWER,
};
use crate::infrastructure::observability::record_answer_fallback;

const AGENT_NAME: &str = "answer_drafter";

/// Drafts grounded answers from an explicit list of chunks
#[derive(Debug, Clone)]
pub struct AnswerDrafter {
    provider: Arc<dyn LlmProvider>,
    model: String,
    config: GenerationConfig,
}

impl AnswerDrafter {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            config: GenerationConfig::DRAFTER,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generation_config(&self) -> GenerationConfig {
        self.config
    }

    /// Draft an answer to `question` using only `documents`
    ///
    /// Never fails: an inference error or an empty reply becomes
    /// [`FALLBACK_ANSWER`]. `context_used` is always the documents' contents
    /// joined by blank lines, in the given order.
    pub async fn generate(&self, question: &str, documents: &[DocumentChunk]) -> GenerationResult {
        debug!(
            "AnswerDrafter.generate called with question='{}' and {} documents",
            question,
            documents.len()
        );

        let context = join_chunk_contents(documents);
        debug!("Combined context length: {} characters", context.len());

        let prompt = answer_prompt(question, &context);

        let draft = match complete(
            self.provider.as_ref(),
            &self.model,
            AGENT_NAME,
            prompt,
            self.config,
        )
        .await
        {
            Ok(raw) => {
                let sanitized = sanitize_response(&raw);
                if sanitized.is_empty() {
                    warn!("Model returned an empty answer, using fallback");
                    record_answer_fallback("empty_response");
                    FALLBACK_ANSWER.to_string()
                } else {
                    sanitized.to_string()
                }
            }
            Err(e) => {
                warn!("Error during model inference: {}", e);
                record_answer_fallback("inference_error");
                FALLBACK_ANSWER.to_string()
            }
        };

        info!("Drafted answer of {} characters", draft.len());

        GenerationResult::new(draft, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::llm::MockLlmProvider;

    fn paris_chunks() -> Vec<DocumentChunk> {
        vec![
            DocumentChunk::new("c1", "Paris is the capital of France."),
            DocumentChunk::new("c2", "It has a population of ~2.1M."),
        ]
    }

    fn drafter(provider: Arc<MockLlmProvider>) -> AnswerDrafter {
        AnswerDrafter::new(provider, "mock-model")
    }

    #[tokio::test]
    async fn test_context_is_joined_in_order() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_echo());

        let result = drafter(provider.clone())
            .generate("What is the capital of France?", &paris_chunks())
            .await;

        assert_eq!(
            result.context_used,
            "Paris is the capital of France.\n\nIt has a population of ~2.1M."
        );
        assert!(result.draft_answer.contains(&result.context_used));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_answer_is_trimmed_only() {
        let provider = Arc::new(
            MockLlmProvider::new("mock").with_response("\n  **Paris** is the capital.  \n"),
        );

        let result = drafter(provider).generate("capital?", &paris_chunks()).await;

        assert_eq!(result.draft_answer, "**Paris** is the capital.");
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn test_inference_failure_uses_fallback() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("HTTP 503"));

        let result = drafter(provider).generate("capital?", &paris_chunks()).await;

        assert_eq!(result.draft_answer, FALLBACK_ANSWER);
        assert_eq!(
            result.context_used,
            "Paris is the capital of France.\n\nIt has a population of ~2.1M."
        );
    }

    #[tokio::test]
    async fn test_blank_answer_uses_fallback() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("   \n\t"));

        let result = drafter(provider).generate("capital?", &paris_chunks()).await;

        assert!(result.is_fallback());
    }

    #[tokio::test]
    async fn test_empty_documents() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response(""));

        let result = drafter(provider.clone()).generate("capital?", &[]).await;

        assert_eq!(result.context_used, "");
        assert!(!result.draft_answer.is_empty());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_documents_with_model_answer() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("No context given."));

        let result = drafter(provider).generate("capital?", &[]).await;

        assert_eq!(result.context_used, "");
        assert_eq!(result.draft_answer, "No context given.");
    }

    #[tokio::test]
    async fn test_request_uses_drafting_settings() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("Paris."));

        drafter(provider.clone())
            .generate("capital?", &paris_chunks())
            .await;

        let request = &provider.requests()[0];
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.max_tokens, Some(300));

        let prompt = request.last_user_text().unwrap();
        assert!(prompt.contains("**Question:** capital?"));
        assert!(prompt.contains("Paris is the capital of France.\n\nIt has a population"));
    }

    #[tokio::test]
    async fn test_documents_are_not_deduplicated() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("ok"));
        let docs = vec![
            DocumentChunk::new("a", "repeat"),
            DocumentChunk::new("b", "repeat"),
        ];

        let result = drafter(provider).generate("q", &docs).await;

        assert_eq!(result.context_used, "repeat\n\nrepeat");
    }
}
