//! Relevance classifier
//!
//! Judges whether the top retrieved passages can answer a question.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::inference::complete;
use crate::domain::grounding::{join_chunk_contents, relevance_prompt};
use crate::domain::{GenerationConfig, LlmProvider, RelevanceVerdict, Retriever};
use crate::infrastructure::observability::record_verdict;

const AGENT_NAME: &str = "relevance_classifier";

/// Grades retrieved passages into CAN_ANSWER, PARTIAL or NO_MATCH
#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    provider: Arc<dyn LlmProvider>,
    model: String,
    config: GenerationConfig,
}

impl RelevanceClassifier {
    /// Number of passages judged when the caller has no preference
    pub const DEFAULT_TOP_K: usize = 3;

    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            config: GenerationConfig::CLASSIFIER,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generation_config(&self) -> GenerationConfig {
        self.config
    }

    /// Classify how well the top `k` retrieved chunks address `question`
    ///
    /// Never fails. Empty retrieval, a retriever error, an inference failure
    /// and an unrecognised label all yield `NoMatch`; empty retrieval and
    /// retriever errors skip the inference call entirely.
    pub async fn classify<R>(&self, question: &str, retriever: &R, k: usize) -> RelevanceVerdict
    where
        R: Retriever + ?Sized,
    {
        debug!("RelevanceClassifier.classify called with question='{}' and k={}", question, k);

        let chunks = match retriever.fetch(question).await {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!("Retriever failed, treating as no documents: {}", e);
                Vec::new()
            }
        };

        if chunks.is_empty() {
            debug!("No documents returned from retriever. Classifying as NO_MATCH.");
            return self.finish(RelevanceVerdict::NoMatch);
        }

        let passages = join_chunk_contents(chunks.iter().take(k));
        let prompt = relevance_prompt(question, &passages);

        let raw = match complete(
            self.provider.as_ref(),
            &self.model,
            AGENT_NAME,
            prompt,
            self.config,
        )
        .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Error during model inference: {}", e);
                return self.finish(RelevanceVerdict::NoMatch);
            }
        };

        let verdict = match RelevanceVerdict::parse_response(&raw) {
            Some(verdict) => {
                debug!("Classification recognized as '{}'.", verdict);
                verdict
            }
            None => {
                debug!("LLM did not respond with a valid label ({:?}). Forcing NO_MATCH.", raw);
                RelevanceVerdict::NoMatch
            }
        };

        self.finish(verdict)
    }

    fn finish(&self, verdict: RelevanceVerdict) -> RelevanceVerdict {
        record_verdict(verdict);
        info!("Relevance verdict: {}", verdict);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::retrieval::MockRetriever;
    use crate::domain::{DocumentChunk, DomainError};

    fn chunks(contents: &[&str]) -> Vec<DocumentChunk> {
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| DocumentChunk::new(format!("chunk-{}", i), *c))
            .collect()
    }

    fn retriever_with(contents: &'static [&'static str]) -> MockRetriever {
        let mut retriever = MockRetriever::new();
        retriever
            .expect_fetch()
            .returning(move |_| Ok(chunks(contents)));
        retriever
    }

    fn classifier(provider: Arc<MockLlmProvider>) -> RelevanceClassifier {
        RelevanceClassifier::new(provider, "mock-model")
    }

    #[tokio::test]
    async fn test_valid_labels_are_returned() {
        for (raw, expected) in [
            ("CAN_ANSWER", RelevanceVerdict::CanAnswer),
            ("PARTIAL", RelevanceVerdict::Partial),
            ("NO_MATCH", RelevanceVerdict::NoMatch),
            ("  can_answer\n", RelevanceVerdict::CanAnswer),
        ] {
            let provider = Arc::new(MockLlmProvider::new("mock").with_response(raw));
            let retriever = retriever_with(&["Paris is the capital of France."]);

            let verdict = classifier(provider)
                .classify("What is the capital of France?", &retriever, 3)
                .await;

            assert_eq!(verdict, expected, "raw response {raw:?}");
        }
    }

    #[tokio::test]
    async fn test_empty_retrieval_skips_inference() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("CAN_ANSWER"));
        let mut retriever = MockRetriever::new();
        retriever.expect_fetch().times(1).returning(|_| Ok(vec![]));

        let verdict = classifier(provider.clone())
            .classify("anything", &retriever, 3)
            .await;

        assert_eq!(verdict, RelevanceVerdict::NoMatch);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_retriever_error_is_no_match_without_inference() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("CAN_ANSWER"));
        let mut retriever = MockRetriever::new();
        retriever
            .expect_fetch()
            .returning(|_| Err(DomainError::retrieval("index offline")));

        let verdict = classifier(provider.clone())
            .classify("anything", &retriever, 3)
            .await;

        assert_eq!(verdict, RelevanceVerdict::NoMatch);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_inference_failure_is_no_match() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("timeout"));
        let retriever = retriever_with(&["Some passage."]);

        let verdict = classifier(provider.clone())
            .classify("question", &retriever, 3)
            .await;

        assert_eq!(verdict, RelevanceVerdict::NoMatch);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_labels_are_forced_to_no_match() {
        for raw in ["MAYBE", "CAN_ANSWER.", "PARTIAL because the passage mentions it", ""] {
            let provider = Arc::new(MockLlmProvider::new("mock").with_response(raw));
            let retriever = retriever_with(&["Some passage."]);

            let verdict = classifier(provider).classify("question", &retriever, 3).await;

            assert_eq!(verdict, RelevanceVerdict::NoMatch, "raw response {raw:?}");
        }
    }

    #[tokio::test]
    async fn test_only_top_k_chunks_reach_the_prompt_in_order() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("PARTIAL"));
        let retriever = retriever_with(&["first", "second", "third", "fourth"]);

        classifier(provider.clone()).classify("q", &retriever, 2).await;

        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("**Passages:** first\n\nsecond\n"));
        assert!(!prompt.contains("third"));
        assert!(!prompt.contains("fourth"));
    }

    #[tokio::test]
    async fn test_k_larger_than_results_uses_all_chunks() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("CAN_ANSWER"));
        let retriever = retriever_with(&["only one"]);

        classifier(provider.clone()).classify("q", &retriever, 10).await;

        assert!(provider.last_prompt().unwrap().contains("**Passages:** only one\n"));
    }

    #[tokio::test]
    async fn test_k_zero_sends_empty_context_once() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("PARTIAL"));
        let retriever = retriever_with(&["hidden passage"]);

        let verdict = classifier(provider.clone()).classify("q", &retriever, 0).await;

        assert_eq!(verdict, RelevanceVerdict::Partial);
        assert_eq!(provider.call_count(), 1);
        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("**Passages:** \n"));
        assert!(!prompt.contains("hidden passage"));
    }

    #[tokio::test]
    async fn test_request_uses_deterministic_settings() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("PARTIAL"));
        let retriever = retriever_with(&["passage"]);

        classifier(provider.clone()).classify("q", &retriever, 3).await;

        let request = &provider.requests()[0];
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(10));
    }

    #[tokio::test]
    async fn test_question_is_passed_through_unchanged() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("NO_MATCH"));
        let mut retriever = MockRetriever::new();
        retriever
            .expect_fetch()
            .withf(|q| q.is_empty())
            .times(1)
            .returning(|_| Ok(chunks(&["passage"])));

        let verdict = classifier(provider.clone()).classify("", &retriever, 3).await;

        assert_eq!(verdict, RelevanceVerdict::NoMatch);
        assert!(provider.last_prompt().unwrap().contains("**Question:** \n"));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("PARTIAL"));
        let retriever = retriever_with(&["passage"]);
        let classifier = classifier(provider.clone());

        let first = classifier.classify("q", &retriever, 3).await;
        let second = classifier.classify("q", &retriever, 3).await;

        assert_eq!(first, second);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_shared_across_concurrent_callers() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("CAN_ANSWER"));
        let retriever = retriever_with(&["passage"]);
        let classifier = classifier(provider.clone());

        let verdicts = futures::future::join_all(
            (0..4).map(|_| classifier.classify("q", &retriever, 3)),
        )
        .await;

        assert!(verdicts.iter().all(|v| *v == RelevanceVerdict::CanAnswer));
        assert_eq!(provider.call_count(), 4);
    }

    #[test]
    fn test_default_top_k() {
        assert_eq!(RelevanceClassifier::DEFAULT_TOP_K, 3);
    }
}
