//! Keyword retriever over an in-memory corpus

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::{DocumentChunk, DomainError, Retriever};

fn words(text: &str) -> HashSet<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Ranks chunks by the share of distinct question words they contain
#[derive(Debug, Clone)]
pub struct InMemoryRetriever {
    chunks: Vec<DocumentChunk>,
    terms: Vec<HashSet<String>>,
    max_results: usize,
}

impl InMemoryRetriever {
    pub fn new(chunks: Vec<DocumentChunk>, max_results: usize) -> Self {
        let terms = chunks.iter().map(|c| words(&c.content)).collect();
        Self {
            chunks,
            terms,
            max_results,
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks scoring above zero with their score, best first
    pub fn search(&self, question: &str) -> Vec<(f32, &DocumentChunk)> {
        let query = words(question);
        if query.is_empty() {
            return vec![];
        }

        let mut scored: Vec<(usize, usize)> = self
            .terms
            .iter()
            .enumerate()
            .map(|(index, terms)| (index, query.iter().filter(|w| terms.contains(*w)).count()))
            .filter(|(_, hits)| *hits > 0)
            .collect();

        // stable: ties keep corpus order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(self.max_results);

        let total = query.len() as f32;
        scored
            .into_iter()
            .map(|(index, hits)| (hits as f32 / total, &self.chunks[index]))
            .collect()
    }
}

#[async_trait]
impl Retriever for InMemoryRetriever {
    async fn fetch(&self, question: &str) -> Result<Vec<DocumentChunk>, DomainError> {
        let results = self.search(question);
        debug!(
            "Retrieved {} of {} chunks for question='{}'",
            results.len(),
            self.chunks.len(),
            question
        );

        Ok(results.into_iter().map(|(_, chunk)| chunk.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<DocumentChunk> {
        vec![
            DocumentChunk::new("0", "Berlin is the capital of Germany."),
            DocumentChunk::new("1", "Paris is the capital of France."),
            DocumentChunk::new("2", "France exports wine."),
            DocumentChunk::new("3", "Unrelated text about rust."),
        ]
    }

    fn ids(chunks: &[DocumentChunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_ranks_by_overlap() {
        let retriever = InMemoryRetriever::new(corpus(), 10);

        let chunks = retriever.fetch("What is the capital of France?").await.unwrap();

        assert_eq!(ids(&chunks), vec!["1", "0", "2"]);
    }

    #[tokio::test]
    async fn test_case_insensitive() {
        let retriever = InMemoryRetriever::new(corpus(), 10);

        let chunks = retriever.fetch("RUST").await.unwrap();

        assert_eq!(ids(&chunks), vec!["3"]);
    }

    #[tokio::test]
    async fn test_ties_keep_corpus_order() {
        let retriever = InMemoryRetriever::new(corpus(), 10);

        let chunks = retriever.fetch("capital").await.unwrap();

        assert_eq!(ids(&chunks), vec!["0", "1"]);
    }

    #[tokio::test]
    async fn test_max_results() {
        let retriever = InMemoryRetriever::new(corpus(), 1);

        let chunks = retriever.fetch("capital of France").await.unwrap();

        assert_eq!(ids(&chunks), vec!["1"]);
    }

    #[tokio::test]
    async fn test_empty_question_and_no_hits() {
        let retriever = InMemoryRetriever::new(corpus(), 10);

        assert!(retriever.fetch("").await.unwrap().is_empty());
        assert!(retriever.fetch("  ?! ").await.unwrap().is_empty());
        assert!(retriever.fetch("zebra").await.unwrap().is_empty());
    }

    #[test]
    fn test_scores_are_fractions() {
        let retriever = InMemoryRetriever::new(corpus(), 10);

        let results = retriever.search("capital France");

        assert_eq!(results[0].1.id, "1");
        assert!((results[0].0 - 1.0).abs() < f32::EPSILON);
        assert!((results[1].0 - 0.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_empty_corpus() {
        let retriever = InMemoryRetriever::new(vec![], 10);

        assert!(retriever.is_empty());
        assert!(retriever.fetch("anything").await.unwrap().is_empty());
    }
}
