//! Retriever trait

use async_trait::async_trait;

use super::DocumentChunk;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Fetches ranked chunks for a question
///
/// Results are ordered best-first; callers trust this order and never re-rank.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Fetch ordered chunks for a question
    async fn fetch(&self, question: &str) -> Result<Vec<DocumentChunk>, DomainError>;
}
