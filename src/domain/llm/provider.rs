use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for inference providers (OpenAI, Gemini, etc.)
///
/// A provider performs exactly one remote completion per call. Timeouts,
/// transport faults and malformed payloads all surface as `Err`.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
