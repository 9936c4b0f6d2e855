//! Domain layer - Core types, traits and prompt logic

pub mod error;
pub mod grounding;
pub mod llm;
pub mod retrieval;

pub use error::DomainError;
pub use grounding::{GenerationConfig, GenerationResult, RelevanceVerdict, FALLBACK_ANSWER};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole,
    Usage,
};
pub use retrieval::{DocumentChunk, Retriever};
