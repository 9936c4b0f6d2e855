//! Inference provider implementations

mod factory;
mod gemini;
mod http_client;
mod openai;

pub use factory::{LlmProviderFactory, LlmProviderKind};
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_BASE_URL};
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::{OpenAiProvider, DEFAULT_OPENAI_BASE_URL};
