use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::http_client::HttpClient;
use super::{GeminiProvider, OpenAiProvider};
use crate::config::InferenceConfig;
use crate::domain::{DomainError, LlmProvider};

/// Supported inference backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LlmProviderKind {
    #[default]
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
}

impl LlmProviderKind {
    /// Model used when the configuration does not name one
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-2.0-flash",
            Self::OpenAi => "gpt-4o-mini",
        }
    }

    /// Environment variable holding the API key by default
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Self::Gemini => "GOOGLE_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

/// Factory for creating inference providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a provider from configuration and an already-resolved API key
    pub fn create(
        config: &InferenceConfig,
        api_key: &str,
    ) -> Result<Arc<dyn LlmProvider>, DomainError> {
        if api_key.trim().is_empty() {
            return Err(DomainError::configuration("API key must not be empty"));
        }

        let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

        let provider: Arc<dyn LlmProvider> = match (config.provider, config.base_url.as_deref()) {
            (LlmProviderKind::Gemini, Some(base_url)) => Arc::new(GeminiProvider::with_base_url(
                http_client,
                api_key,
                base_url,
            )),
            (LlmProviderKind::Gemini, None) => Arc::new(GeminiProvider::new(http_client, api_key)),
            (LlmProviderKind::OpenAi, Some(base_url)) => Arc::new(OpenAiProvider::with_base_url(
                http_client,
                api_key,
                base_url,
            )),
            (LlmProviderKind::OpenAi, None) => Arc::new(OpenAiProvider::new(http_client, api_key)),
        };

        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_from_config() {
        let config = InferenceConfig {
            provider: LlmProviderKind::OpenAi,
            base_url: Some("http://localhost:11434".to_string()),
            ..InferenceConfig::default()
        };

        let provider = LlmProviderFactory::create(&config, "sk-test").unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_factory_default_config_is_gemini() {
        let provider = LlmProviderFactory::create(&InferenceConfig::default(), "key").unwrap();
        assert_eq!(provider.provider_name(), "gemini");
    }

    #[test]
    fn test_factory_rejects_blank_key() {
        let result = LlmProviderFactory::create(&InferenceConfig::default(), "  ");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_provider_kind_serde_names() {
        let kind: LlmProviderKind = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(kind, LlmProviderKind::OpenAi);
        assert_eq!(serde_json::to_string(&LlmProviderKind::Gemini).unwrap(), "\"gemini\"");
    }

    #[test]
    fn test_provider_kind_defaults() {
        assert_eq!(LlmProviderKind::Gemini.default_api_key_env(), "GOOGLE_API_KEY");
        assert_eq!(LlmProviderKind::OpenAi.default_model(), "gpt-4o-mini");
    }
}
