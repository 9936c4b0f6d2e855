use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::llm::LlmProviderKind;

/// Model identifiers: alphanumeric start, then letters, digits, `.`, `_`, `:`, `/` or `-`
static MODEL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._:/-]*$").unwrap());

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Inference service settings
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    #[serde(default)]
    pub provider: LlmProviderKind,
    /// Model name; the provider's default when unset
    #[serde(default)]
    pub model: Option<String>,
    /// Override for the provider endpoint (OpenAI-compatible servers, proxies)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Environment variable holding the API key; the provider's default when unset
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Local corpus and retrieval settings
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,
    /// Chunks judged by the classifier and handed to the drafter
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Upper bound on chunks returned by the retriever
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_top_k() -> usize {
    3
}

fn default_max_results() -> usize {
    10
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_min_chunk_size() -> usize {
    50
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::default(),
            model: None,
            base_url: None,
            api_key_env: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            top_k: default_top_k(),
            max_results: default_max_results(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            min_chunk_size: default_min_chunk_size(),
        }
    }
}

impl InferenceConfig {
    /// Model name to send to the provider
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Name of the environment variable holding the API key
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_api_key_env())
    }

    /// Read the API key from the environment
    pub fn resolve_api_key(&self) -> Result<String, DomainError> {
        let var = self.api_key_env();
        std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration(format!("Environment variable {} is not set", var))
            })
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "inference.timeout_secs must be greater than 0",
            ));
        }

        if !MODEL_NAME_PATTERN.is_match(self.model()) {
            return Err(DomainError::configuration(format!(
                "Invalid model name '{}'",
                self.model()
            )));
        }

        Ok(())
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::configuration(
                "retrieval.chunk_size must be greater than 0",
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::configuration(
                "retrieval.chunk_overlap must be less than chunk_size",
            ));
        }

        if self.min_chunk_size > self.chunk_size {
            return Err(DomainError::configuration(
                "retrieval.min_chunk_size must be less than or equal to chunk_size",
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.inference.validate()?;
        self.retrieval.validate()
    }
}
