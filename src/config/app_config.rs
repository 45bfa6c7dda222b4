use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{ChunkingConfig, FallbackPolicy, GroundingPolicy};

/// Application configuration
///
/// Secrets are not part of it; they come from a `CredentialProvider`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub corpus: CorpusConfig,
    pub ehr: EhrConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Hosted chat-completion settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// No timeout when unset
    pub timeout_secs: Option<u64>,
    pub classifier_model: String,
}

/// Hosted embedding settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
    pub batch_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub path: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EhrConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub grounding: GroundingPolicy,
    /// Returned instead of the grader's explanation when set
    pub fallback_message: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai".to_string(),
            model: "mistral-large-latest".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: None,
            classifier_model: "mistral-small-latest".to_string(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "mistral-embed".to_string(),
            batch_size: 32,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        let chunking = ChunkingConfig::default();

        Self {
            path: PathBuf::from("data/corpus.json"),
            chunk_size: chunking.chunk_size,
            chunk_overlap: chunking.chunk_overlap,
            top_k: 4,
        }
    }
}

impl Default for EhrConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/ehr.txt"),
        }
    }
}

impl CorpusConfig {
    pub fn chunking(&self) -> ChunkingConfig {
        ChunkingConfig::new(self.chunk_size, self.chunk_overlap)
    }
}

impl AssistantConfig {
    pub fn fallback(&self) -> FallbackPolicy {
        FallbackPolicy::from_message(self.fallback_message.clone())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("ONCOCHAT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
