//! Typed application configuration

mod app_config;

pub use app_config::{
    AppConfig, AssistantConfig, CorpusConfig, EhrConfig, EmbeddingConfig, LlmConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
