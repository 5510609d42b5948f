//! # Application Configuration
//!
//! Loads `AppConfig` from an optional `config.yml` merged with environment
//! variables (`PORT`, `MODEL__API_URL`, `EMBEDDING__MODEL_NAME`, ...). Both
//! model sections are optional: without them the server still serves CRUD
//! and text/link/upload ingestion, and rejects transformation or embedding
//! requests at the pipeline.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Chat model used to run transformations.
    #[serde(default)]
    pub model: Option<ModelConfig>,
    /// Embeddings endpoint used when a request asks for `embed: true`.
    #[serde(default)]
    pub embedding: Option<EmbeddingSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingSettings {
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}

fn default_port() -> u16 {
    8338
}

/// Loads the configuration, merging the YAML file (when present) with
/// environment variable overrides.
pub fn get_config(path: Option<&str>) -> Result<AppConfig, config::ConfigError> {
    let path = path.unwrap_or("config.yml");
    let settings = ConfigBuilder::builder()
        .add_source(File::new(path, FileFormat::Yaml).required(false))
        .add_source(Environment::default().separator("__"))
        .build()?;
    settings.try_deserialize()
}
