//! # Application State
//!
//! `AppState` holds the shared collaborators every handler needs: the
//! configuration, the domain store, and the ingestion pipeline. Both
//! collaborators sit behind trait objects so tests can construct the state
//! with doubles instead of the real implementations.

use std::sync::Arc;

use lorebook::providers::ai::{AiProvider, OpenAiCompatProvider};
use lorebook::{DomainStore, EmbeddingConfig, IngestPipeline, MemoryStore, SourcePipeline};

use crate::config::AppConfig;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DomainStore>,
    pub pipeline: Arc<dyn SourcePipeline>,
}

/// Builds the shared application state from the configuration: the backing
/// store, the optional chat model, and the ingestion pipeline wired to both.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn DomainStore> = Arc::new(MemoryStore::new());

    let model: Option<Arc<dyn AiProvider>> = match &config.model {
        Some(model) => {
            tracing::info!(api_url = %model.api_url, "configuring chat model provider");
            Some(Arc::new(OpenAiCompatProvider::new(
                model.api_url.clone(),
                model.api_key.clone(),
                model.model_name.clone(),
            )?))
        }
        None => None,
    };

    let embedding = config.embedding.as_ref().map(|settings| EmbeddingConfig {
        api_url: settings.api_url.clone(),
        api_key: settings.api_key.clone(),
        model_name: settings.model_name.clone(),
    });

    let pipeline: Arc<dyn SourcePipeline> =
        Arc::new(IngestPipeline::new(store.clone(), model, embedding));

    Ok(AppState {
        config: Arc::new(config),
        store,
        pipeline,
    })
}
