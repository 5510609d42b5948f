//! # Ingestion Pipeline
//!
//! [`SourcePipeline`] is the boundary's only dependency for source creation;
//! [`IngestPipeline`] is the default implementation. Given a validated job
//! it acquires the content, extracts text, applies the requested
//! transformations, optionally embeds the text, and persists the resulting
//! `Source`.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::{DomainError, ModelError};
use crate::ingest::chunking::chunk_text;
use crate::ingest::types::{ContentState, ValidatedIngest};
use crate::providers::ai::{generate_embedding, AiProvider};
use crate::store::DomainStore;
use crate::types::{Asset, EmbeddedChunk, Source, SourceInsight};

/// Errors from the ingestion pipeline. All of them surface as a 500 at the
/// HTTP boundary except `Store(NotFound)`, which keeps its 404.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to read uploaded file {path}: {reason}")]
    Upload { path: String, reason: String },
    #[error("could not extract text: {0}")]
    Extract(String),
    #[error("transformation '{name}' failed: {source}")]
    Transform {
        name: String,
        #[source]
        source: ModelError,
    },
    #[error("no model configured for transformations")]
    ModelUnavailable,
    #[error("embedding failed: {0}")]
    Embedding(String),
    #[error(transparent)]
    Store(#[from] DomainError),
}

/// Turns a validated ingestion job into a persisted source.
#[async_trait]
pub trait SourcePipeline: Send + Sync {
    async fn invoke(&self, job: ValidatedIngest) -> Result<Source, PipelineError>;
}

/// Connection details for an OpenAI-compatible embeddings endpoint.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model_name: String,
}

pub struct IngestPipeline {
    store: Arc<dyn DomainStore>,
    model: Option<Arc<dyn AiProvider>>,
    embedding: Option<EmbeddingConfig>,
    http: reqwest::Client,
}

impl IngestPipeline {
    pub fn new(
        store: Arc<dyn DomainStore>,
        model: Option<Arc<dyn AiProvider>>,
        embedding: Option<EmbeddingConfig>,
    ) -> Self {
        Self {
            store,
            model,
            embedding,
            http: reqwest::Client::new(),
        }
    }

    /// Fetches or reads the origin's content and extracts plain text from
    /// it. Returns the text together with the asset record for the source.
    async fn acquire(&self, state: &ContentState) -> Result<(String, Option<Asset>), PipelineError> {
        match state {
            ContentState::Link { url } => {
                info!(%url, "fetching link content");
                let response =
                    self.http.get(url).send().await.map_err(|e| PipelineError::Fetch {
                        url: url.clone(),
                        reason: e.to_string(),
                    })?;
                if !response.status().is_success() {
                    return Err(PipelineError::Fetch {
                        url: url.clone(),
                        reason: format!("status {}", response.status()),
                    });
                }
                let body = response.text().await.map_err(|e| PipelineError::Fetch {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;
                let text = html2md::parse_html(&body);
                if text.trim().is_empty() {
                    return Err(PipelineError::Extract(format!("no text content at {url}")));
                }
                let asset = Asset {
                    file_path: None,
                    url: Some(url.clone()),
                };
                Ok((text, Some(asset)))
            }
            ContentState::Upload { file_path, .. } => {
                let text = tokio::fs::read_to_string(file_path).await.map_err(|e| {
                    PipelineError::Upload {
                        path: file_path.clone(),
                        reason: e.to_string(),
                    }
                })?;
                if text.trim().is_empty() {
                    return Err(PipelineError::Extract(format!(
                        "uploaded file {file_path} contains no text"
                    )));
                }
                let asset = Asset {
                    file_path: Some(file_path.clone()),
                    url: None,
                };
                Ok((text, Some(asset)))
            }
            ContentState::Text { content } => Ok((content.clone(), None)),
        }
    }
}

#[async_trait]
impl SourcePipeline for IngestPipeline {
    async fn invoke(&self, job: ValidatedIngest) -> Result<Source, PipelineError> {
        let (full_text, asset) = self.acquire(&job.content_state).await?;

        // The uploaded file may only be removed once extraction has
        // succeeded; a failed extraction must leave it for a retry.
        if let ContentState::Upload {
            file_path,
            delete_source: true,
        } = &job.content_state
        {
            match tokio::fs::remove_file(file_path).await {
                Ok(()) => info!(path = %file_path, "removed uploaded file after extraction"),
                Err(e) => warn!(path = %file_path, error = %e, "failed to remove uploaded file"),
            }
        }

        let mut source = Source::new(&job.notebook.id);
        source.title = job.title.clone().or_else(|| derive_title(&full_text));
        source.asset = asset;
        source.full_text = Some(full_text.clone());

        if !job.transformations.is_empty() {
            let model = self.model.as_ref().ok_or(PipelineError::ModelUnavailable)?;
            for transformation in &job.transformations {
                info!(name = %transformation.name, "applying transformation");
                let content = model
                    .generate(&transformation.prompt, &full_text)
                    .await
                    .map_err(|source| PipelineError::Transform {
                        name: transformation.name.clone(),
                        source,
                    })?;
                source.insights.push(SourceInsight {
                    insight_type: transformation.title.clone(),
                    content,
                });
            }
        }

        if job.embed {
            let config = self.embedding.as_ref().ok_or_else(|| {
                PipelineError::Embedding("no embedding model configured".into())
            })?;
            let chunks =
                chunk_text(&full_text).map_err(|e| PipelineError::Extract(e.to_string()))?;
            let mut embedded = Vec::with_capacity(chunks.len());
            for chunk in chunks {
                let vector = generate_embedding(
                    &config.api_url,
                    config.api_key.as_deref(),
                    &config.model_name,
                    &chunk,
                )
                .await
                .map_err(|e| PipelineError::Embedding(e.to_string()))?;
                embedded.push(EmbeddedChunk {
                    content: chunk,
                    vector,
                });
            }
            source.embedded_chunks = embedded.len();
            self.store.save_embeddings(&source.id, embedded).await?;
        }

        let stored = self.store.save_source(&source).await?;
        info!(source_id = %stored.id, notebook_id = %stored.notebook_id, "source ingested");
        Ok(stored)
    }
}

/// First non-empty line of the text, markdown heading markers stripped,
/// capped at 150 characters.
fn derive_title(text: &str) -> Option<String> {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
                .trim()
                .chars()
                .take(150)
                .collect::<String>()
        })
        .filter(|title| !title.is_empty())
}
