//! Handlers for the `/api/sources` endpoints.
//!
//! Source creation parses the flat ingestion payload, runs the validator
//! against the store, and hands the validated job to the pipeline; the
//! remaining endpoints are reads and explicit partial updates against the
//! store.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use lorebook::{
    validate_ingest, DomainError, DomainStore, OrderBy, Source, SourceIngestInput, SourcePipeline,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::AppError, state::AppState, types::MessageResponse};

#[derive(Serialize)]
pub struct AssetBody {
    pub file_path: Option<String>,
    pub url: Option<String>,
}

/// Full source representation, returned by the detail endpoints.
#[derive(Serialize)]
pub struct SourceResponse {
    pub id: String,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub asset: Option<AssetBody>,
    pub full_text: Option<String>,
    pub embedded_chunks: usize,
    pub created: String,
    pub updated: String,
}

impl SourceResponse {
    fn from_source(source: Source) -> Self {
        Self {
            id: source.id,
            title: source.title,
            topics: source.topics,
            asset: source.asset.map(|asset| AssetBody {
                file_path: asset.file_path,
                url: asset.url,
            }),
            full_text: source.full_text,
            embedded_chunks: source.embedded_chunks,
            created: source.created.to_rfc3339(),
            updated: source.updated.to_rfc3339(),
        }
    }
}

/// Summary representation for the list endpoint: no `full_text`, but an
/// insight count.
#[derive(Serialize)]
pub struct SourceListItem {
    pub id: String,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub asset: Option<AssetBody>,
    pub embedded_chunks: usize,
    pub insights_count: usize,
    pub created: String,
    pub updated: String,
}

impl SourceListItem {
    fn from_source(source: Source) -> Self {
        Self {
            id: source.id,
            title: source.title,
            topics: source.topics,
            asset: source.asset.map(|asset| AssetBody {
                file_path: asset.file_path,
                url: asset.url,
            }),
            embedded_chunks: source.embedded_chunks,
            insights_count: source.insights.len(),
            created: source.created.to_rfc3339(),
            updated: source.updated.to_rfc3339(),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct SourceListParams {
    pub notebook_id: Option<String>,
}

/// Partial update: absent fields are left unchanged.
#[derive(Deserialize)]
pub struct SourceUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// `POST /api/sources` — validate and run the ingestion pipeline.
pub async fn create_source(
    State(state): State<AppState>,
    Json(payload): Json<SourceIngestInput>,
) -> Result<Json<SourceResponse>, AppError> {
    info!(
        notebook_id = %payload.notebook_id,
        kind = %payload.kind,
        transformations = payload.transformations.len(),
        embed = payload.embed,
        "received source ingest request"
    );

    let job = validate_ingest(state.store.as_ref(), &payload).await?;
    let source = state.pipeline.invoke(job).await?;

    Ok(Json(SourceResponse::from_source(source)))
}

/// `GET /api/sources` — all sources, optionally filtered by notebook.
pub async fn list_sources(
    State(state): State<AppState>,
    Query(params): Query<SourceListParams>,
) -> Result<Json<Vec<SourceListItem>>, AppError> {
    let sources = match params.notebook_id.as_deref() {
        Some(notebook_id) => {
            state
                .store
                .get_notebook(notebook_id)
                .await?
                .ok_or_else(|| DomainError::not_found("notebook"))?;
            state.store.sources_for_notebook(notebook_id).await?
        }
        None => state.store.list_sources(OrderBy::UpdatedDesc).await?,
    };

    Ok(Json(
        sources.into_iter().map(SourceListItem::from_source).collect(),
    ))
}

/// `GET /api/sources/{id}`.
pub async fn get_source(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SourceResponse>, AppError> {
    let source = state
        .store
        .get_source(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("source"))?;

    Ok(Json(SourceResponse::from_source(source)))
}

/// `PUT /api/sources/{id}` — update only the provided fields.
pub async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SourceUpdate>,
) -> Result<Json<SourceResponse>, AppError> {
    let mut source = state
        .store
        .get_source(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("source"))?;

    if let Some(title) = payload.title {
        source.title = Some(title);
    }
    if let Some(topics) = payload.topics {
        source.topics = topics;
    }

    let stored = state.store.save_source(&source).await?;
    Ok(Json(SourceResponse::from_source(stored)))
}

/// `DELETE /api/sources/{id}`.
pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete_source(&id).await? {
        return Err(DomainError::not_found("source").into());
    }

    info!(source_id = %id, "source deleted");
    Ok(Json(MessageResponse::new("Source deleted successfully")))
}
