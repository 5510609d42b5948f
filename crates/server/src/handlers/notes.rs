//! Handlers for the `/api/notes` endpoints: plain CRUD against the store,
//! with an optional notebook attachment checked at creation time.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use lorebook::{DomainError, DomainStore, Note, NoteType, OrderBy};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::AppError, state::AppState, types::MessageResponse};

#[derive(Deserialize)]
pub struct NoteCreate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub note_type: NoteType,
    #[serde(default)]
    pub notebook_id: Option<String>,
}

/// Partial update: absent fields are left unchanged.
#[derive(Deserialize)]
pub struct NoteUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub note_type: Option<NoteType>,
}

#[derive(Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_type: NoteType,
    pub created: String,
    pub updated: String,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            note_type: note.note_type,
            created: note.created.to_rfc3339(),
            updated: note.updated.to_rfc3339(),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct NoteListParams {
    pub notebook_id: Option<String>,
}

/// `POST /api/notes`.
pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NoteCreate>,
) -> Result<Json<NoteResponse>, AppError> {
    let mut note = Note::new(payload.title, payload.content, payload.note_type);

    if let Some(notebook_id) = payload.notebook_id {
        state
            .store
            .get_notebook(&notebook_id)
            .await?
            .ok_or_else(|| DomainError::not_found("notebook"))?;
        note.notebook_id = Some(notebook_id);
    }

    let stored = state.store.save_note(&note).await?;
    info!(note_id = %stored.id, "note created");
    Ok(Json(NoteResponse::from_note(stored)))
}

/// `GET /api/notes` — all notes, optionally filtered by notebook.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<NoteListParams>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = match params.notebook_id.as_deref() {
        Some(notebook_id) => {
            state
                .store
                .get_notebook(notebook_id)
                .await?
                .ok_or_else(|| DomainError::not_found("notebook"))?;
            state.store.notes_for_notebook(notebook_id).await?
        }
        None => state.store.list_notes(OrderBy::UpdatedDesc).await?,
    };

    Ok(Json(notes.into_iter().map(NoteResponse::from_note).collect()))
}

/// `GET /api/notes/{id}`.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, AppError> {
    let note = state
        .store
        .get_note(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("note"))?;

    Ok(Json(NoteResponse::from_note(note)))
}

/// `PUT /api/notes/{id}` — update only the provided fields.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NoteUpdate>,
) -> Result<Json<NoteResponse>, AppError> {
    let mut note = state
        .store
        .get_note(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("note"))?;

    if let Some(title) = payload.title {
        note.title = Some(title);
    }
    if let Some(content) = payload.content {
        note.content = Some(content);
    }
    if let Some(note_type) = payload.note_type {
        note.note_type = note_type;
    }

    let stored = state.store.save_note(&note).await?;
    Ok(Json(NoteResponse::from_note(stored)))
}

/// `DELETE /api/notes/{id}`.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete_note(&id).await? {
        return Err(DomainError::not_found("note").into());
    }

    info!(note_id = %id, "note deleted");
    Ok(Json(MessageResponse::new("Note deleted successfully")))
}
