//! # Storage Seam
//!
//! The [`DomainStore`] trait is the persistence interface consumed by the
//! validator, the ingestion pipeline, and the HTTP handlers. It is kept
//! object-safe so handlers and tests can share an `Arc<dyn DomainStore>`
//! and swap the backing implementation. [`MemoryStore`] is the default.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::DomainError;
use crate::types::{EmbeddedChunk, Note, Notebook, Source, Transformation};
use async_trait::async_trait;

/// Sort order for listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderBy {
    #[default]
    UpdatedDesc,
    CreatedDesc,
}

/// Persistence for notebooks, sources, notes, and transformations.
///
/// Every lookup returns `Ok(None)` for a missing id rather than an error;
/// "not found" is a routing decision that belongs to the caller. `save_*`
/// methods refresh the record's `updated` timestamp and return the stored
/// copy.
#[async_trait]
pub trait DomainStore: Send + Sync {
    async fn get_notebook(&self, id: &str) -> Result<Option<Notebook>, DomainError>;
    async fn save_notebook(&self, notebook: &Notebook) -> Result<Notebook, DomainError>;

    async fn get_source(&self, id: &str) -> Result<Option<Source>, DomainError>;
    async fn list_sources(&self, order: OrderBy) -> Result<Vec<Source>, DomainError>;
    async fn sources_for_notebook(&self, notebook_id: &str) -> Result<Vec<Source>, DomainError>;
    async fn save_source(&self, source: &Source) -> Result<Source, DomainError>;
    /// Returns `false` when no source with the given id existed.
    async fn delete_source(&self, id: &str) -> Result<bool, DomainError>;

    async fn get_note(&self, id: &str) -> Result<Option<Note>, DomainError>;
    async fn list_notes(&self, order: OrderBy) -> Result<Vec<Note>, DomainError>;
    async fn notes_for_notebook(&self, notebook_id: &str) -> Result<Vec<Note>, DomainError>;
    async fn save_note(&self, note: &Note) -> Result<Note, DomainError>;
    async fn delete_note(&self, id: &str) -> Result<bool, DomainError>;

    async fn get_transformation(&self, id: &str) -> Result<Option<Transformation>, DomainError>;
    async fn save_transformation(
        &self,
        transformation: &Transformation,
    ) -> Result<Transformation, DomainError>;

    /// Replaces the embedded chunks stored for a source.
    async fn save_embeddings(
        &self,
        source_id: &str,
        chunks: Vec<EmbeddedChunk>,
    ) -> Result<(), DomainError>;
}
