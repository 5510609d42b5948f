//! In-memory [`DomainStore`] implementation.
//!
//! Backs the server by default and gives tests a store they can seed
//! directly. All records live behind a single `RwLock`; reads clone.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::DomainError;
use crate::store::{DomainStore, OrderBy};
use crate::types::{EmbeddedChunk, Note, Notebook, Source, Transformation};

#[derive(Default)]
struct Records {
    notebooks: HashMap<String, Notebook>,
    sources: HashMap<String, Source>,
    notes: HashMap<String, Note>,
    transformations: HashMap<String, Transformation>,
    embeddings: HashMap<String, Vec<EmbeddedChunk>>,
}

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded chunks currently stored for a source. Test hook; the
    /// trait itself only writes embeddings.
    pub async fn embeddings_for(&self, source_id: &str) -> Vec<EmbeddedChunk> {
        self.records
            .read()
            .await
            .embeddings
            .get(source_id)
            .cloned()
            .unwrap_or_default()
    }
}

fn sort<T>(mut items: Vec<T>, order: OrderBy, updated: fn(&T) -> i64, created: fn(&T) -> i64) -> Vec<T> {
    match order {
        OrderBy::UpdatedDesc => items.sort_by_key(|item| std::cmp::Reverse(updated(item))),
        OrderBy::CreatedDesc => items.sort_by_key(|item| std::cmp::Reverse(created(item))),
    }
    items
}

#[async_trait]
impl DomainStore for MemoryStore {
    async fn get_notebook(&self, id: &str) -> Result<Option<Notebook>, DomainError> {
        Ok(self.records.read().await.notebooks.get(id).cloned())
    }

    async fn save_notebook(&self, notebook: &Notebook) -> Result<Notebook, DomainError> {
        let mut stored = notebook.clone();
        stored.updated = Utc::now();
        self.records
            .write()
            .await
            .notebooks
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn get_source(&self, id: &str) -> Result<Option<Source>, DomainError> {
        Ok(self.records.read().await.sources.get(id).cloned())
    }

    async fn list_sources(&self, order: OrderBy) -> Result<Vec<Source>, DomainError> {
        let sources: Vec<Source> = self.records.read().await.sources.values().cloned().collect();
        Ok(sort(
            sources,
            order,
            |s| s.updated.timestamp_micros(),
            |s| s.created.timestamp_micros(),
        ))
    }

    async fn sources_for_notebook(&self, notebook_id: &str) -> Result<Vec<Source>, DomainError> {
        let sources: Vec<Source> = self
            .records
            .read()
            .await
            .sources
            .values()
            .filter(|source| source.notebook_id == notebook_id)
            .cloned()
            .collect();
        Ok(sort(
            sources,
            OrderBy::UpdatedDesc,
            |s| s.updated.timestamp_micros(),
            |s| s.created.timestamp_micros(),
        ))
    }

    async fn save_source(&self, source: &Source) -> Result<Source, DomainError> {
        let mut stored = source.clone();
        stored.updated = Utc::now();
        self.records
            .write()
            .await
            .sources
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_source(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        records.embeddings.remove(id);
        Ok(records.sources.remove(id).is_some())
    }

    async fn get_note(&self, id: &str) -> Result<Option<Note>, DomainError> {
        Ok(self.records.read().await.notes.get(id).cloned())
    }

    async fn list_notes(&self, order: OrderBy) -> Result<Vec<Note>, DomainError> {
        let notes: Vec<Note> = self.records.read().await.notes.values().cloned().collect();
        Ok(sort(
            notes,
            order,
            |n| n.updated.timestamp_micros(),
            |n| n.created.timestamp_micros(),
        ))
    }

    async fn notes_for_notebook(&self, notebook_id: &str) -> Result<Vec<Note>, DomainError> {
        let notes: Vec<Note> = self
            .records
            .read()
            .await
            .notes
            .values()
            .filter(|note| note.notebook_id.as_deref() == Some(notebook_id))
            .cloned()
            .collect();
        Ok(sort(
            notes,
            OrderBy::UpdatedDesc,
            |n| n.updated.timestamp_micros(),
            |n| n.created.timestamp_micros(),
        ))
    }

    async fn save_note(&self, note: &Note) -> Result<Note, DomainError> {
        let mut stored = note.clone();
        stored.updated = Utc::now();
        self.records
            .write()
            .await
            .notes
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_note(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.records.write().await.notes.remove(id).is_some())
    }

    async fn get_transformation(&self, id: &str) -> Result<Option<Transformation>, DomainError> {
        Ok(self.records.read().await.transformations.get(id).cloned())
    }

    async fn save_transformation(
        &self,
        transformation: &Transformation,
    ) -> Result<Transformation, DomainError> {
        self.records
            .write()
            .await
            .transformations
            .insert(transformation.id.clone(), transformation.clone());
        Ok(transformation.clone())
    }

    async fn save_embeddings(
        &self,
        source_id: &str,
        chunks: Vec<EmbeddedChunk>,
    ) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .embeddings
            .insert(source_id.to_string(), chunks);
        Ok(())
    }
}
