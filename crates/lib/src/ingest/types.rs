//! Request and intermediate types for source ingestion.

use serde::Deserialize;

use crate::types::{Notebook, Transformation};

/// The wire shape of a source creation request.
///
/// The origin fields are flat: `type` picks the origin kind and the matching
/// field (`url` / `file_path` / `content`) must be populated. The validator
/// turns this into a [`ContentState`] or rejects it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceIngestInput {
    #[serde(default)]
    pub notebook_id: String,
    /// One of `link`, `upload`, or `text`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    /// For uploads: remove the file once its text has been extracted.
    #[serde(default)]
    pub delete_source: bool,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Transformation ids, applied in this order.
    #[serde(default)]
    pub transformations: Vec<String>,
    #[serde(default)]
    pub embed: bool,
}

/// A normalized content origin. Exactly one variant, required field
/// guaranteed non-empty by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState {
    Link { url: String },
    Upload { file_path: String, delete_source: bool },
    Text { content: String },
}

/// A fully validated ingestion job: the normalized origin plus the resolved
/// notebook and transformations, ready to hand to the pipeline unchanged.
#[derive(Debug, Clone)]
pub struct ValidatedIngest {
    pub content_state: ContentState,
    pub notebook: Notebook,
    pub transformations: Vec<Transformation>,
    pub title: Option<String>,
    pub embed: bool,
}
