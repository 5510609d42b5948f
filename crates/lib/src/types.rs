//! Domain records shared across the library and the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A container grouping sources and notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Notebook {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            created: now,
            updated: now,
        }
    }
}

/// Where a source's content came from: an uploaded file or a remote URL.
/// At most one of the two fields is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub file_path: Option<String>,
    pub url: Option<String>,
}

/// Derived text produced by running a transformation over a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInsight {
    /// The title of the transformation that produced this insight.
    pub insight_type: String,
    pub content: String,
}

/// A unit of ingested content belonging to a notebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub notebook_id: String,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub asset: Option<Asset>,
    pub full_text: Option<String>,
    pub embedded_chunks: usize,
    pub insights: Vec<SourceInsight>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Source {
    /// Creates an empty source attached to a notebook. The pipeline fills in
    /// the content fields before the source is persisted.
    pub fn new(notebook_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            notebook_id: notebook_id.into(),
            title: None,
            topics: Vec::new(),
            asset: None,
            full_text: None,
            embedded_chunks: 0,
            insights: Vec::new(),
            created: now,
            updated: now,
        }
    }
}

/// Whether a note was written by a person or generated by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Human,
    Ai,
}

/// A free-form note, optionally attached to a notebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub notebook_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_type: NoteType,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Note {
    pub fn new(title: Option<String>, content: Option<String>, note_type: NoteType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            notebook_id: None,
            title,
            content,
            note_type,
            created: now,
            updated: now,
        }
    }
}

/// A named text-derivation operation (summary, key insights, ...) applied to
/// a source's extracted text. `prompt` is the system prompt handed to the
/// model, with the source text as the user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transformation {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub apply_default: bool,
}

impl Transformation {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            title: title.into(),
            description: String::new(),
            prompt: prompt.into(),
            apply_default: false,
        }
    }
}

/// One embedded chunk of a source's text, ready for vector search.
#[derive(Debug, Clone)]
pub struct EmbeddedChunk {
    pub content: String,
    pub vector: Vec<f32>,
}
