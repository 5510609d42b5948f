//! # lorebook
//!
//! Core library for the lorebook research-notebook service. It provides the
//! domain types (notebooks, sources, notes, transformations), the storage
//! seam, the ingestion request validator, and the source ingestion pipeline
//! that turns a link, an uploaded file, or raw text into a persisted,
//! transformed, and optionally embedded `Source`.

pub mod errors;
pub mod ingest;
pub mod providers;
pub mod store;
pub mod types;

pub use errors::{DomainError, ModelError};
pub use ingest::{
    chunk_text, validate_ingest, ContentState, EmbeddingConfig, IngestPipeline, PipelineError,
    SourceIngestInput, SourcePipeline, ValidatedIngest,
};
pub use store::{DomainStore, MemoryStore, OrderBy};
pub use types::{
    Asset, EmbeddedChunk, Note, NoteType, Notebook, Source, SourceInsight, Transformation,
};
