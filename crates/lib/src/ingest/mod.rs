//! # Source Ingestion
//!
//! Everything between an incoming ingestion request and a persisted
//! `Source`: the request validator, the pipeline that acquires and extracts
//! content, applies transformations and optional embedding, and the text
//! chunker the embedding step relies on.

pub mod chunking;
pub mod pipeline;
pub mod types;
pub mod validate;

pub use chunking::chunk_text;
pub use pipeline::{EmbeddingConfig, IngestPipeline, PipelineError, SourcePipeline};
pub use types::{ContentState, SourceIngestInput, ValidatedIngest};
pub use validate::validate_ingest;
