//! # Ingestion Request Validation
//!
//! Rejects malformed ingestion requests before any pipeline work starts, so
//! invalid input never reaches content acquisition. Lookups are read-only;
//! a validation failure leaves no partial state behind.

use crate::errors::DomainError;
use crate::ingest::types::{ContentState, SourceIngestInput, ValidatedIngest};
use crate::store::DomainStore;

/// Validates a source creation request against the store.
///
/// Checks run in a fixed order for deterministic error reporting:
/// 1. `notebook_id` must resolve to an existing notebook.
/// 2. `type` must be `link`, `upload`, or `text`, and the matching field
///    must be non-empty.
/// 3. Each transformation id must resolve, in the caller-supplied order;
///    the first unresolved id is the one reported.
pub async fn validate_ingest(
    store: &dyn DomainStore,
    input: &SourceIngestInput,
) -> Result<ValidatedIngest, DomainError> {
    let notebook = store
        .get_notebook(&input.notebook_id)
        .await?
        .ok_or_else(|| DomainError::not_found("notebook"))?;

    let content_state = match input.kind.as_str() {
        "link" => ContentState::Link {
            url: required(&input.url, "url required")?,
        },
        "upload" => ContentState::Upload {
            file_path: required(&input.file_path, "file_path required")?,
            delete_source: input.delete_source,
        },
        "text" => {
            // Keep the original formatting; only the emptiness check trims.
            let content = match input.content.as_deref() {
                Some(content) if !content.trim().is_empty() => content.to_string(),
                _ => return Err(DomainError::InvalidInput("content required".into())),
            };
            ContentState::Text { content }
        }
        _ => {
            return Err(DomainError::InvalidInput(
                "unsupported origin kind".into(),
            ))
        }
    };

    let mut transformations = Vec::with_capacity(input.transformations.len());
    for id in &input.transformations {
        let transformation = store
            .get_transformation(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("transformation {id}")))?;
        transformations.push(transformation);
    }

    Ok(ValidatedIngest {
        content_state,
        notebook,
        transformations,
        title: input.title.clone(),
        embed: input.embed,
    })
}

fn required(value: &Option<String>, message: &str) -> Result<String, DomainError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DomainError::InvalidInput(message.into())),
    }
}
