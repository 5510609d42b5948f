//! Paragraph-oriented text chunking for the embedding step.

use thiserror::Error;
use tracing::warn;

/// Target maximum chunk size in characters. Sized conservatively so chunks
/// fit comfortably within common embedding model input limits.
const CHUNK_CHAR_LIMIT: usize = 2048;

/// Character overlap between consecutive splits of an oversized paragraph,
/// to keep context across the boundary.
const CHUNK_OVERLAP: usize = 128;

#[derive(Error, Debug, PartialEq)]
pub enum ChunkError {
    #[error("text content is empty or only whitespace")]
    EmptyContent,
}

/// Splits text into chunks along paragraph boundaries (`\n\n`).
///
/// Paragraphs under [`CHUNK_CHAR_LIMIT`] become one chunk each; longer
/// paragraphs are split by character count with [`CHUNK_OVERLAP`] carried
/// between the pieces.
pub fn chunk_text(text: &str) -> Result<Vec<String>, ChunkError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChunkError::EmptyContent);
    }

    let mut chunks = Vec::new();
    for paragraph in trimmed.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if paragraph.chars().count() <= CHUNK_CHAR_LIMIT {
            chunks.push(paragraph.to_string());
        } else {
            warn!(
                chars = paragraph.chars().count(),
                limit = CHUNK_CHAR_LIMIT,
                "paragraph exceeds chunk limit, splitting by character"
            );
            split_oversized(paragraph, &mut chunks);
        }
    }

    Ok(chunks)
}

fn split_oversized(paragraph: &str, chunks: &mut Vec<String>) {
    let chars: Vec<char> = paragraph.chars().collect();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + CHUNK_CHAR_LIMIT).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start = end - CHUNK_OVERLAP;
    }
}
