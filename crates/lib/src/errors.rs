use thiserror::Error;

/// Errors raised by the domain layer: request validation and storage.
///
/// The HTTP boundary maps these onto status codes: `InvalidInput` is a
/// client-correctable 400, `NotFound` a 404, and `Database` a 500.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("database operation failed: {0}")]
    Database(String),
}

impl DomainError {
    /// Shorthand for a `NotFound` referencing a named entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        DomainError::NotFound(what.into())
    }
}

/// Errors from calls to external model endpoints (chat and embeddings).
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("model request failed: {0}")]
    Request(reqwest::Error),
    #[error("model API returned an error: {0}")]
    Api(String),
    #[error("failed to deserialize model response: {0}")]
    Deserialization(reqwest::Error),
}
