pub mod embedding;
pub mod openai;

pub use embedding::generate_embedding;
pub use openai::OpenAiCompatProvider;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::ModelError;

/// A chat-style language model behind an HTTP API.
///
/// This is the engine the transformation executor runs on: the
/// transformation's prompt goes in as the system message, the source text as
/// the user message, and the reply comes back as the derived insight.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug {
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, ModelError>;
}
