//! OpenAI-compatible embeddings client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ModelError;

#[derive(Serialize, Debug)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize, Debug)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize, Debug)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Generates a vector embedding for `input` via an OpenAI-compatible
/// `/v1/embeddings` endpoint.
pub async fn generate_embedding(
    api_url: &str,
    api_key: Option<&str>,
    model: &str,
    input: &str,
) -> Result<Vec<f32>, ModelError> {
    debug!(model, chars = input.len(), "requesting embedding");

    let client = Client::new();
    let mut request = client.post(api_url).json(&EmbeddingRequest { model, input });
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await.map_err(ModelError::Request)?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ModelError::Api(format!("status {status}: {body}")));
    }

    let parsed: EmbeddingResponse = response.json().await.map_err(ModelError::Deserialization)?;
    parsed
        .data
        .into_iter()
        .next()
        .map(|data| data.embedding)
        .ok_or_else(|| ModelError::Api("embeddings response contained no data".to_string()))
}
