//! OpenAI-compatible chat completions client.
//!
//! Works against any endpoint speaking the `/v1/chat/completions` shape:
//! local inference servers, proxies, or the hosted APIs.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::providers::ai::AiProvider;

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat client for an OpenAI-compatible API.
#[derive(Clone, Debug)]
pub struct OpenAiCompatProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl OpenAiCompatProvider {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, ModelError> {
        let client = Client::builder().build().map_err(ModelError::ClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiCompatProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ModelError> {
        let request_body = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            model: self.model.as_deref(),
            temperature: 0.2,
            stream: false,
        };

        let mut request = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .json(&request_body)
            .send()
            .await
            .map_err(ModelError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("status {status}: {body}")));
        }

        let parsed: ChatResponse = response.json().await.map_err(ModelError::Deserialization)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ModelError::Api("model returned no choices".to_string()))
    }
}
