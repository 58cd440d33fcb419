use super::http::{build_client, send_once};
use super::{BackendError, TextBackend};
use crate::models::BackendConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// OpenAI-compatible chat completions backend
pub struct OpenAiBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiBackend {
    pub fn new(config: &BackendConfig, api_key: String) -> Result<Self, BackendError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: format!("{}/v1/chat/completions", config.base_url()),
            api_key,
            model: config.model().to_string(),
            temperature: config.temperature,
            timeout,
        })
    }

    fn request_body(&self, prompt: &str, system: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "temperature": self.temperature,
        })
    }
}

/// Content of the first choice
fn parse_response(body: &str) -> Result<String, BackendError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| BackendError::InvalidResponse("no message content in choices".to_string()))
}

#[async_trait]
impl TextBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, BackendError> {
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt, system));

        let body = send_once(request, self.timeout).await?;
        parse_response(&body)
    }
}
