//! Chat-completion client for the text-generation provider.
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol that Groq
//! serves. The model's output is returned verbatim.

use crate::config::AiConfig;
use crate::error::AiError;
use crate::tools::messages::{ChatMessage, GenerationParams, TextGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

/// Groq API client
pub struct GroqClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::Service(e.to_string()))?;
        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn complete(&self, messages: &[ChatMessage], params: GenerationParams) -> Result<String, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingCredential)?;
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        debug!(model = %self.model, messages = messages.len(), "chat completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat completion failed");
            let detail = provider_message(&body).unwrap_or_else(|| body.clone());
            return Err(classify_status(status.as_u16(), detail));
        }

        parse_completion(&body)
    }
}

fn classify_transport(err: reqwest::Error) -> AiError {
    if err.is_timeout() {
        AiError::Timeout
    } else {
        AiError::Service(err.to_string())
    }
}

fn classify_status(status: u16, detail: String) -> AiError {
    match status {
        401 | 403 => AiError::Authentication(detail),
        _ => AiError::Service(format!("API request failed with status {}: {}", status, detail)),
    }
}

fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ChatResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .map(|e| e.message)
}

fn parse_completion(body: &str) -> Result<String, AiError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| AiError::Service(format!("malformed response: {}", e)))?;

    if let Some(error) = parsed.error {
        return Err(AiError::Service(error.message));
    }

    parsed
        .choices
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(AiError::EmptyResponse)
}
