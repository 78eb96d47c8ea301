//! Client for OpenAI-compatible chat completion APIs.

use reqwest::Client;
use std::time::Instant;

use crate::config::{build_auth_header, ChatConfig};
use crate::model::{ChatMessage, ChatRequest, ChatResponse};

use super::error::ApiError;
use super::http::{endpoint_url, ensure_success, read_json};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Typed accessor for `POST /v1/chat/completions`.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(client: Client, config: ChatConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Build the request body for a conversation using the configured
    /// model and temperature.
    pub fn build_request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
        }
    }

    /// Send the request and return the decoded response.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let Some((header_name, header_value)) = build_auth_header(&self.config) else {
            return Err(ApiError::NotConfigured {
                reason: format!(
                    "chat.api_key is not set and ${} is empty",
                    self.config.api_key_env
                ),
            });
        };

        let url = endpoint_url(&self.config.base_url, COMPLETIONS_PATH);

        tracing::debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            "Sending chat completion request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header(header_name, header_value)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("POST {}", COMPLETIONS_PATH), e))?;

        let response = ensure_success(response).await?;
        let body: ChatResponse = read_json(response, COMPLETIONS_PATH).await?;

        tracing::debug!(
            latency_ms = start.elapsed().as_millis() as u64,
            choices = body.choices.len(),
            "Chat completion received"
        );

        Ok(body)
    }

    /// Send the conversation and return the assistant's reply.
    pub async fn reply(&self, history: Vec<ChatMessage>) -> Result<ChatMessage, ApiError> {
        let request = self.build_request(history);
        self.complete(&request)
            .await?
            .into_first_message()
            .ok_or(ApiError::EmptyResponse { what: "assistant" })
    }
}
