//! OpenAI-compatible chat-completion client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::OpenAiConfig;

use super::types::{CompletionError, CompletionRequest, CompletionResult};

/// Abstraction over the hosted completion API.
///
/// The executor talks to this trait; tests swap in a mock so no network is
/// involved.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit a chat-completion request and return the first choice's text.
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String>;
}

/// Client for the OpenAI chat-completions endpoint.
///
/// `base_url` is configurable so the service also works against
/// OpenAI-compatible gateways.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a client from configuration.
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[tracing::instrument(
        name = "completion.openai",
        skip(self, request),
        fields(model = %request.model)
    )]
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Completion API returned an error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: ApiResponse = response.json().await?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
