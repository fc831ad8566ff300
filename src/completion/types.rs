//! Completion request/response types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion-specific error type
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Completion API returned no choices")]
    EmptyResponse,
}

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// A single chat message in a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user", "system", or "assistant"
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,

    /// Maximum completion tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// Per-request overrides accepted by the execute endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionOptions {
    /// Model identifier override
    pub model: Option<String>,

    /// Maximum completion tokens override
    pub max_tokens: Option<u32>,

    /// Sampling temperature override
    pub temperature: Option<f32>,
}
