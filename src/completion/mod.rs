//! Hosted chat-completion client.
//!
//! This module provides:
//! - Request/response types for the chat-completions wire format
//! - The `CompletionClient` trait the executor depends on
//! - A reqwest-based client for OpenAI-compatible endpoints

mod openai;
mod types;

pub use openai::{CompletionClient, OpenAiClient};
pub use types::{
    ChatMessage, CompletionError, CompletionOptions, CompletionRequest, CompletionResult,
};
