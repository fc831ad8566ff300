//! Storage backend trait for prompt records.

use async_trait::async_trait;

use super::types::{Prompt, PromptResult};

/// Health snapshot reported by a backend for the `/health` endpoint.
#[derive(Debug, Clone)]
pub struct BackendHealth {
    /// Backend kind ("memory" or "postgres")
    pub backend: &'static str,
    /// Whether the backing store answered a liveness probe
    pub connected: bool,
    /// Number of stored prompts, if cheaply available
    pub prompt_count: Option<u64>,
}

/// Abstraction over prompt persistence.
///
/// Inputs arrive pre-validated and pre-trimmed (see
/// [`CreatePromptRequest::into_validated`](super::CreatePromptRequest::into_validated));
/// backends only store and retrieve. The pool or map a backend wraps is
/// constructed explicitly at startup and handed in - there is no process-wide
/// connection singleton.
#[async_trait]
pub trait PromptBackend: Send + Sync {
    /// Store a new prompt, assigning its id and timestamps.
    async fn create(&self, title: String, template: String) -> PromptResult<Prompt>;

    /// List all prompts, newest first.
    async fn list(&self) -> PromptResult<Vec<Prompt>>;

    /// Fetch a prompt by id.
    async fn get(&self, id: i64) -> PromptResult<Prompt>;

    /// Apply a partial update, refreshing `updated_at`.
    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        template: Option<String>,
    ) -> PromptResult<Prompt>;

    /// Delete a prompt by id.
    async fn delete(&self, id: i64) -> PromptResult<()>;

    /// Probe backend health.
    async fn health(&self) -> BackendHealth;
}
