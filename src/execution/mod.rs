//! Prompt execution.
//!
//! Ties the layers together: load a stored prompt, substitute the supplied
//! variables into its template, send the completed text to the completion
//! client, and return completion plus inputs to the caller.
//!
//! Missing placeholders are not an execution error - substitution is
//! best-effort and unfilled markers stay in the text verbatim - but the
//! response reports them so callers can decide to treat that as a failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::completion::{
    ChatMessage, CompletionClient, CompletionOptions, CompletionRequest,
};
use crate::config::OpenAiConfig;
use crate::error::{AppError, Result};
use crate::metrics::{ExecutionMetrics, COMPLETION_LATENCY_SECONDS};
use crate::prompt::{PromptBackend, PromptError};
use crate::template;

/// Request to execute a stored prompt
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    /// Id of the stored prompt
    pub prompt_id: i64,

    /// Placeholder values; must be a JSON object
    pub variables: Map<String, Value>,

    /// Per-request completion overrides (optional)
    #[serde(default)]
    pub options: CompletionOptions,
}

/// Outcome of executing a prompt
#[derive(Debug, Serialize)]
pub struct ExecutionResponse {
    /// The completed text that was sent upstream
    pub prompt: String,

    /// The completion returned by the upstream API
    pub response: String,

    /// The variable map as supplied by the caller
    pub variables: Map<String, Value>,

    /// Extracted identifiers the caller did not supply
    pub missing_variables: Vec<String>,
}

/// Executes stored prompts against the completion API.
pub struct PromptExecutor {
    backend: Arc<dyn PromptBackend>,
    client: Arc<dyn CompletionClient>,
    defaults: OpenAiConfig,
}

impl PromptExecutor {
    /// Create an executor over a storage backend and completion client.
    pub fn new(
        backend: Arc<dyn PromptBackend>,
        client: Arc<dyn CompletionClient>,
        defaults: OpenAiConfig,
    ) -> Self {
        Self {
            backend,
            client,
            defaults,
        }
    }

    /// Execute a stored prompt with the supplied variables.
    #[tracing::instrument(
        name = "execution.run",
        skip(self, request),
        fields(prompt_id = request.prompt_id)
    )]
    pub async fn execute(&self, request: ExecuteRequest) -> Result<ExecutionResponse> {
        let prompt = self.backend.get(request.prompt_id).await.map_err(|e| {
            if matches!(e, PromptError::NotFound(_)) {
                ExecutionMetrics::record_not_found();
            }
            AppError::from(e)
        })?;

        let completed = template::substitute(&prompt.template, &request.variables);
        let missing = template::missing_placeholders(&prompt.template, &request.variables);

        if !missing.is_empty() {
            tracing::debug!(
                prompt_id = prompt.id,
                missing = ?missing,
                "Executing with unfilled placeholders"
            );
        }

        let completion_request = CompletionRequest {
            model: request
                .options
                .model
                .unwrap_or_else(|| self.defaults.model.clone()),
            messages: vec![ChatMessage::user(completed.clone())],
            max_tokens: request.options.max_tokens.unwrap_or(self.defaults.max_tokens),
            temperature: request
                .options
                .temperature
                .unwrap_or(self.defaults.temperature),
        };

        let timer = COMPLETION_LATENCY_SECONDS.start_timer();
        let response = match self.client.complete(completion_request).await {
            Ok(text) => text,
            Err(e) => {
                timer.observe_duration();
                ExecutionMetrics::record_upstream_error();
                return Err(e.into());
            }
        };
        timer.observe_duration();

        ExecutionMetrics::record_ok();

        Ok(ExecutionResponse {
            prompt: completed,
            response,
            variables: request.variables,
            missing_variables: missing,
        })
    }
}
