//! Prompt execution endpoint.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::execution::{ExecuteRequest, ExecutionResponse};
use crate::server::AppState;

/// POST /api/v1/prompts/execute - Fill a stored prompt and run it upstream
#[tracing::instrument(
    name = "http.execute_prompt",
    skip(state, request),
    fields(prompt_id = request.prompt_id)
)]
pub async fn execute_prompt(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ExecutionResponse>> {
    let response = state.executor.execute(request).await?;
    Ok(Json(response))
}
