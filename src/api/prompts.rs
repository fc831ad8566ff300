//! Prompt CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::metrics::{PROMPTS_CREATED_TOTAL, PROMPTS_DELETED_TOTAL, PROMPTS_UPDATED_TOTAL};
use crate::prompt::{CreatePromptRequest, Prompt, PromptListResponse, UpdatePromptRequest};
use crate::server::AppState;

/// POST /api/v1/prompts - Create a new prompt
#[tracing::instrument(name = "http.create_prompt", skip(state, request))]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(request): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<Prompt>)> {
    let (title, template) = request.into_validated()?;

    let prompt = state.prompt_backend.create(title, template).await?;
    PROMPTS_CREATED_TOTAL.inc();

    tracing::info!(prompt_id = prompt.id, "Prompt created");

    Ok((StatusCode::CREATED, Json(prompt)))
}

/// GET /api/v1/prompts - List all prompts, newest first
#[tracing::instrument(name = "http.list_prompts", skip(state))]
pub async fn list_prompts(State(state): State<AppState>) -> Result<Json<PromptListResponse>> {
    let prompts = state.prompt_backend.list().await?;
    let total = prompts.len();

    Ok(Json(PromptListResponse { prompts, total }))
}

/// GET /api/v1/prompts/{id} - Get a specific prompt
#[tracing::instrument(name = "http.get_prompt", skip(state))]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Prompt>> {
    let prompt = state.prompt_backend.get(id).await?;
    Ok(Json(prompt))
}

/// PUT /api/v1/prompts/{id} - Update an existing prompt
#[tracing::instrument(name = "http.update_prompt", skip(state, request))]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePromptRequest>,
) -> Result<Json<Prompt>> {
    let (title, template) = request.into_validated()?;

    let prompt = state.prompt_backend.update(id, title, template).await?;
    PROMPTS_UPDATED_TOTAL.inc();

    Ok(Json(prompt))
}

/// DELETE /api/v1/prompts/{id} - Delete a prompt
#[tracing::instrument(name = "http.delete_prompt", skip(state))]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.prompt_backend.delete(id).await?;
    PROMPTS_DELETED_TOTAL.inc();

    tracing::info!(prompt_id = id, "Prompt deleted");

    Ok(StatusCode::NO_CONTENT)
}
