use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::server::{api_key_auth, AppState};

use super::execute::execute_prompt;
use super::health::health;
use super::metrics::prometheus_metrics;
use super::prompts::{create_prompt, delete_prompt, get_prompt, list_prompts, update_prompt};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health & Metrics (unauthenticated)
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Prompt endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/prompts", post(create_prompt).get(list_prompts))
                .route("/prompts/execute", post(execute_prompt))
                .route(
                    "/prompts/{id}",
                    get(get_prompt).put(update_prompt).delete(delete_prompt),
                )
                .layer(middleware::from_fn_with_state(state, api_key_auth)),
        )
}
