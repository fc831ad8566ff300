//! API layer - HTTP endpoint handlers organized by domain.

mod execute;
mod health;
mod metrics;
mod prompts;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use execute::execute_prompt;
pub use health::{health, HealthResponse, StorageHealthResponse};
pub use metrics::prometheus_metrics;
pub use prompts::{create_prompt, delete_prompt, get_prompt, list_prompts, update_prompt};
pub use routes::api_routes;
