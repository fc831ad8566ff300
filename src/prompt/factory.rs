//! Prompt backend factory

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorageConfig;

use super::backend::PromptBackend;
use super::memory_backend::MemoryPromptBackend;
use super::postgres_backend::PostgresPromptBackend;

/// Create a prompt backend based on configuration.
///
/// Returns the implementation named by `storage.backend`:
/// - `"postgres"`: `PostgresPromptBackend` over the provided pool
/// - `"memory"` (default): `MemoryPromptBackend`
///
/// Requesting Postgres without a pool falls back to memory with a warning,
/// so a misconfigured local run still starts.
pub fn create_prompt_backend(
    settings: &StorageConfig,
    pool: Option<PgPool>,
) -> Arc<dyn PromptBackend> {
    match settings.backend.as_str() {
        "postgres" => {
            if let Some(pool) = pool {
                tracing::info!(backend = "postgres", "Creating PostgreSQL prompt backend");
                Arc::new(PostgresPromptBackend::new(pool))
            } else {
                tracing::warn!(
                    "PostgreSQL backend requested but no pool provided, falling back to memory"
                );
                Arc::new(MemoryPromptBackend::new())
            }
        }
        _ => {
            tracing::info!(backend = "memory", "Creating memory prompt backend");
            Arc::new(MemoryPromptBackend::new())
        }
    }
}
