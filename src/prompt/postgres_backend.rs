//! PostgreSQL prompt backend.
//!
//! Persistent implementation of the `PromptBackend` trait backed by a
//! `prompts` table (see `migrations/`). The pool is constructed at startup
//! and injected; the backend owns no connection lifecycle of its own.

use async_trait::async_trait;
use sqlx::PgPool;

use super::backend::{BackendHealth, PromptBackend};
use super::types::{Prompt, PromptError, PromptResult};

/// PostgreSQL-backed prompt storage.
pub struct PostgresPromptBackend {
    pool: PgPool,
}

impl PostgresPromptBackend {
    /// Create a backend over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptBackend for PostgresPromptBackend {
    async fn create(&self, title: String, template: String) -> PromptResult<Prompt> {
        let prompt = sqlx::query_as::<_, Prompt>(
            r#"
            INSERT INTO prompts (title, template)
            VALUES ($1, $2)
            RETURNING id, title, template, created_at, updated_at
            "#,
        )
        .bind(&title)
        .bind(&template)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(prompt_id = prompt.id, "Prompt stored in PostgreSQL");

        Ok(prompt)
    }

    async fn list(&self) -> PromptResult<Vec<Prompt>> {
        let prompts = sqlx::query_as::<_, Prompt>(
            r#"
            SELECT id, title, template, created_at, updated_at
            FROM prompts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    async fn get(&self, id: i64) -> PromptResult<Prompt> {
        sqlx::query_as::<_, Prompt>(
            r#"
            SELECT id, title, template, created_at, updated_at
            FROM prompts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(PromptError::NotFound(id))
    }

    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        template: Option<String>,
    ) -> PromptResult<Prompt> {
        sqlx::query_as::<_, Prompt>(
            r#"
            UPDATE prompts
            SET title = COALESCE($2, title),
                template = COALESCE($3, template),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, template, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(template)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(PromptError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> PromptResult<()> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PromptError::NotFound(id));
        }

        Ok(())
    }

    async fn health(&self) -> BackendHealth {
        let count: Option<u64> = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prompts")
            .fetch_one(&self.pool)
            .await
            .ok()
            .map(|n| n as u64);

        BackendHealth {
            backend: "postgres",
            connected: count.is_some(),
            prompt_count: count,
        }
    }
}
