//! In-memory prompt backend using DashMap.
//!
//! Memory-based implementation of the `PromptBackend` trait, used for tests
//! and local development. Records are lost on service restart.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use super::backend::{BackendHealth, PromptBackend};
use super::types::{Prompt, PromptError, PromptResult};

/// In-memory prompt backend.
///
/// Ids are assigned from a monotonic counter, mirroring the serial ids the
/// Postgres backend hands out.
pub struct MemoryPromptBackend {
    prompts: DashMap<i64, Prompt>,
    next_id: AtomicI64,
}

impl Default for MemoryPromptBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPromptBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            prompts: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl PromptBackend for MemoryPromptBackend {
    async fn create(&self, title: String, template: String) -> PromptResult<Prompt> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();

        let prompt = Prompt {
            id,
            title,
            template,
            created_at: now,
            updated_at: now,
        };

        self.prompts.insert(id, prompt.clone());

        tracing::debug!(prompt_id = id, "Prompt stored in memory backend");

        Ok(prompt)
    }

    async fn list(&self) -> PromptResult<Vec<Prompt>> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Newest first; id breaks ties for records created in the same instant
        prompts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(prompts)
    }

    async fn get(&self, id: i64) -> PromptResult<Prompt> {
        self.prompts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(PromptError::NotFound(id))
    }

    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        template: Option<String>,
    ) -> PromptResult<Prompt> {
        let mut entry = self.prompts.get_mut(&id).ok_or(PromptError::NotFound(id))?;

        let prompt = entry.value_mut();
        if let Some(title) = title {
            prompt.title = title;
        }
        if let Some(template) = template {
            prompt.template = template;
        }
        prompt.updated_at = Utc::now();

        Ok(prompt.clone())
    }

    async fn delete(&self, id: i64) -> PromptResult<()> {
        self.prompts
            .remove(&id)
            .map(|_| ())
            .ok_or(PromptError::NotFound(id))
    }

    async fn health(&self) -> BackendHealth {
        BackendHealth {
            backend: "memory",
            connected: true,
            prompt_count: Some(self.prompts.len() as u64),
        }
    }
}
