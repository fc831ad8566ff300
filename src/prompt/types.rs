//! Prompt record types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prompt-specific error type
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt not found: {0}")]
    NotFound(i64),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result type for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;

/// A stored prompt template record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Prompt {
    /// Auto-assigned identifier
    pub id: i64,

    /// Human-readable prompt title
    pub title: String,

    /// Template text with {variable} placeholders
    pub template: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new prompt
#[derive(Debug, Deserialize)]
pub struct CreatePromptRequest {
    /// Human-readable prompt title
    pub title: String,

    /// Template text with {variable} placeholders
    pub template: String,
}

impl CreatePromptRequest {
    /// Validate and trim the request, returning (title, template).
    ///
    /// Title and template must both be non-empty after trimming. Trimmed
    /// values are what gets stored, matching what callers see back.
    pub fn into_validated(self) -> PromptResult<(String, String)> {
        let title = self.title.trim();
        let template = self.template.trim();

        if title.is_empty() {
            return Err(PromptError::InvalidPrompt(
                "Title cannot be empty".to_string(),
            ));
        }

        if title.len() > 255 {
            return Err(PromptError::InvalidPrompt(
                "Title must be at most 255 characters".to_string(),
            ));
        }

        if template.is_empty() {
            return Err(PromptError::InvalidPrompt(
                "Template cannot be empty".to_string(),
            ));
        }

        Ok((title.to_string(), template.to_string()))
    }
}

/// Request to update an existing prompt
#[derive(Debug, Deserialize)]
pub struct UpdatePromptRequest {
    /// New title (optional)
    pub title: Option<String>,

    /// New template text (optional)
    pub template: Option<String>,
}

impl UpdatePromptRequest {
    /// Validate and trim the supplied fields.
    pub fn into_validated(self) -> PromptResult<(Option<String>, Option<String>)> {
        let title = match self.title {
            Some(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(PromptError::InvalidPrompt(
                        "Title cannot be empty".to_string(),
                    ));
                }
                if t.len() > 255 {
                    return Err(PromptError::InvalidPrompt(
                        "Title must be at most 255 characters".to_string(),
                    ));
                }
                Some(t.to_string())
            }
            None => None,
        };

        let template = match self.template {
            Some(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(PromptError::InvalidPrompt(
                        "Template cannot be empty".to_string(),
                    ));
                }
                Some(t.to_string())
            }
            None => None,
        };

        Ok((title, template))
    }
}

/// Response for listing prompts
#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    /// Prompts, newest first
    pub prompts: Vec<Prompt>,

    /// Total count
    pub total: usize,
}
