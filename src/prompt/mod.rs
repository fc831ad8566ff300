//! Prompt storage module.
//!
//! This module provides:
//! - Prompt record types and validation for create/update requests
//! - A storage backend trait with PostgreSQL and in-memory implementations
//! - A factory that picks the backend from configuration
//!
//! The database handle is constructed once at startup and passed in; backends
//! never reach for a shared connection singleton.

mod backend;
mod factory;
mod memory_backend;
mod postgres_backend;
mod types;

pub use backend::{BackendHealth, PromptBackend};
pub use factory::create_prompt_backend;
pub use memory_backend::MemoryPromptBackend;
pub use postgres_backend::PostgresPromptBackend;
pub use types::{
    CreatePromptRequest, Prompt, PromptError, PromptListResponse, PromptResult,
    UpdatePromptRequest,
};
