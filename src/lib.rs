// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod metrics;
pub mod postgres;

// Domain layer (business logic)
pub mod completion;
pub mod execution;
pub mod prompt;
pub mod template;

// Application layer
pub mod api;
pub mod server;
