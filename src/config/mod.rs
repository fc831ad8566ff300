mod settings;

pub use settings::{ApiConfig, OpenAiConfig, ServerConfig, Settings, StorageConfig};
