use std::sync::Arc;
use std::time::Instant;

use crate::completion::CompletionClient;
use crate::config::Settings;
use crate::execution::PromptExecutor;
use crate::prompt::PromptBackend;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub prompt_backend: Arc<dyn PromptBackend>,
    pub executor: Arc<PromptExecutor>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        settings: Settings,
        prompt_backend: Arc<dyn PromptBackend>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        let executor = Arc::new(PromptExecutor::new(
            prompt_backend.clone(),
            completion_client,
            settings.openai.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            prompt_backend,
            executor,
            started_at: Instant::now(),
        }
    }
}
