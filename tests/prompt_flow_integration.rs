//! Cross-component integration tests
//!
//! These tests verify the full create -> fill -> execute flow across the
//! storage backend, template engine, and executor without requiring a
//! PostgreSQL instance or a live completion API.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use prompt_hub_service::completion::{
    CompletionClient, CompletionError, CompletionOptions, CompletionRequest, CompletionResult,
};
use prompt_hub_service::config::OpenAiConfig;
use prompt_hub_service::execution::{ExecuteRequest, PromptExecutor};
use prompt_hub_service::prompt::{MemoryPromptBackend, PromptBackend, PromptError};
use prompt_hub_service::template;

/// Completion client double: echoes the prompt it was sent, prefixed, so
/// tests can assert on exactly what went upstream.
struct EchoCompletionClient {
    requests: Mutex<Vec<CompletionRequest>>,
    fail_with_status: Option<u16>,
}

impl EchoCompletionClient {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            fail_with_status: None,
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            fail_with_status: Some(status),
        })
    }

    fn sent_prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.messages[0].content.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionClient for EchoCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String> {
        let content = request.messages[0].content.clone();
        self.requests.lock().unwrap().push(request);

        match self.fail_with_status {
            Some(status) => Err(CompletionError::Api {
                status,
                body: "simulated upstream failure".to_string(),
            }),
            None => Ok(format!("echo: {}", content)),
        }
    }
}

fn test_defaults() -> OpenAiConfig {
    OpenAiConfig {
        api_key: "test-key".to_string(),
        base_url: "http://localhost".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        max_tokens: 1000,
        temperature: 1.0,
    }
}

fn vars(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

// =============================================================================
// Full flow: create -> inspect placeholders -> execute
// =============================================================================

#[tokio::test]
async fn test_create_then_execute_flow() {
    let backend = Arc::new(MemoryPromptBackend::new());
    let client = EchoCompletionClient::new();
    let executor = PromptExecutor::new(backend.clone(), client.clone(), test_defaults());

    let prompt = backend
        .create(
            "Translator".to_string(),
            "Translate into {language}: {text}".to_string(),
        )
        .await
        .unwrap();

    // The caller can ask the engine which variables the template needs
    let required = template::extract_placeholders(&prompt.template);
    assert_eq!(required, vec!["language", "text"]);

    let result = executor
        .execute(ExecuteRequest {
            prompt_id: prompt.id,
            variables: vars(json!({"language": "Spanish", "text": "Hi"})),
            options: CompletionOptions::default(),
        })
        .await
        .unwrap();

    assert_eq!(result.prompt, "Translate into Spanish: Hi");
    assert_eq!(result.response, "echo: Translate into Spanish: Hi");
    assert_eq!(result.variables["text"], "Hi");
    assert!(result.missing_variables.is_empty());

    // Exactly one upstream call with the completed text
    assert_eq!(client.sent_prompts(), vec!["Translate into Spanish: Hi"]);
}

#[tokio::test]
async fn test_execute_with_partial_variables_keeps_markers() {
    let backend = Arc::new(MemoryPromptBackend::new());
    let client = EchoCompletionClient::new();
    let executor = PromptExecutor::new(backend.clone(), client.clone(), test_defaults());

    let prompt = backend
        .create("Greeting".to_string(), "Hello {name} from {place}".to_string())
        .await
        .unwrap();

    let result = executor
        .execute(ExecuteRequest {
            prompt_id: prompt.id,
            variables: vars(json!({"name": "Alice"})),
            options: CompletionOptions::default(),
        })
        .await
        .unwrap();

    // Best-effort substitution: the unfilled marker went upstream verbatim
    assert_eq!(result.prompt, "Hello Alice from {place}");
    assert_eq!(result.missing_variables, vec!["place"]);
    assert_eq!(client.sent_prompts(), vec!["Hello Alice from {place}"]);
}

#[tokio::test]
async fn test_execute_upstream_failure_surfaces_after_substitution() {
    let backend = Arc::new(MemoryPromptBackend::new());
    let client = EchoCompletionClient::failing(503);
    let executor = PromptExecutor::new(backend.clone(), client.clone(), test_defaults());

    let prompt = backend
        .create("Doomed".to_string(), "Ask {who}".to_string())
        .await
        .unwrap();

    let err = executor
        .execute(ExecuteRequest {
            prompt_id: prompt.id,
            variables: vars(json!({"who": "nobody"})),
            options: CompletionOptions::default(),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("503"));
    // Substitution happened before the upstream call failed
    assert_eq!(client.sent_prompts(), vec!["Ask nobody"]);
}

// =============================================================================
// CRUD lifecycle against the backend trait
// =============================================================================

#[tokio::test]
async fn test_prompt_crud_lifecycle() {
    let backend: Arc<dyn PromptBackend> = Arc::new(MemoryPromptBackend::new());

    let created = backend
        .create("Original".to_string(), "Say {word}".to_string())
        .await
        .unwrap();

    let fetched = backend.get(created.id).await.unwrap();
    assert_eq!(fetched.title, "Original");

    let updated = backend
        .update(created.id, Some("Renamed".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.template, "Say {word}");

    let listed = backend.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Renamed");

    backend.delete(created.id).await.unwrap();
    assert!(matches!(
        backend.get(created.id).await,
        Err(PromptError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let backend = Arc::new(MemoryPromptBackend::new());

    let mut ids = Vec::new();
    for i in 0..5 {
        let prompt = backend
            .create(format!("Prompt {}", i), "{x}".to_string())
            .await
            .unwrap();
        ids.push(prompt.id);
    }

    let listed = backend.list().await.unwrap();
    let listed_ids: Vec<i64> = listed.iter().map(|p| p.id).collect();

    ids.reverse();
    assert_eq!(listed_ids, ids);
}

// =============================================================================
// Engine/executor agreement on the recognition rule
// =============================================================================

#[tokio::test]
async fn test_non_word_markers_survive_the_whole_pipeline() {
    let backend = Arc::new(MemoryPromptBackend::new());
    let client = EchoCompletionClient::new();
    let executor = PromptExecutor::new(backend.clone(), client.clone(), test_defaults());

    let prompt = backend
        .create(
            "Literal braces".to_string(),
            "keep {a-b} and {a} here".to_string(),
        )
        .await
        .unwrap();

    // Extraction and execution agree: only {a} is a placeholder
    assert_eq!(template::extract_placeholders(&prompt.template), vec!["a"]);

    let result = executor
        .execute(ExecuteRequest {
            prompt_id: prompt.id,
            variables: vars(json!({"a": "A", "b": "unused"})),
            options: CompletionOptions::default(),
        })
        .await
        .unwrap();

    assert_eq!(result.prompt, "keep {a-b} and A here");
    assert!(result.missing_variables.is_empty());
}
