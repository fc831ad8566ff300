use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prompt_hub_service::completion::OpenAiClient;
use prompt_hub_service::config::Settings;
use prompt_hub_service::postgres;
use prompt_hub_service::prompt::create_prompt_backend;
use prompt_hub_service::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    // Create the database pool when the postgres backend is configured.
    // The pool is built here and passed down; nothing else opens connections.
    let pool = if settings.storage.backend == "postgres" {
        Some(postgres::create_pool(&settings.storage).await?)
    } else {
        None
    };

    let prompt_backend = create_prompt_backend(&settings.storage, pool.clone());
    let completion_client = Arc::new(OpenAiClient::new(&settings.openai));

    // Create application state
    let state = AppState::new(settings.clone(), prompt_backend, completion_client);
    tracing::info!("Application state initialized");

    // Create Axum app
    let app = create_app(state);

    // Start server
    let addr = settings.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close the pool after the server stops accepting requests
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("PostgreSQL connection pool closed");
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
