use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use story_spark::api::routes::{create_router, AppState};
use story_spark::config::Config;
use story_spark::story::{GeminiClient, StoryService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Story Spark v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", config.addr);
    tracing::info!("Static directory: {}", config.static_dir.display());

    let gemini = config.gemini;
    let stories = match gemini.api_key {
        Some(api_key) => {
            tracing::info!("Story model: {}", gemini.model);
            let client = GeminiClient::new(api_key, gemini.model, gemini.base_url, gemini.timeout)?;
            StoryService::new(Arc::new(client))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; story requests will fail");
            StoryService::unconfigured()
        }
    };

    let state = Arc::new(AppState { stories });
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
