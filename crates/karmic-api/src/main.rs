use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use karmic_api::config::ApiConfig;
use karmic_api::state::AppState;
use karmic_core::session::MemorySessionStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(top_emotions = config.top_emotions, "starting karmic-api");

    let state = AppState {
        sessions: Arc::new(MemorySessionStore::new()),
        config,
    };

    lambda_http::run(karmic_api::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
