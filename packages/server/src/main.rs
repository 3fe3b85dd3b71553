use std::sync::Arc;

use anyhow::Context;
use common::{ChatCompletionGenerator, OembedTitleResolver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vid2article::config::AppConfig;
use vid2article::database::init_db;
use vid2article::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    if config.generator.usable_api_key().is_none() {
        warn!("No completion API key configured; article generation will fail");
    }

    let db = init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    let titles = OembedTitleResolver::new(&config.generator)
        .context("Failed to build oEmbed client")?;
    let generator = ChatCompletionGenerator::new(config.generator.clone())
        .context("Failed to build completion client")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        db,
        config,
        titles: Arc::new(titles),
        generator: Arc::new(generator),
    };

    let app = vid2article::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
