use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::config::Config;
use cinematch_api::db::{self, PgMovieStore};
use cinematch_api::engine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A missing or corrupt model is fatal: refuse to serve traffic
    let (catalog, similarity) = engine::load_models(&config)
        .await
        .context("Failed to load recommendation model")?;

    let pool = db::create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let store = Arc::new(PgMovieStore::new(pool));

    let state = AppState::new(Arc::new(catalog), Arc::new(similarity), store);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
