use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hatsuon::config::Config;
use hatsuon::repositories::{CollectionRepository, Repository, UserRepository};
use hatsuon::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Connect and apply pending migrations
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize application state")?;
    tracing::info!("Database schema is up to date");

    let users = UserRepository::count(&state.db).await?;
    let collections = CollectionRepository::count(&state.db).await?;
    tracing::info!(users, collections, "Store ready");

    Ok(())
}
