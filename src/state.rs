use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;

/// Database handle and configuration shared by callers of the repositories
#[derive(Clone)]
pub struct AppState {
    /// SeaORM database connection pool
    pub db: DatabaseConnection,
    pub config: Config,
}

impl AppState {
    /// Connect to the database and bring its schema up to date
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let mut opt = ConnectOptions::new(&config.database_url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(config.sqlx_logging);

        let db = Database::connect(opt)
            .await
            .map_err(|e| AppStateError::Connect(e.to_string()))?;

        // Run migrations
        Migrator::up(&db, None)
            .await
            .map_err(|e| AppStateError::Migration(e.to_string()))?;
        tracing::debug!("Schema migrations applied");

        Ok(Self { db, config })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Connect(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
