use hatsuon::config::Config;
use hatsuon::state::AppState;

/// Test configuration: a private in-memory SQLite database per app.
///
/// The pool is pinned to a single connection, since every new SQLite
/// in-memory connection would open an empty database.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
    }
}

/// Test application wrapper
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with a migrated schema
    pub async fn new() -> Self {
        let state = AppState::new(test_config())
            .await
            .expect("Failed to create test app state");

        Self { state }
    }
}
