use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_MIN_CONNECTIONS"))?,
            sqlx_logging: lookup("DATABASE_SQLX_LOGGING")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DATABASE_SQLX_LOGGING"))?,
        };

        if config.max_connections == 0 {
            return Err(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"));
        }
        if config.min_connections > config.max_connections {
            return Err(ConfigError::Invalid("DATABASE_MIN_CONNECTIONS"));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
