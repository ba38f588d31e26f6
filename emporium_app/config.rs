use dotenvy::dotenv;
use std::{env, time::Duration};

use emporium_types::errors::ApplicationError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub log_dir: String,
}

impl Config {
    /// Defaults for everything but the database location.
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            db_max_connections: 5,
            db_acquire_timeout: Duration::from_secs(5),
            log_dir: "logs".to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            ApplicationError::Infrastructure("You need to set env DATABASE_URL".to_string())
        })?;
        let mut config = Self::new(database_url);

        if let Ok(val) = env::var("EMPORIUM_DB_MAX_CONNECTIONS") {
            config.db_max_connections = val.parse::<u32>().unwrap_or(5).clamp(1, 100);
        }

        if let Ok(val) = env::var("EMPORIUM_DB_ACQUIRE_TIMEOUT_SECS") {
            config.db_acquire_timeout = Duration::from_secs(val.parse::<u64>().unwrap_or(5));
        }

        if let Ok(val) = env::var("EMPORIUM_LOG_DIR") {
            config.log_dir = val;
        }

        Ok(config)
    }
}
