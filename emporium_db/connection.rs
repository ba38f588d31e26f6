use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;
use tracing::info;

use emporium_app::config::Config;
use emporium_types::errors::DbError;

pub type DbPool = PgPool;

pub async fn establish_connection_pool(config: &Config) -> Result<DbPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await?;

    info!(
        max_connections = config.db_max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Pool for integration tests. `None` when `TEST_DATABASE_URL` is not set.
pub async fn establish_test_connection_pool(
    max_connections: u32,
) -> Result<Option<DbPool>, DbError> {
    dotenvy::dotenv().ok();

    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;
    Ok(Some(pool))
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("../migrations").run(pool).await?;
    Ok(())
}
