use uuid::Uuid;

use emporium_db::{DbPool, establish_test_connection_pool, run_migrations, uow::PostgresUnitOfWorkProvider};
use emporium_types::Result;

/// Provider on the test database, migrated. `None` (and the test is
/// skipped) when `TEST_DATABASE_URL` is not set.
pub async fn setup() -> Result<Option<(DbPool, PostgresUnitOfWorkProvider)>> {
    setup_with_connections(5).await
}

pub async fn setup_with_connections(
    max_connections: u32,
) -> Result<Option<(DbPool, PostgresUnitOfWorkProvider)>> {
    let Some(pool) = establish_test_connection_pool(max_connections).await? else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return Ok(None);
    };
    run_migrations(&pool).await?;

    Ok(Some((pool.clone(), PostgresUnitOfWorkProvider::new(pool))))
}

/// How many of `ids` exist in `brands`, read outside any unit of work.
pub async fn count_brands(pool: &DbPool, ids: &[Uuid]) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM brands WHERE id = ANY($1)")
        .bind(ids.to_vec())
        .fetch_one(pool)
        .await?;
    Ok(count)
}
