use tracing::debug;

use emporium_app::uow::{UnitOfWork, UnitOfWorkProvider};
use emporium_types::errors::{ApplicationError, DbError};

use crate::{DbPool, session::PgSession};

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: DbPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn open(&self) -> Result<UnitOfWork, ApplicationError> {
        let conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        debug!(idle = self.pool.num_idle(), "Connection acquired for unit of work");
        Ok(UnitOfWork::new(Box::new(PgSession::new(conn))))
    }
}
