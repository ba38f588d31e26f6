use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
    PgConnection, Postgres, TransactionManager, pool::PoolConnection,
    postgres::PgTransactionManager,
};
use tracing::{debug, warn};
use uuid::Uuid;

use emporium_app::{
    change_set::{Change, ChangeKind},
    repository::Filter,
    session::StorageSession,
};
use emporium_types::errors::{ApplicationError, DbError};

use crate::sql;

/// A storage session on one pooled PostgreSQL connection, held exclusively
/// for the life of the unit of work.
///
/// Transactions go through sqlx's transaction manager on that connection,
/// so sqlx tracks the transaction depth and a session dropped mid-transaction
/// queues a ROLLBACK that the pool runs before handing the connection out
/// again.
pub struct PgSession {
    conn: Option<PoolConnection<Postgres>>,
}

impl PgSession {
    pub fn new(conn: PoolConnection<Postgres>) -> Self {
        Self { conn: Some(conn) }
    }

    fn conn(&mut self) -> Result<&mut PgConnection, ApplicationError> {
        self.conn
            .as_deref_mut()
            .ok_or(ApplicationError::Db(DbError::UnitOfWorkDisposed))
    }

    fn in_transaction(&self) -> bool {
        self.conn
            .as_deref()
            .is_some_and(|conn| PgTransactionManager::get_transaction_depth(conn) > 0)
    }
}

#[async_trait]
impl StorageSession for PgSession {
    async fn begin(&mut self) -> Result<(), ApplicationError> {
        PgTransactionManager::begin(self.conn()?, None).await?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), ApplicationError> {
        if !self.in_transaction() {
            return Err(DbError::NoActiveTransaction.into());
        }
        PgTransactionManager::commit(self.conn()?).await?;
        Ok(())
    }

    /// Depth only drops once ROLLBACK has run, so a failed rollback is
    /// retried when the session is dropped.
    async fn rollback(&mut self) -> Result<(), ApplicationError> {
        if !self.in_transaction() {
            return Ok(());
        }
        PgTransactionManager::rollback(self.conn()?).await?;
        Ok(())
    }

    async fn fetch_by_id(
        &mut self,
        table: &'static str,
        id: Uuid,
    ) -> Result<Option<Value>, ApplicationError> {
        let statement = sql::select_by_id(table)?;
        let record = sqlx::query_scalar::<_, Value>(&statement)
            .bind(id)
            .fetch_optional(self.conn()?)
            .await?;
        Ok(record)
    }

    async fn fetch(
        &mut self,
        table: &'static str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Value>, ApplicationError> {
        let filter = filter.filter(|f| !f.is_empty());
        let statement = sql::select(table, filter.is_some())?;

        let mut query = sqlx::query_scalar::<_, Value>(&statement);
        if let Some(filter) = filter {
            query = query.bind(filter.as_json());
        }
        Ok(query.fetch_all(self.conn()?).await?)
    }

    async fn apply(&mut self, change: &Change) -> Result<(), ApplicationError> {
        let (table, id) = (change.table, change.id);

        let affected = match &change.kind {
            ChangeKind::Added(record) => {
                let statement = sql::insert(table)?;
                sqlx::query(&statement)
                    .bind(record)
                    .execute(self.conn()?)
                    .await
                    .map_err(|e| match e {
                        sqlx::Error::Database(db) if db.is_unique_violation() => {
                            ApplicationError::Db(DbError::DuplicateEntity { table, id })
                        }
                        e => e.into(),
                    })?
                    .rows_affected()
            }
            ChangeKind::Modified(record) => {
                let statement = sql::update(table, record)?;
                sqlx::query(&statement)
                    .bind(record)
                    .bind(id)
                    .execute(self.conn()?)
                    .await?
                    .rows_affected()
            }
            ChangeKind::Removed => {
                let statement = sql::delete(table)?;
                sqlx::query(&statement)
                    .bind(id)
                    .execute(self.conn()?)
                    .await?
                    .rows_affected()
            }
        };

        if affected == 0 {
            return Err(DbError::EntityNotFound { table, id }.into());
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ApplicationError> {
        let rolled_back = self.rollback().await;
        if let Some(mut conn) = self.conn.take() {
            if PgTransactionManager::get_transaction_depth(&conn) > 0 {
                PgTransactionManager::start_rollback(&mut conn);
            }
            debug!("Connection returned to the pool");
        }
        rolled_back
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.as_deref_mut() {
            if PgTransactionManager::get_transaction_depth(conn) > 0 {
                warn!("Session dropped inside a transaction, rolling it back");
                PgTransactionManager::start_rollback(conn);
            }
        }
    }
}
