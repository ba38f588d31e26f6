use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("No record in {table} with ID {id}")]
    EntityNotFound { table: &'static str, id: Uuid },

    #[error("A record in {table} with ID {id} already exists")]
    DuplicateEntity { table: &'static str, id: Uuid },

    #[error("A transaction is already open on this unit of work")]
    TransactionAlreadyOpen,

    #[error("No transaction is open on this unit of work")]
    NoActiveTransaction,

    #[error("complete() can't be called while an explicit transaction is open")]
    CompleteWithinTransaction,

    #[error("The unit of work has been disposed")]
    UnitOfWorkDisposed,

    #[error("A previous commit was interrupted before it finished and has been rolled back")]
    InterruptedCommit,

    #[error("Invalid column name '{0}'")]
    InvalidColumn(String),

    #[error("Record in {0} is not a JSON object")]
    MalformedRecord(&'static str),

    #[error("Storage rejected the commit: {0}")]
    CommitRejected(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            DbError::TransactionAlreadyOpen
                | DbError::NoActiveTransaction
                | DbError::CompleteWithinTransaction
                | DbError::UnitOfWorkDisposed
                | DbError::InterruptedCommit
        )
    }
}
