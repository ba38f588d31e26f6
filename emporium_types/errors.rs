use thiserror::Error;

pub mod app_error;
pub mod db_error;
pub mod validation_error;

pub use app_error::AppError;
pub use db_error::DbError;
pub use validation_error::{FieldError, ValidationErrors};

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True for unit-of-work ordering violations (commit without begin,
    /// nested begin, complete inside a transaction, use after dispose).
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ApplicationError::Db(e) if e.is_invalid_state())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::EntityNotFound { .. }))
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(err.to_string())
    }
}

impl From<sqlx::Error> for ApplicationError {
    fn from(err: sqlx::Error) -> Self {
        ApplicationError::Db(DbError::Database(err))
    }
}
