use thiserror::Error;
use uuid::Uuid;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("This operation requires an authenticated user")]
    Unauthenticated,

    #[error("User {user_id} does not own {entity} with ID {id}")]
    NotOwner {
        user_id: Uuid,
        entity: &'static str,
        id: Uuid,
    },
}
