use async_trait::async_trait;

use emporium_types::errors::{ApplicationError, ValidationErrors};

use crate::{cqrs::RequestContext, uow::UnitOfWork};

/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// The command's rule set. Commands without one accept any payload.
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::new()
    }
}

/// A trait for handlers that execute Commands.
/// It receives the command and the Unit of Work to use.
/// It should NOT manage the transaction lifecycle (begin/commit/rollback);
/// that is the job of the AppBus.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(
        &self,
        cmd: C,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<(), ApplicationError>;
}
