use std::sync::Arc;
use tracing::debug;

use emporium_types::{common::CurrentUser, errors::ApplicationError};

use crate::{
    uow::{UnitOfWork, UnitOfWorkProvider},
    user_context::UserContext,
};

/// Composition root surface. Hands out one [`RequestScope`] per logical
/// operation; scopes are never shared between operations.
#[derive(Clone)]
pub struct ServiceRegistry {
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl ServiceRegistry {
    pub fn register(uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self { uow_provider }
    }

    /// Opens a fresh unit of work for the caller identified by `user_context`.
    pub async fn scope(
        &self,
        user_context: Arc<dyn UserContext>,
    ) -> Result<RequestScope, ApplicationError> {
        let uow = self.uow_provider.open().await?;
        debug!("Request scope opened");
        Ok(RequestScope { uow, user_context })
    }
}

/// The scoped services of one logical operation.
pub struct RequestScope {
    pub uow: UnitOfWork,
    pub user_context: Arc<dyn UserContext>,
}

impl RequestScope {
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, ApplicationError> {
        self.user_context.current_user().await
    }

    /// Ends the operation, disposing its unit of work.
    pub async fn finish(self) -> Result<(), ApplicationError> {
        self.uow.dispose().await
    }
}
