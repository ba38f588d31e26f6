use async_trait::async_trait;

use emporium_types::{common::CurrentUser, errors::ApplicationError};

/// Who is calling. Looked up once per logical operation by the bus.
#[async_trait]
pub trait UserContext: Send + Sync {
    /// The authenticated user, or `None` for anonymous callers.
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApplicationError>;
}

/// A user context whose identity the host resolved up front (for example
/// from a verified session token).
#[derive(Debug, Clone, Default)]
pub struct ResolvedUserContext {
    user: Option<CurrentUser>,
}

impl ResolvedUserContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }
}

#[async_trait]
impl UserContext for ResolvedUserContext {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApplicationError> {
        Ok(self.user.clone())
    }
}
