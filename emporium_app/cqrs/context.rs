use std::sync::Arc;

use emporium_types::{common::CurrentUser, errors::AppError};

use crate::config::Config;

/// What a handler knows about the operation it serves. The current user is
/// resolved once, before the handler runs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub config: Arc<Config>,
    pub current_user: Option<CurrentUser>,
}

impl RequestContext {
    pub fn new(config: Arc<Config>, current_user: Option<CurrentUser>) -> Self {
        Self {
            config,
            current_user,
        }
    }

    pub fn require_user(&self) -> Result<&CurrentUser, AppError> {
        self.current_user.as_ref().ok_or(AppError::Unauthenticated)
    }
}
