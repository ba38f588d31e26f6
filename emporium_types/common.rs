use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the authenticated caller, as resolved at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

impl CurrentUser {
    pub fn new(id: Uuid, email: String) -> Self {
        Self { id, email }
    }
}
