use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

/// An up (+1) or down (-1) vote of one user on one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub value: i16,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(product_id: Uuid, user_id: Uuid, value: i16) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            user_id,
            value,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

impl Entity for Vote {
    const TABLE: &'static str = "votes";

    fn id(&self) -> Uuid {
        self.id
    }
}
