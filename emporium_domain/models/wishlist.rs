use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn new(user_id: Uuid, product_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            added_at: Utc::now().trunc_subsecs(6),
        }
    }
}

impl Entity for WishlistItem {
    const TABLE: &'static str = "wishlist_items";

    fn id(&self) -> Uuid {
        self.id
    }
}
