use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMethod {
    pub id: Uuid,
    pub short_name: String,
    pub delivery_time: String,
    pub description: String,
    pub price_cents: i64,
}

impl DeliveryMethod {
    pub fn new(
        short_name: String,
        delivery_time: String,
        description: String,
        price_cents: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            short_name,
            delivery_time,
            description,
            price_cents,
        }
    }

    /// Methods seeded into an empty store.
    pub fn defaults() -> Vec<DeliveryMethod> {
        vec![
            DeliveryMethod::new(
                "UPS1".to_string(),
                "1-2 Days".to_string(),
                "Fastest delivery time".to_string(),
                1000,
            ),
            DeliveryMethod::new(
                "UPS2".to_string(),
                "2-5 Days".to_string(),
                "Get it within 5 days".to_string(),
                500,
            ),
            DeliveryMethod::new(
                "UPS3".to_string(),
                "5-10 Days".to_string(),
                "Slower but cheap".to_string(),
                200,
            ),
            DeliveryMethod::new(
                "FREE".to_string(),
                "1-2 Weeks".to_string(),
                "Free! You get what you pay for".to_string(),
                0,
            ),
        ]
    }
}

impl Entity for DeliveryMethod {
    const TABLE: &'static str = "delivery_methods";

    fn id(&self) -> Uuid {
        self.id
    }
}
