use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_types::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    PaymentReceived,
    PaymentFailed,
    Shipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub buyer_id: Uuid,
    pub buyer_email: String,
    pub delivery_method_id: Uuid,
    pub shipping_address: String,
    pub subtotal_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        buyer_id: Uuid,
        buyer_email: String,
        delivery_method_id: Uuid,
        shipping_address: String,
        items: &[OrderItem],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            buyer_id,
            buyer_email,
            delivery_method_id,
            shipping_address,
            subtotal_cents: items.iter().map(OrderItem::line_total).sum(),
            status: OrderStatus::Pending,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    pub fn total_cents(&self, delivery_price_cents: i64) -> i64 {
        self.subtotal_cents + delivery_price_cents
    }
}

impl Entity for Order {
    const TABLE: &'static str = "orders";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub price_cents: i64,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(
        order_id: Uuid,
        product_id: Uuid,
        product_name: String,
        price_cents: i64,
        quantity: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            product_name,
            price_cents,
            quantity,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.price_cents * self.quantity as i64
    }
}

impl Entity for OrderItem {
    const TABLE: &'static str = "order_items";

    fn id(&self) -> Uuid {
        self.id
    }
}
