use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_domain::models::{DeliveryMethod, Order, OrderItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDto {
    pub brand_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealDto {
    pub name: String,
    pub discount_percent: i16,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMethodDto {
    pub short_name: String,
    pub delivery_time: String,
    pub description: String,
    pub price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub product_id: Uuid,
    pub product_name: String,
    pub price_cents: i64,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub buyer_email: String,
    pub delivery_method_id: Uuid,
    pub shipping_address: String,
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteDto {
    pub product_id: Uuid,
    pub value: i16,
}

/// An order with everything needed to show it back to the buyer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub delivery_method: DeliveryMethod,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteScore {
    pub product_id: Uuid,
    pub upvotes: u32,
    pub downvotes: u32,
}

impl VoteScore {
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}
