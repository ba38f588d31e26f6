use chrono::{DateTime, Duration, SubsecRound, Utc};
use uuid::Uuid;

use crate::models::{
    brand::Brand,
    deal::Deal,
    delivery_method::DeliveryMethod,
    order::{Order, OrderItem},
};

#[derive(Default, Clone)]
pub struct BrandFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub brand_name: Option<&'a str>,
    pub description: Option<&'a str>,
}

#[derive(Default, Clone)]
pub struct DealFactoryOptions<'a> {
    pub name: Option<&'a str>,
    pub discount_percent: Option<i16>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Default, Clone)]
pub struct DeliveryMethodFactoryOptions<'a> {
    pub short_name: Option<&'a str>,
    pub price_cents: Option<i64>,
}

#[derive(Default, Clone)]
pub struct OrderFactoryOptions {
    pub buyer_id: Option<Uuid>,
    pub delivery_method_id: Option<Uuid>,
    pub items: Option<usize>,
}

pub fn brand_factory(options: BrandFactoryOptions) -> Brand {
    let default_name = format!("brand_{}", &Uuid::new_v4().simple().to_string()[..8]);
    let mut brand = Brand::new(
        options.brand_name.map_or(default_name, |s| s.to_string()),
        options.description.map(|s| s.to_string()),
    );
    if let Some(id) = options.id {
        brand.id = id;
    }
    brand
}

pub fn deal_factory(options: DealFactoryOptions) -> Deal {
    let start_date = options
        .start_date
        .unwrap_or_else(|| Utc::now().trunc_subsecs(6) - Duration::days(1));
    let end_date = options
        .end_date
        .unwrap_or_else(|| start_date + Duration::days(7));

    Deal::new(
        options.name.unwrap_or("Weekly deal").to_string(),
        options.discount_percent.unwrap_or(10),
        start_date,
        end_date,
    )
}

pub fn delivery_method_factory(options: DeliveryMethodFactoryOptions) -> DeliveryMethod {
    DeliveryMethod::new(
        options.short_name.unwrap_or("UPS1").to_string(),
        "1-2 Days".to_string(),
        "Fastest delivery time".to_string(),
        options.price_cents.unwrap_or(1000),
    )
}

/// Builds an order together with its items.
pub fn order_factory(options: OrderFactoryOptions) -> (Order, Vec<OrderItem>) {
    let buyer_id = options.buyer_id.unwrap_or_else(Uuid::new_v4);
    let placeholder = Uuid::nil();

    let mut items: Vec<OrderItem> = (0..options.items.unwrap_or(2))
        .map(|i| {
            OrderItem::new(
                placeholder,
                Uuid::new_v4(),
                format!("Product {}", i + 1),
                1000 * (i as i64 + 1),
                1,
            )
        })
        .collect();

    let order = Order::new(
        buyer_id,
        format!("buyer_{}@example.com", &buyer_id.simple().to_string()[..8]),
        options.delivery_method_id.unwrap_or_else(Uuid::new_v4),
        "1 Main Street, Springfield".to_string(),
        &items,
    );

    for item in items.iter_mut() {
        item.order_id = order.id;
    }

    (order, items)
}
