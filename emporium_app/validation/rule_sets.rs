use emporium_types::errors::{FieldError, ValidationErrors};

use super::{Validate, rules::*};
use crate::dto::{BrandDto, DealDto, DeliveryMethodDto, OrderDto, OrderItemDto, VoteDto};

pub const BRAND_NAME_MAX_LENGTH: usize = 50;
pub const DEAL_NAME_MAX_LENGTH: usize = 100;
pub const ORDER_ITEM_MAX_QUANTITY: i32 = 100;

pub fn brand_rules(dto: &BrandDto) -> ValidationErrors {
    collect([
        not_blank("brand_name", "Brand Name", &dto.brand_name),
        max_length(
            "brand_name",
            "Brand Name",
            &dto.brand_name,
            BRAND_NAME_MAX_LENGTH,
        ),
    ])
}

pub fn deal_rules(dto: &DealDto) -> ValidationErrors {
    collect([
        not_blank("name", "Name", &dto.name),
        max_length("name", "Name", &dto.name, DEAL_NAME_MAX_LENGTH),
        in_range(
            "discount_percent",
            "Discount Percent",
            dto.discount_percent,
            1,
            90,
        ),
        before(
            "start_date",
            &dto.start_date,
            &dto.end_date,
            "Start Date must be before End Date.",
        ),
        after(
            "end_date",
            &dto.end_date,
            &dto.start_date,
            "End Date must be after Start Date.",
        ),
    ])
}

pub fn delivery_method_rules(dto: &DeliveryMethodDto) -> ValidationErrors {
    collect([
        not_blank("short_name", "Short Name", &dto.short_name),
        max_length("short_name", "Short Name", &dto.short_name, 50),
        not_blank("delivery_time", "Delivery Time", &dto.delivery_time),
        max_length("delivery_time", "Delivery Time", &dto.delivery_time, 50),
        not_blank("description", "Description", &dto.description),
        max_length("description", "Description", &dto.description, 250),
        not_negative("price_cents", "Price", dto.price_cents),
    ])
}

pub fn order_item_rules(dto: &OrderItemDto) -> ValidationErrors {
    collect([
        not_blank("product_name", "Product Name", &dto.product_name),
        in_range(
            "quantity",
            "Quantity",
            dto.quantity,
            1,
            ORDER_ITEM_MAX_QUANTITY,
        ),
        not_negative("price_cents", "Price", dto.price_cents),
    ])
}

pub fn order_rules(dto: &OrderDto) -> ValidationErrors {
    let mut errors = collect([
        not_blank("buyer_email", "Buyer Email", &dto.buyer_email),
        not_blank("shipping_address", "Shipping Address", &dto.shipping_address),
        dto.items
            .is_empty()
            .then(|| FieldError::new("items", "Order must contain at least one item.")),
    ]);

    for (i, item) in dto.items.iter().enumerate() {
        errors.extend(nested(&format!("items[{i}]"), order_item_rules(item)));
    }

    errors
}

pub fn vote_rules(dto: &VoteDto) -> ValidationErrors {
    collect([one_of(
        "value",
        &dto.value,
        &[1, -1],
        "Vote must be either 1 or -1.",
    )])
}

impl Validate for BrandDto {
    fn validate(&self) -> ValidationErrors {
        brand_rules(self)
    }
}

impl Validate for DealDto {
    fn validate(&self) -> ValidationErrors {
        deal_rules(self)
    }
}

impl Validate for DeliveryMethodDto {
    fn validate(&self) -> ValidationErrors {
        delivery_method_rules(self)
    }
}

impl Validate for OrderItemDto {
    fn validate(&self) -> ValidationErrors {
        order_item_rules(self)
    }
}

impl Validate for OrderDto {
    fn validate(&self) -> ValidationErrors {
        order_rules(self)
    }
}

impl Validate for VoteDto {
    fn validate(&self) -> ValidationErrors {
        vote_rules(self)
    }
}
