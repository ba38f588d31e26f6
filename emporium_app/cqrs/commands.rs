use uuid::Uuid;

use emporium_types::errors::ValidationErrors;

use crate::{
    cqrs::Command,
    dto::{BrandDto, DealDto, DeliveryMethodDto, OrderDto, VoteDto},
    validation::Validate,
};

/// Ids of created entities are chosen by the caller.
#[derive(Debug, Clone)]
pub struct CreateBrand {
    pub id: Uuid,
    pub brand: BrandDto,
}

impl Command for CreateBrand {
    fn validate(&self) -> ValidationErrors {
        self.brand.validate()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBrand {
    pub id: Uuid,
    pub brand: BrandDto,
}

impl Command for UpdateBrand {
    fn validate(&self) -> ValidationErrors {
        self.brand.validate()
    }
}

#[derive(Debug, Clone)]
pub struct DeleteBrand {
    pub id: Uuid,
}

impl Command for DeleteBrand {}

#[derive(Debug, Clone)]
pub struct CreateDeal {
    pub id: Uuid,
    pub deal: DealDto,
}

impl Command for CreateDeal {
    fn validate(&self) -> ValidationErrors {
        self.deal.validate()
    }
}

#[derive(Debug, Clone)]
pub struct CreateDeliveryMethod {
    pub id: Uuid,
    pub delivery_method: DeliveryMethodDto,
}

impl Command for CreateDeliveryMethod {
    fn validate(&self) -> ValidationErrors {
        self.delivery_method.validate()
    }
}

#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub id: Uuid,
    pub order: OrderDto,
}

impl Command for PlaceOrder {
    fn validate(&self) -> ValidationErrors {
        self.order.validate()
    }
}

#[derive(Debug, Clone)]
pub struct CastVote {
    pub id: Uuid,
    pub vote: VoteDto,
}

impl Command for CastVote {
    fn validate(&self) -> ValidationErrors {
        self.vote.validate()
    }
}

#[derive(Debug, Clone)]
pub struct AddToWishlist {
    pub id: Uuid,
    pub product_id: Uuid,
}

impl Command for AddToWishlist {}

#[derive(Debug, Clone)]
pub struct RemoveFromWishlist {
    pub item_id: Uuid,
}

impl Command for RemoveFromWishlist {}
