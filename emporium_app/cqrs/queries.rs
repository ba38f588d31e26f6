use uuid::Uuid;

use emporium_domain::models::{Brand, Deal, DeliveryMethod, Order, WishlistItem};

use crate::{
    cqrs::Query,
    dto::{OrderDetails, VoteScore},
};

/// Fetch a brand by id.
pub struct GetBrandById {
    pub id: Uuid,
}

impl Query for GetBrandById {
    type Output = Brand;
}

/// All brands, sorted by name.
pub struct ListBrands;

impl Query for ListBrands {
    type Output = Vec<Brand>;
}

/// Fetch a delivery method by id.
pub struct GetDeliveryMethodById {
    pub id: Uuid,
}

impl Query for GetDeliveryMethodById {
    type Output = DeliveryMethod;
}

/// All delivery methods, cheapest first.
pub struct ListDeliveryMethods;

impl Query for ListDeliveryMethods {
    type Output = Vec<DeliveryMethod>;
}

/// Deals running right now.
pub struct GetActiveDeals;

impl Query for GetActiveDeals {
    type Output = Vec<Deal>;
}

/// One of the current user's orders, with its items.
pub struct GetOrderById {
    pub id: Uuid,
}

impl Query for GetOrderById {
    type Output = OrderDetails;
}

/// The current user's orders, newest first.
pub struct GetOrdersForBuyer;

impl Query for GetOrdersForBuyer {
    type Output = Vec<Order>;
}

pub struct GetProductVoteScore {
    pub product_id: Uuid,
}

impl Query for GetProductVoteScore {
    type Output = VoteScore;
}

/// The current user's wishlist, oldest first.
pub struct GetWishlist;

impl Query for GetWishlist {
    type Output = Vec<WishlistItem>;
}
