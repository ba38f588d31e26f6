mod get_active_deals;
mod get_brand_by_id;
mod get_delivery_method_by_id;
mod get_order_by_id;
mod get_orders_for_buyer;
mod get_product_vote_score;
mod get_wishlist;
mod list_brands;
mod list_delivery_methods;

pub use get_active_deals::GetActiveDealsHandler;
pub use get_brand_by_id::GetBrandByIdHandler;
pub use get_delivery_method_by_id::GetDeliveryMethodByIdHandler;
pub use get_order_by_id::GetOrderByIdHandler;
pub use get_orders_for_buyer::GetOrdersForBuyerHandler;
pub use get_product_vote_score::GetProductVoteScoreHandler;
pub use get_wishlist::GetWishlistHandler;
pub use list_brands::ListBrandsHandler;
pub use list_delivery_methods::ListDeliveryMethodsHandler;
