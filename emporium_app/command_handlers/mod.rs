mod add_to_wishlist;
mod cast_vote;
mod create_brand;
mod create_deal;
mod create_delivery_method;
mod delete_brand;
mod place_order;
mod remove_from_wishlist;
mod update_brand;

pub use add_to_wishlist::AddToWishlistCommandHandler;
pub use cast_vote::CastVoteCommandHandler;
pub use create_brand::CreateBrandCommandHandler;
pub use create_deal::CreateDealCommandHandler;
pub use create_delivery_method::CreateDeliveryMethodCommandHandler;
pub use delete_brand::DeleteBrandCommandHandler;
pub use place_order::PlaceOrderCommandHandler;
pub use remove_from_wishlist::RemoveFromWishlistCommandHandler;
pub use update_brand::UpdateBrandCommandHandler;
