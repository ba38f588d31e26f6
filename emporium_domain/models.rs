pub mod brand;
pub mod deal;
pub mod delivery_method;
pub mod order;
pub mod vote;
pub mod wishlist;

pub use brand::Brand;
pub use deal::Deal;
pub use delivery_method::DeliveryMethod;
pub use order::{Order, OrderItem, OrderStatus};
pub use vote::Vote;
pub use wishlist::WishlistItem;
