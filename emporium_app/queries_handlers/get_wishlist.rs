use async_trait::async_trait;

use emporium_domain::models::WishlistItem;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetWishlist},
    repository::Filter,
    uow::UnitOfWork,
};

pub struct GetWishlistHandler {}

impl GetWishlistHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetWishlist> for GetWishlistHandler {
    async fn handle(
        &self,
        _query: GetWishlist,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<<GetWishlist as Query>::Output, ApplicationError> {
        let user = ctx.require_user()?;
        let mut items = uow
            .repository::<WishlistItem>()
            .find(&Filter::new().eq("user_id", user.id))
            .await?;
        items.sort_by_key(|i| i.added_at);
        Ok(items)
    }
}
