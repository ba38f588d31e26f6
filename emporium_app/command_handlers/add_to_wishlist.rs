use emporium_domain::models::WishlistItem;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::AddToWishlist},
    repository::Filter,
    uow::UnitOfWork,
};

pub struct AddToWishlistCommandHandler {}

impl Default for AddToWishlistCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddToWishlistCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddToWishlist> for AddToWishlistCommandHandler {
    async fn handle(
        &self,
        command: AddToWishlist,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<()> {
        let user = ctx.require_user()?;
        let repo = uow.repository::<WishlistItem>();

        let existing = repo
            .find(
                &Filter::new()
                    .eq("user_id", user.id)
                    .eq("product_id", command.product_id),
            )
            .await?;
        if !existing.is_empty() {
            return Ok(());
        }

        let item = WishlistItem {
            id: command.id,
            ..WishlistItem::new(user.id, command.product_id)
        };
        repo.add(&item).await
    }
}
