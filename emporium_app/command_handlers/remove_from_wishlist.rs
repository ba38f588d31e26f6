use emporium_domain::models::WishlistItem;
use emporium_types::{
    Result,
    errors::{AppError, ApplicationError},
};

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::RemoveFromWishlist},
    uow::UnitOfWork,
};

pub struct RemoveFromWishlistCommandHandler {}

impl Default for RemoveFromWishlistCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveFromWishlistCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RemoveFromWishlist> for RemoveFromWishlistCommandHandler {
    async fn handle(
        &self,
        command: RemoveFromWishlist,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<()> {
        let user = ctx.require_user()?;
        let repo = uow.repository::<WishlistItem>();
        let item = repo.get_by_id(command.item_id).await?;

        if item.user_id != user.id {
            return Err(ApplicationError::App(AppError::NotOwner {
                user_id: user.id,
                entity: "wishlist item",
                id: item.id,
            }));
        }

        repo.remove(item.id).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use emporium_types::Result;

    use super::*;
    use crate::test_utils::tests::{open_unit_of_work, request_context, test_user};

    #[tokio::test]
    async fn test_remove_own_wishlist_item() -> Result<()> {
        let (store, uow) = open_unit_of_work().await;
        let user = test_user();
        let item = WishlistItem::new(user.id, Uuid::new_v4());
        uow.repository::<WishlistItem>().add(&item).await?;
        uow.complete().await?;

        RemoveFromWishlistCommandHandler::new()
            .handle(
                RemoveFromWishlist { item_id: item.id },
                &uow,
                &request_context(Some(user)),
            )
            .await?;
        uow.complete().await?;
        assert_eq!(store.count("wishlist_items"), 0);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_cannot_remove_someone_elses_item() -> Result<()> {
        let (store, uow) = open_unit_of_work().await;
        let item = WishlistItem::new(Uuid::new_v4(), Uuid::new_v4());
        uow.repository::<WishlistItem>().add(&item).await?;
        uow.complete().await?;

        let err = RemoveFromWishlistCommandHandler::new()
            .handle(
                RemoveFromWishlist { item_id: item.id },
                &uow,
                &request_context(Some(test_user())),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::App(AppError::NotOwner { .. })
        ));
        assert_eq!(uow.pending_changes().await, 0);
        assert_eq!(store.count("wishlist_items"), 1);

        uow.dispose().await
    }
}
