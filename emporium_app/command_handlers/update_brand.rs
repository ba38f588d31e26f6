use emporium_domain::models::Brand;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::UpdateBrand},
    uow::UnitOfWork,
};

pub struct UpdateBrandCommandHandler {}

impl Default for UpdateBrandCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateBrandCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateBrand> for UpdateBrandCommandHandler {
    async fn handle(
        &self,
        command: UpdateBrand,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<()> {
        let repo = uow.repository::<Brand>();
        let mut brand = repo.get_by_id(command.id).await?;

        brand.brand_name = command.brand.brand_name;
        brand.description = command.brand.description;

        repo.update(&brand).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use emporium_domain::test_utils::{BrandFactoryOptions, brand_factory};
    use emporium_types::Result;

    use super::*;
    use crate::{
        dto::BrandDto,
        test_utils::tests::{open_unit_of_work, request_context},
    };

    #[tokio::test]
    async fn test_update_brand_handler_success() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let brand = brand_factory(BrandFactoryOptions {
            brand_name: Some("Acme"),
            ..Default::default()
        });
        uow.repository::<Brand>().add(&brand).await?;
        uow.complete().await?;

        let command = UpdateBrand {
            id: brand.id,
            brand: BrandDto {
                brand_name: "Acme Corp".to_string(),
                description: Some("Now incorporated".to_string()),
            },
        };
        UpdateBrandCommandHandler::new()
            .handle(command, &uow, &request_context(None))
            .await?;
        assert_eq!(uow.complete().await?, 1);

        let saved = uow.repository::<Brand>().get_by_id(brand.id).await?;
        assert_eq!(saved.brand_name, "Acme Corp");
        assert_eq!(saved.created_at, brand.created_at);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_update_missing_brand_is_not_found() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let command = UpdateBrand {
            id: Uuid::new_v4(),
            brand: BrandDto {
                brand_name: "Ghost".to_string(),
                description: None,
            },
        };

        let err = UpdateBrandCommandHandler::new()
            .handle(command, &uow, &request_context(None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(uow.pending_changes().await, 0);

        uow.dispose().await
    }
}
