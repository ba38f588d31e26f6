use emporium_domain::models::Deal;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::CreateDeal},
    uow::UnitOfWork,
};

pub struct CreateDealCommandHandler {}

impl Default for CreateDealCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateDealCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateDeal> for CreateDealCommandHandler {
    async fn handle(
        &self,
        command: CreateDeal,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<()> {
        let dto = command.deal;
        let deal = Deal {
            id: command.id,
            ..Deal::new(dto.name, dto.discount_percent, dto.start_date, dto.end_date)
        };

        uow.repository::<Deal>().add(&deal).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use emporium_types::Result;

    use super::*;
    use crate::{
        dto::DealDto,
        test_utils::tests::{open_unit_of_work, request_context},
    };

    #[tokio::test]
    async fn test_create_deal_handler_success() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let start_date = Utc::now();
        let command = CreateDeal {
            id: Uuid::new_v4(),
            deal: DealDto {
                name: "Black Friday".to_string(),
                discount_percent: 30,
                start_date,
                end_date: start_date + Duration::days(3),
            },
        };

        CreateDealCommandHandler::new()
            .handle(command.clone(), &uow, &request_context(None))
            .await?;
        uow.complete().await?;

        let deal = uow.repository::<Deal>().get_by_id(command.id).await?;
        assert_eq!(deal.name, "Black Friday");
        assert_eq!(deal.discount_percent, 30);
        assert!(deal.is_active_at(start_date));

        uow.dispose().await
    }
}
