use async_trait::async_trait;
use std::cmp::Reverse;

use emporium_domain::models::Order;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetOrdersForBuyer},
    repository::Filter,
    uow::UnitOfWork,
};

pub struct GetOrdersForBuyerHandler {}

impl GetOrdersForBuyerHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetOrdersForBuyer> for GetOrdersForBuyerHandler {
    async fn handle(
        &self,
        _query: GetOrdersForBuyer,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<<GetOrdersForBuyer as Query>::Output, ApplicationError> {
        let user = ctx.require_user()?;
        let mut orders = uow
            .repository::<Order>()
            .find(&Filter::new().eq("buyer_id", user.id))
            .await?;
        orders.sort_by_key(|o| Reverse(o.created_at));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use emporium_domain::test_utils::{OrderFactoryOptions, order_factory};
    use emporium_types::Result;

    use super::*;
    use crate::test_utils::tests::{open_unit_of_work, request_context, test_user};

    #[tokio::test]
    async fn test_orders_for_buyer_newest_first() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let user = test_user();

        let (mut older, _) = order_factory(OrderFactoryOptions {
            buyer_id: Some(user.id),
            ..Default::default()
        });
        older.created_at -= Duration::days(2);
        let (newer, _) = order_factory(OrderFactoryOptions {
            buyer_id: Some(user.id),
            ..Default::default()
        });
        let (someone_elses, _) = order_factory(OrderFactoryOptions::default());

        let repo = uow.repository::<Order>();
        for order in [&older, &newer, &someone_elses] {
            repo.add(order).await?;
        }
        uow.complete().await?;

        let orders = GetOrdersForBuyerHandler::new()
            .handle(GetOrdersForBuyer, &uow, &request_context(Some(user)))
            .await?;
        let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_orders_for_buyer_requires_user() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;

        let result = GetOrdersForBuyerHandler::new()
            .handle(GetOrdersForBuyer, &uow, &request_context(None))
            .await;
        assert!(result.is_err());

        uow.dispose().await
    }
}
