use async_trait::async_trait;

use emporium_domain::models::{DeliveryMethod, Order, OrderItem};
use emporium_types::errors::{AppError, ApplicationError};

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetOrderById},
    dto::OrderDetails,
    repository::Filter,
    uow::UnitOfWork,
};

pub struct GetOrderByIdHandler {}

impl GetOrderByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetOrderById> for GetOrderByIdHandler {
    async fn handle(
        &self,
        query: GetOrderById,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<<GetOrderById as Query>::Output, ApplicationError> {
        let user = ctx.require_user()?;
        let order = uow.repository::<Order>().get_by_id(query.id).await?;

        if order.buyer_id != user.id {
            return Err(AppError::NotOwner {
                user_id: user.id,
                entity: "order",
                id: order.id,
            }
            .into());
        }

        let items = uow
            .repository::<OrderItem>()
            .find(&Filter::new().eq("order_id", order.id))
            .await?;
        let delivery_method = uow
            .repository::<DeliveryMethod>()
            .get_by_id(order.delivery_method_id)
            .await?;

        Ok(OrderDetails {
            total_cents: order.total_cents(delivery_method.price_cents),
            order,
            items,
            delivery_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use emporium_domain::test_utils::{
        DeliveryMethodFactoryOptions, OrderFactoryOptions, delivery_method_factory, order_factory,
    };
    use emporium_types::Result;

    use super::*;
    use crate::test_utils::tests::{open_unit_of_work, request_context, test_user};

    #[tokio::test]
    async fn test_get_order_by_id_with_items_and_total() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let user = test_user();
        let delivery = delivery_method_factory(DeliveryMethodFactoryOptions {
            price_cents: Some(200),
            ..Default::default()
        });
        let (order, items) = order_factory(OrderFactoryOptions {
            buyer_id: Some(user.id),
            delivery_method_id: Some(delivery.id),
            items: Some(3),
        });

        uow.repository::<DeliveryMethod>().add(&delivery).await?;
        uow.repository::<Order>().add(&order).await?;
        for item in &items {
            uow.repository::<OrderItem>().add(item).await?;
        }
        assert_eq!(uow.complete().await?, 5);

        let details = GetOrderByIdHandler::new()
            .handle(
                GetOrderById { id: order.id },
                &uow,
                &request_context(Some(user)),
            )
            .await?;
        assert_eq!(details.order.id, order.id);
        assert_eq!(details.items.len(), 3);
        assert_eq!(details.delivery_method.id, delivery.id);
        // 1000 + 2000 + 3000 + shipping
        assert_eq!(details.total_cents, 6200);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_get_order_of_another_buyer_is_rejected() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let (order, _) = order_factory(OrderFactoryOptions {
            buyer_id: Some(Uuid::new_v4()),
            ..Default::default()
        });
        uow.repository::<Order>().add(&order).await?;
        uow.complete().await?;

        let err = GetOrderByIdHandler::new()
            .handle(
                GetOrderById { id: order.id },
                &uow,
                &request_context(Some(test_user())),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::App(AppError::NotOwner { .. })
        ));

        uow.dispose().await
    }
}
