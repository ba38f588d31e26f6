use tracing::debug;

use emporium_domain::models::{DeliveryMethod, Order, OrderItem};
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::PlaceOrder},
    uow::UnitOfWork,
};

pub struct PlaceOrderCommandHandler {}

impl Default for PlaceOrderCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceOrderCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<PlaceOrder> for PlaceOrderCommandHandler {
    async fn handle(
        &self,
        command: PlaceOrder,
        uow: &UnitOfWork,
        ctx: &RequestContext,
    ) -> Result<()> {
        let buyer = ctx.require_user()?;
        let dto = command.order;

        let delivery_method = uow
            .repository::<DeliveryMethod>()
            .get_by_id(dto.delivery_method_id)
            .await?;

        let items: Vec<OrderItem> = dto
            .items
            .into_iter()
            .map(|item| {
                OrderItem::new(
                    command.id,
                    item.product_id,
                    item.product_name,
                    item.price_cents,
                    item.quantity,
                )
            })
            .collect();

        let order = Order {
            id: command.id,
            ..Order::new(
                buyer.id,
                dto.buyer_email,
                delivery_method.id,
                dto.shipping_address,
                &items,
            )
        };

        uow.repository::<Order>().add(&order).await?;

        let item_repo = uow.repository::<OrderItem>();
        for item in &items {
            item_repo.add(item).await?;
        }

        debug!(
            order_id = %order.id,
            items = items.len(),
            subtotal_cents = order.subtotal_cents,
            "Order staged"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use emporium_domain::{
        models::OrderStatus,
        test_utils::{DeliveryMethodFactoryOptions, delivery_method_factory},
    };
    use emporium_types::{
        Result,
        errors::{AppError, ApplicationError},
    };

    use super::*;
    use crate::{
        dto::{OrderDto, OrderItemDto},
        repository::Filter,
        test_utils::tests::{open_unit_of_work, request_context, test_user},
    };

    fn order_dto(delivery_method_id: Uuid) -> OrderDto {
        OrderDto {
            buyer_email: "buyer@example.com".to_string(),
            delivery_method_id,
            shipping_address: "1 Main Street, Springfield".to_string(),
            items: vec![
                OrderItemDto {
                    product_id: Uuid::new_v4(),
                    product_name: "Mug".to_string(),
                    price_cents: 850,
                    quantity: 2,
                },
                OrderItemDto {
                    product_id: Uuid::new_v4(),
                    product_name: "Tee".to_string(),
                    price_cents: 1500,
                    quantity: 1,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_place_order_handler_success() -> Result<()> {
        let (store, uow) = open_unit_of_work().await;
        let delivery = delivery_method_factory(DeliveryMethodFactoryOptions {
            price_cents: Some(500),
            ..Default::default()
        });
        uow.repository::<DeliveryMethod>().add(&delivery).await?;
        uow.complete().await?;

        let user = test_user();
        let command = PlaceOrder {
            id: Uuid::new_v4(),
            order: order_dto(delivery.id),
        };

        uow.begin_transaction().await?;
        PlaceOrderCommandHandler::new()
            .handle(command.clone(), &uow, &request_context(Some(user.clone())))
            .await?;
        assert_eq!(uow.commit_transaction().await?, 3);

        let order = uow.repository::<Order>().get_by_id(command.id).await?;
        assert_eq!(order.buyer_id, user.id);
        assert_eq!(order.subtotal_cents, 3200);
        assert_eq!(order.total_cents(delivery.price_cents), 3700);
        assert_eq!(order.status, OrderStatus::Pending);

        let items = uow
            .repository::<OrderItem>()
            .find(&Filter::new().eq("order_id", command.id))
            .await?;
        assert_eq!(items.len(), 2);
        assert_eq!(store.count("order_items"), 2);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_place_order_requires_user() -> Result<()> {
        let (store, uow) = open_unit_of_work().await;
        let command = PlaceOrder {
            id: Uuid::new_v4(),
            order: order_dto(Uuid::new_v4()),
        };

        let err = PlaceOrderCommandHandler::new()
            .handle(command, &uow, &request_context(None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::App(AppError::Unauthenticated)));
        assert_eq!(store.count("orders"), 0);

        uow.dispose().await
    }

    #[tokio::test]
    async fn test_place_order_unknown_delivery_method() -> Result<()> {
        let (_, uow) = open_unit_of_work().await;
        let command = PlaceOrder {
            id: Uuid::new_v4(),
            order: order_dto(Uuid::new_v4()),
        };

        let err = PlaceOrderCommandHandler::new()
            .handle(command, &uow, &request_context(Some(test_user())))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(uow.pending_changes().await, 0);

        uow.dispose().await
    }
}
