use emporium_domain::models::DeliveryMethod;
use emporium_types::Result;

use crate::{
    cqrs::{CommandHandler, RequestContext, commands::CreateDeliveryMethod},
    uow::UnitOfWork,
};

pub struct CreateDeliveryMethodCommandHandler {}

impl Default for CreateDeliveryMethodCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateDeliveryMethodCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateDeliveryMethod> for CreateDeliveryMethodCommandHandler {
    async fn handle(
        &self,
        command: CreateDeliveryMethod,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<()> {
        let dto = command.delivery_method;
        let method = DeliveryMethod {
            id: command.id,
            ..DeliveryMethod::new(dto.short_name, dto.delivery_time, dto.description, dto.price_cents)
        };

        uow.repository::<DeliveryMethod>().add(&method).await
    }
}
