use async_trait::async_trait;

use emporium_domain::models::DeliveryMethod;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetDeliveryMethodById},
    uow::UnitOfWork,
};

pub struct GetDeliveryMethodByIdHandler {}

impl GetDeliveryMethodByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetDeliveryMethodById> for GetDeliveryMethodByIdHandler {
    async fn handle(
        &self,
        query: GetDeliveryMethodById,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<GetDeliveryMethodById as Query>::Output, ApplicationError> {
        uow.repository::<DeliveryMethod>().get_by_id(query.id).await
    }
}
