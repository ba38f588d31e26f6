use async_trait::async_trait;

use emporium_domain::models::DeliveryMethod;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::ListDeliveryMethods},
    uow::UnitOfWork,
};

pub struct ListDeliveryMethodsHandler {}

impl ListDeliveryMethodsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListDeliveryMethods> for ListDeliveryMethodsHandler {
    async fn handle(
        &self,
        _query: ListDeliveryMethods,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<ListDeliveryMethods as Query>::Output, ApplicationError> {
        let mut methods = uow.repository::<DeliveryMethod>().list_all().await?;
        methods.sort_by_key(|m| m.price_cents);
        Ok(methods)
    }
}
