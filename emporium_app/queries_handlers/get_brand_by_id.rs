use async_trait::async_trait;

use emporium_domain::models::Brand;
use emporium_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, RequestContext, queries::GetBrandById},
    uow::UnitOfWork,
};

pub struct GetBrandByIdHandler {}

impl GetBrandByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetBrandById> for GetBrandByIdHandler {
    async fn handle(
        &self,
        query: GetBrandById,
        uow: &UnitOfWork,
        _ctx: &RequestContext,
    ) -> Result<<GetBrandById as Query>::Output, ApplicationError> {
        uow.repository::<Brand>().get_by_id(query.id).await
    }
}
